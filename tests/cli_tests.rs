//! CLI integration tests using the real unchained binary

mod common;

use common::{FULL_CONFIG, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    TestWorkspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundles"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("extensions"))
        .stdout(predicate::str::contains("hooks"))
        .stdout(predicate::str::contains("services"));
}

#[test]
fn test_version_output() {
    TestWorkspace::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unchained"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_bundles_in_load_order() {
    let workspace = TestWorkspace::with_config(FULL_CONFIG);
    let output = workspace.cmd().arg("bundles").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    let names: Vec<&str> = stdout
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec![
            "unchained_bundle",
            "babel_bundle",
            "session_bundle",
            "mail_bundle",
            "app"
        ]
    );
    assert!(stdout.contains("unchained::bundles::babel::bundle::BabelBundle"));
    assert!(stdout.contains("my_app::App"));
}

#[test]
fn test_config_all_options() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config Key"))
        .stdout(predicate::str::contains("SECRET_KEY"))
        .stdout(predicate::str::contains("not-so-secret"))
        .stdout(predicate::str::contains(r#"["en","fi"]"#))
        .stdout(predicate::str::contains("development"));
}

#[test]
fn test_config_for_bundle() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .args(["config", "mail_bundle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MAIL_PORT"))
        .stdout(predicate::str::contains("SECRET_KEY").not())
        .stdout(predicate::str::contains("SESSION_TYPE").not());
}

#[test]
fn test_config_env_option() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .args(["--env", "production", "config", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod-secret"))
        .stdout(predicate::str::contains("not-so-secret").not());
}

#[test]
fn test_config_env_from_environment() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .env("UNCHAINED_ENV", "test")
        .args(["config", "unchained_bundle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TESTING"))
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_config_unknown_bundle() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .args(["config", "nope_bundle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle 'nope_bundle' not found"));
}

#[test]
fn test_extensions_sorted_by_name() {
    let workspace = TestWorkspace::with_config(FULL_CONFIG);
    let output = workspace.cmd().arg("extensions").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    let names: Vec<&str> = stdout
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["babel", "db", "mail", "session"]);
    assert!(stdout.contains("SQLAlchemy"));
}

#[test]
fn test_extensions_missing_dependency() {
    TestWorkspace::with_config(
        r#"
BUNDLES: []
app:
  extensions:
    - name: db
      class: SQLAlchemy
      module: my_app::extensions
      dependencies: [session]
"#,
    )
    .cmd()
    .arg("extensions")
    .assert()
    .failure()
    .stderr(predicate::str::contains("unregistered extension 'session'"));
}

#[test]
fn test_hooks_collection_order() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .arg("hooks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hook Name"))
        .stdout(predicate::str::contains("Bundle Module Override Attr"))
        .stdout(predicate::str::contains("config_module_name"))
        .stdout(predicate::str::contains("register_locales"))
        .stdout(predicate::str::contains("(None)"));
}

#[test]
fn test_hooks_without_bundles_key() {
    TestWorkspace::with_config("app:\n  module_name: my_app\n")
        .cmd()
        .arg("hooks")
        .assert()
        .success()
        .stdout(predicate::str::contains("configure_app"))
        .stdout(predicate::str::contains("register_locales").not());
}

#[test]
fn test_hooks_run_order() {
    let workspace = TestWorkspace::with_config(FULL_CONFIG);
    let output = workspace
        .cmd()
        .args(["hooks", "--run-order"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let names: Vec<&str> = stdout
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .collect();

    let pos = |name: &str| names.iter().position(|n| *n == name);
    assert!(pos("configure_app") < pos("register_locales"));
    assert!(pos("register_extensions") < pos("register_services"));
}

#[test]
fn test_services_sorted() {
    let workspace = TestWorkspace::with_config(FULL_CONFIG);
    let output = workspace.cmd().arg("services").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    let names: Vec<&str> = stdout
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec![
            "send_mail",
            "user_manager",
            "mail_service",
            "session_interface"
        ]
    );
    assert!(stdout.contains("<fn unchained::bundles::mail::send_mail>"));
}

#[test]
fn test_config_path_option() {
    let workspace = TestWorkspace::new();
    workspace.write_file("conf/app.yaml", "BUNDLES:\n  - unchained::bundles::session\n");
    workspace
        .cmd()
        .args(["-c", "conf/app.yaml", "bundles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session_bundle"));
}

#[test]
fn test_missing_config_file() {
    TestWorkspace::new()
        .cmd()
        .arg("bundles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_missing_bundles_key() {
    TestWorkspace::with_config("app:\n  module_name: my_app\n")
        .cmd()
        .arg("bundles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BUNDLES is not set"));
}

#[test]
fn test_unknown_bundle_path() {
    TestWorkspace::with_config("BUNDLES:\n  - my_app::nothing_here\n")
        .cmd()
        .arg("bundles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("my_app::nothing_here"));
}

#[test]
fn test_malformed_config() {
    TestWorkspace::with_config("BUNDLES: [unclosed\n")
        .cmd()
        .arg("bundles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    TestWorkspace::with_config(FULL_CONFIG)
        .cmd()
        .args(["-v", "bundles"])
        .assert()
        .success()
        .stderr(predicate::str::contains("running hook"))
        .stdout(predicate::str::contains("running hook").not());
}

#[test]
fn test_completions() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchained"));

    TestWorkspace::new()
        .cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
