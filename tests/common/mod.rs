//! Common test utilities for Unchained integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Config listing every built-in bundle plus an app bundle
#[allow(dead_code)]
pub const FULL_CONFIG: &str = r#"
BUNDLES:
  - unchained::bundles::babel
  - unchained::bundles::session
  - unchained::bundles::mail
app:
  module_name: my_app
  config:
    SECRET_KEY: not-so-secret
    BABEL_LANGUAGES: [en, fi]
  envs:
    production:
      SECRET_KEY: prod-secret
  extensions:
    - name: db
      class: SQLAlchemy
      module: my_app::extensions
      dependencies: [session]
  services:
    - name: user_manager
      class: UserManager
      module: my_app::services
"#;

/// A temporary directory holding an unchained config
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Workspace with `unchained.yaml` set to `yaml`
    pub fn with_config(yaml: &str) -> Self {
        let workspace = Self::new();
        workspace.write_file("unchained.yaml", yaml);
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.path.join("unchained.yaml")
    }

    /// The unchained binary, run inside the workspace with a clean environment
    #[allow(dead_code, deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("unchained").expect("unchained binary");
        cmd.current_dir(&self.path)
            .env_remove("UNCHAINED_CONFIG")
            .env_remove("UNCHAINED_ENV")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
