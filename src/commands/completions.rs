//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{Result, UnchainedError};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "unchained", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(UnchainedError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert_eq!(parse_shell("bash").ok(), Some(Shell::Bash));
        assert_eq!(parse_shell("elvish").ok(), Some(Shell::Elvish));
        assert_eq!(parse_shell("fish").ok(), Some(Shell::Fish));
        assert_eq!(parse_shell("powershell").ok(), Some(Shell::PowerShell));
        assert_eq!(parse_shell("pwsh").ok(), Some(Shell::PowerShell));
        assert_eq!(parse_shell("zsh").ok(), Some(Shell::Zsh));
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert_eq!(parse_shell("BASH").ok(), Some(Shell::Bash));
        assert_eq!(parse_shell("Zsh").ok(), Some(Shell::Zsh));
    }

    #[test]
    fn test_unknown_shell() {
        let err = parse_shell("tcsh").err();
        assert!(matches!(err, Some(UnchainedError::UnknownShell { .. })));
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs {
            shell: "zsh".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
