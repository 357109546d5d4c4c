use crate::tracing::LogLevel;
use actionsmith_settings::DEFAULT_SETTINGS_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "actionsmith")]
#[command(about = "Generate GitHub Actions workflows for sbt projects")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    #[arg(
        short = 'c',
        long,
        global = true,
        help = "Settings file, relative to the project root",
        default_value = DEFAULT_SETTINGS_FILE,
        env = "ACTIONSMITH_CONFIG"
    )]
    pub config: PathBuf,

    #[arg(
        short = 'r',
        long,
        global = true,
        help = "Project root containing .github/workflows",
        default_value = "."
    )]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Write the workflow file to .github/workflows")]
    Generate {
        #[arg(long, help = "Report what would change without writing")]
        dry_run: bool,
    },
    #[command(about = "Fail if the committed workflow file is missing or out of date")]
    Check,
    #[command(about = "Print the generated workflow to stdout")]
    Print,
}

impl Cli {
    /// Settings file path; relative paths resolve against the project root
    pub fn config_path(&self) -> PathBuf {
        if self.config.is_absolute() {
            self.config.clone()
        } else {
            self.root.join(&self.config)
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["actionsmith", "print"]).unwrap();

        assert_eq!(cli.level, LogLevel::Warn);
        assert!(!cli.json);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.command, Commands::Print);
    }

    #[test]
    fn test_cli_log_level_parsing() {
        let cli = Cli::try_parse_from(["actionsmith", "--level", "trace", "check"]).unwrap();
        assert_eq!(cli.level, LogLevel::Trace);

        let cli = Cli::try_parse_from(["actionsmith", "check", "-l", "error"]).unwrap();
        assert_eq!(cli.level, LogLevel::Error);

        assert!(Cli::try_parse_from(["actionsmith", "--level", "loud", "check"]).is_err());
    }

    #[test]
    fn test_generate_dry_run() {
        let cli = Cli::try_parse_from(["actionsmith", "generate", "--dry-run"]).unwrap();
        assert_eq!(cli.command, Commands::Generate { dry_run: true });

        let cli = Cli::try_parse_from(["actionsmith", "generate"]).unwrap();
        assert_eq!(cli.command, Commands::Generate { dry_run: false });
    }

    #[test]
    fn test_config_path_resolution() {
        let cli = Cli::try_parse_from(["actionsmith", "--root", "/repo", "print"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/repo/actionsmith.toml"));

        let cli = Cli::try_parse_from([
            "actionsmith",
            "--root",
            "/repo",
            "--config",
            "/etc/ci.toml",
            "print",
        ])
        .unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/etc/ci.toml"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["actionsmith"]).is_err());
    }
}
