use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "closet", bin_name = "closet", version)]
#[command(about = "Menu-driven wardrobe inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the snapshot and config (overrides CLOSET_HOME)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu session (default)
    Session,

    /// Print the saved clothes as a table
    #[command(alias = "ls")]
    List,

    /// Show or set configuration
    Config {
        /// Config key (snapshot-file, save-on-exit)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["closet"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["closet", "list", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn config_takes_optional_key_and_value() {
        let cli = Cli::try_parse_from(["closet", "config", "save-on-exit", "false"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("save-on-exit"));
                assert_eq!(value.as_deref(), Some("false"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
