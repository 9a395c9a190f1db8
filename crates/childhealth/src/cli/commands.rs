//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Vaccine knowledge base command arguments.
#[derive(Debug, Args)]
pub struct VaccinesCommand {
    /// Disease to look up (lists all known diseases when omitted)
    pub disease: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vaccines_command_debug() {
        let cmd = VaccinesCommand {
            disease: Some("Measles".to_string()),
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Measles"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
