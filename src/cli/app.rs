use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// debindex: APT repository index page generator
#[derive(Parser)]
#[command(name = "debindex")]
#[command(version = "0.1.0")]
#[command(about = "Generate APT repository index pages")]
#[command(
    long_about = "debindex scans an apt-repo directory tree, merges per-architecture package indexes into one catalog, and renders browsable HTML pages for every distribution."
)]
pub struct Cli {
    /// Log level filter (e.g. "info", "debindex=debug")
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the repository and write the HTML site
    Generate {
        /// Path to the apt-repo directory
        repo_dir: PathBuf,

        /// GPG key fingerprint shown on every page
        #[arg(long)]
        gpg_fingerprint: String,

        /// Output directory (default: the repository directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Scan the repository and print the catalog without writing
    Inspect {
        /// Path to the apt-repo directory
        repo_dir: PathBuf,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate { .. } => "generate",
            Commands::Inspect { .. } => "inspect",
        }
    }

    /// Check if this command writes files
    pub fn modifies_files(&self) -> bool {
        matches!(self, Commands::Generate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate() -> Commands {
        Commands::Generate {
            repo_dir: PathBuf::from("/tmp/apt-repo"),
            gpg_fingerprint: "FP".to_string(),
            output_dir: None,
        }
    }

    fn inspect() -> Commands {
        Commands::Inspect {
            repo_dir: PathBuf::from("/tmp/apt-repo"),
            format: "text".to_string(),
        }
    }

    #[test]
    fn command_names() {
        assert_eq!(generate().name(), "generate");
        assert_eq!(inspect().name(), "inspect");
    }

    #[test]
    fn only_generate_modifies_files() {
        assert!(generate().modifies_files());
        assert!(!inspect().modifies_files());
    }
}
