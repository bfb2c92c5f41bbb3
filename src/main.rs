use clap::Parser;
use debindex::cli::commands::{
    generate::GenerateCommand, inspect::InspectCommand, CommandHandler,
};
use debindex::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);
    tracing::debug!(command = cli.command.name(), "dispatching");

    let result = match cli.command {
        Commands::Generate {
            repo_dir,
            gpg_fingerprint,
            output_dir,
        } => GenerateCommand::new(repo_dir, gpg_fingerprint, output_dir).execute(),
        Commands::Inspect { repo_dir, format } => {
            InspectCommand::new(repo_dir, format).execute()
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr so generated output and reports on stdout
/// stay clean.
fn initialize_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
