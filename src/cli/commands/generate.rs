use std::path::PathBuf;

use tracing::{info, warn};

use super::CommandHandler;
use crate::engine::Scanner;
use crate::io::write_site;
use crate::{DebindexError, Result};

/// Handler for the `generate` command: scan, render, write.
pub struct GenerateCommand {
    pub repo_dir: PathBuf,
    pub gpg_fingerprint: String,
    pub output_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn new(repo_dir: PathBuf, gpg_fingerprint: String, output_dir: Option<PathBuf>) -> Self {
        Self {
            repo_dir,
            gpg_fingerprint,
            output_dir,
        }
    }
}

impl CommandHandler for GenerateCommand {
    fn execute(&self) -> Result<()> {
        if !self.repo_dir.exists() {
            return Err(DebindexError::Path(format!(
                "Repository directory {} does not exist",
                self.repo_dir.display()
            )));
        }
        let output_dir = self.output_dir.clone().unwrap_or_else(|| self.repo_dir.clone());

        info!(path = %self.repo_dir.display(), "scanning distributions");
        let scanner = Scanner::new();
        let distributions = scanner.scan(&self.repo_dir);

        if distributions.is_empty() {
            // A repository with no distributions yet is unusual but valid
            warn!("no distributions found");
        }
        for dist in &distributions {
            eprintln!("  - {}: {} packages", dist.name, dist.package_count());
        }

        write_site(
            &output_dir,
            &distributions,
            scanner.tables(),
            &self.gpg_fingerprint,
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "generate"
    }
}
