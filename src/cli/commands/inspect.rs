use std::path::PathBuf;

use super::CommandHandler;
use crate::engine::Scanner;
use crate::{DebindexError, Result};

/// Handler for the `inspect` command: scan and print the catalog.
pub struct InspectCommand {
    pub repo_dir: PathBuf,
    pub format: String,
}

impl InspectCommand {
    pub fn new(repo_dir: PathBuf, format: String) -> Self {
        Self { repo_dir, format }
    }
}

impl CommandHandler for InspectCommand {
    fn execute(&self) -> Result<()> {
        if !self.repo_dir.exists() {
            return Err(DebindexError::Path(format!(
                "Repository directory {} does not exist",
                self.repo_dir.display()
            )));
        }

        let scanner = Scanner::new();
        let distributions = scanner.scan(&self.repo_dir);

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&distributions)?);
            return Ok(());
        }

        for dist in &distributions {
            println!(
                "{} ({}): {} packages",
                dist.name,
                dist.display_name,
                dist.package_count()
            );
            for pkg in &dist.packages {
                println!(
                    "  {}/{} {} [{}]",
                    pkg.component,
                    pkg.name,
                    pkg.version,
                    pkg.all_architectures.join(", ")
                );
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}
