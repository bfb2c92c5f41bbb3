//! Writes the rendered site to the output directory.

use std::path::Path;

use tracing::info;

use crate::catalog::{Distribution, ScanTables};
use crate::render::{render_distribution_page, render_main_index, STYLESHEET};
use crate::{DebindexError, Result};

/// Write the stylesheet, overview page, and one page per distribution.
///
/// Any write failure is fatal: nothing is retried and the error carries
/// the offending path so the operator can act on it.
pub fn write_site(
    output_dir: &Path,
    distributions: &[Distribution],
    tables: &ScanTables,
    fingerprint: &str,
) -> Result<()> {
    write_file(&output_dir.join("styles.css"), STYLESHEET)?;

    let index = render_main_index(distributions, tables, fingerprint);
    write_file(&output_dir.join("index.html"), &index)?;

    for dist in distributions {
        let page = render_distribution_page(dist, tables, fingerprint);
        write_file(&output_dir.join(format!("{}.html", dist.name)), &page)?;
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| {
        DebindexError::Output(format!("Failed to write {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), "generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dist(name: &str) -> Distribution {
        Distribution {
            name: name.to_string(),
            display_name: name.to_string(),
            description: String::new(),
            packages: vec![],
        }
    }

    #[test]
    fn writes_all_site_files() {
        let temp = TempDir::new().unwrap();
        let dists = vec![dist("stable"), dist("bookworm-unstable")];
        write_site(temp.path(), &dists, &ScanTables::default(), "FP123").unwrap();

        assert!(temp.path().join("styles.css").exists());
        assert!(temp.path().join("index.html").exists());
        assert!(temp.path().join("stable.html").exists());
        assert!(temp.path().join("bookworm-unstable.html").exists());

        let page = std::fs::read_to_string(temp.path().join("stable.html")).unwrap();
        assert!(page.contains("styles.css"));
        assert!(page.contains("FP123"));
    }

    #[test]
    fn missing_output_directory_is_an_output_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");
        let err = write_site(&missing, &[dist("stable")], &ScanTables::default(), "FP")
            .unwrap_err();
        assert!(matches!(err, DebindexError::Output(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
