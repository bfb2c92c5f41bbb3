//! Repository scanner: walks the `dists/` tree and builds the catalog.
//!
//! Layout consumed:
//!
//! ```text
//! <root>/dists/<distribution>/<component>/binary-<arch>/Packages
//! ```
//!
//! Scanning is deliberately tolerant. A missing `dists` directory, a
//! component without index files, or an unreadable `Packages` file all
//! contribute zero data instead of failing the scan; only the CLI layer
//! treats a nonexistent repository root as an error.

use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::catalog::{Distribution, Package, ScanTables};
use crate::engine::merge::merge_packages;
use crate::engine::stanza::{read_packages_text, stanzas};

/// Scans a repository tree into a list of [`Distribution`]s.
///
/// Holds the lookup tables for one scan so nothing is read from
/// process-wide state.
pub struct Scanner {
    tables: ScanTables,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Scanner with the production lookup tables.
    pub fn new() -> Self {
        Self {
            tables: ScanTables::default(),
        }
    }

    /// Scanner with injected tables, used by tests and embedders.
    pub fn with_tables(tables: ScanTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScanTables {
        &self.tables
    }

    /// Scan `repo_dir` for distributions, in sorted name order.
    ///
    /// A repository without a `dists` directory yields an empty catalog.
    pub fn scan(&self, repo_dir: &Path) -> Vec<Distribution> {
        let dists_dir = repo_dir.join("dists");
        if !dists_dir.is_dir() {
            debug!(path = %dists_dir.display(), "no dists directory, empty catalog");
            return Vec::new();
        }

        let mut distributions = Vec::new();
        for entry in WalkDir::new(&dists_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            distributions.push(self.scan_distribution(entry.path(), &name));
        }
        distributions
    }

    fn scan_distribution(&self, dist_path: &Path, name: &str) -> Distribution {
        let components = self.discover_components(dist_path);

        let mut raw = Vec::new();
        for component in &components {
            for arch in &self.tables.supported_architectures {
                let packages_file = dist_path
                    .join(component)
                    .join(format!("binary-{arch}"))
                    .join("Packages");
                raw.extend(parse_packages_file(&packages_file, component));
            }
        }

        let packages = merge_packages(raw, &self.tables);
        let (display_name, description) = self.tables.distribution_info(name);
        info!(
            distribution = name,
            components = components.len(),
            packages = packages.len(),
            "scanned distribution"
        );

        Distribution {
            name: name.to_string(),
            display_name,
            description,
            packages,
        }
    }

    /// A component is any non-hidden subdirectory with at least one
    /// `binary-<arch>` directory for a supported architecture. Known
    /// components come first in their declared order, the rest follow
    /// alphabetically.
    fn discover_components(&self, dist_path: &Path) -> Vec<String> {
        let mut components = Vec::new();
        for entry in WalkDir::new(dist_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            let has_arch_dir = self
                .tables
                .supported_architectures
                .iter()
                .any(|arch| entry.path().join(format!("binary-{arch}")).is_dir());
            if has_arch_dir {
                components.push(name.into_owned());
            }
        }

        let known = &self.tables.known_components;
        components.sort_by(|a, b| {
            let rank = |c: &String| match known.iter().position(|k| k == c) {
                Some(i) => (0, i, String::new()),
                None => (1, 0, c.clone()),
            };
            rank(a).cmp(&rank(b))
        });
        components
    }
}

/// Parse one `Packages` file into component-tagged records.
///
/// A missing file yields an empty list; stanzas missing required fields
/// are dropped individually.
pub fn parse_packages_file(path: &Path, component: &str) -> Vec<Package> {
    let Some(text) = read_packages_text(path) else {
        return Vec::new();
    };
    stanzas(&text)
        .filter_map(|fields| Package::from_fields(&fields, component))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const FOO_STANZA: &str = "Package: foo\n\
                              Version: 1.2.3\n\
                              Architecture: arm64\n\
                              Description: does foo\n\
                              Filename: pool/foo.deb\n\n";

    fn write_packages(root: &Path, dist: &str, component: &str, arch: &str, content: &str) {
        let dir = root
            .join("dists")
            .join(dist)
            .join(component)
            .join(format!("binary-{arch}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Packages"), content).unwrap();
    }

    #[test]
    fn missing_dists_directory_yields_empty_catalog() {
        let temp = TempDir::new().unwrap();
        assert!(Scanner::new().scan(temp.path()).is_empty());
    }

    #[test]
    fn scans_single_distribution() {
        let temp = TempDir::new().unwrap();
        write_packages(temp.path(), "stable", "main", "arm64", FOO_STANZA);

        let dists = Scanner::new().scan(temp.path());
        assert_eq!(dists.len(), 1);
        assert_eq!(dists[0].name, "stable");
        assert_eq!(dists[0].display_name, "Stable");
        assert_eq!(dists[0].package_count(), 1);
        assert_eq!(dists[0].packages[0].name, "foo");
    }

    #[test]
    fn merges_same_package_across_architectures() {
        let temp = TempDir::new().unwrap();
        write_packages(temp.path(), "stable", "main", "arm64", FOO_STANZA);
        write_packages(
            temp.path(),
            "stable",
            "main",
            "all",
            "Package: foo\nVersion: 1.2.3\nArchitecture: all\nDescription: does foo\nFilename: pool/foo.deb\n\n",
        );

        let dists = Scanner::new().scan(temp.path());
        assert_eq!(dists[0].packages.len(), 1);
        let pkg = &dists[0].packages[0];
        assert_eq!(pkg.architecture, "arm64");
        assert_eq!(pkg.all_architectures, vec!["all", "arm64"]);
    }

    #[test]
    fn component_without_packages_files_is_still_listed() {
        let temp = TempDir::new().unwrap();
        let dir = temp
            .path()
            .join("dists/bookworm-stable/main/binary-arm64");
        fs::create_dir_all(&dir).unwrap();

        let dists = Scanner::new().scan(temp.path());
        assert_eq!(dists.len(), 1);
        assert_eq!(dists[0].package_count(), 0);
        let tables = ScanTables::default();
        assert_eq!(dists[0].components(&tables), vec!["main"]);
    }

    #[test]
    fn hidden_and_archless_directories_are_not_components() {
        let temp = TempDir::new().unwrap();
        write_packages(temp.path(), "stable", "main", "arm64", FOO_STANZA);
        fs::create_dir_all(temp.path().join("dists/stable/.git")).unwrap();
        fs::create_dir_all(temp.path().join("dists/stable/docs")).unwrap();
        // Unsupported architecture directory does not qualify either
        fs::create_dir_all(temp.path().join("dists/stable/weird/binary-mips")).unwrap();

        let scanner = Scanner::new();
        let components = scanner.discover_components(&temp.path().join("dists/stable"));
        assert_eq!(components, vec!["main"]);
    }

    #[test]
    fn components_ordered_known_first_then_alphabetical() {
        let temp = TempDir::new().unwrap();
        for component in ["zeta", "hatlabs", "extras", "main"] {
            write_packages(temp.path(), "stable", component, "arm64", FOO_STANZA);
        }

        let scanner = Scanner::new();
        let components = scanner.discover_components(&temp.path().join("dists/stable"));
        assert_eq!(components, vec!["main", "hatlabs", "extras", "zeta"]);
    }

    #[test]
    fn distributions_listed_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        for dist in ["unstable", "stable", "bookworm-stable"] {
            write_packages(temp.path(), dist, "main", "arm64", FOO_STANZA);
        }

        let names: Vec<String> = Scanner::new()
            .scan(temp.path())
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["bookworm-stable", "stable", "unstable"]);
    }

    #[test]
    fn repeated_scans_are_identical() {
        let temp = TempDir::new().unwrap();
        write_packages(temp.path(), "stable", "main", "arm64", FOO_STANZA);
        write_packages(
            temp.path(),
            "stable",
            "hatlabs",
            "armhf",
            "Package: bar\nVersion: 0.9\nArchitecture: armhf\nDescription: does bar\nFilename: pool/bar.deb\n\n",
        );

        let scanner = Scanner::new();
        let first = scanner.scan(temp.path());
        let second = scanner.scan(temp.path());
        assert_eq!(first[0].packages, second[0].packages);
    }

    #[test]
    fn parse_packages_file_drops_incomplete_stanzas() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Packages");
        fs::write(
            &path,
            "Package: partial\nVersion: 1.0\n\nPackage: whole\nVersion: 2.0\nDescription: ok\nFilename: pool/whole.deb\n\n",
        )
        .unwrap();

        let packages = parse_packages_file(&path, "main");
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "whole");
    }
}
