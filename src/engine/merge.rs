//! Cross-architecture package merging.
//!
//! The same package legitimately appears in several `binary-<arch>`
//! indexes (e.g. both `binary-arm64` and `binary-all`). This module
//! collapses those observations into one record per (name, component)
//! while preserving the full architecture set.

use std::collections::HashMap;

use tracing::warn;

use crate::catalog::{Package, ScanTables};

impl Package {
    /// Fold another observation of the same logical package into this one.
    ///
    /// First-seen fields (version, description, filename) are kept; the
    /// incoming architecture joins the sorted architecture set and the
    /// primary display architecture is recomputed from the preference
    /// table. Pure value-in, value-out so merge order stays auditable.
    fn merged_with(mut self, incoming: &Package, tables: &ScanTables) -> Package {
        if !self.all_architectures.contains(&incoming.architecture) {
            self.all_architectures.push(incoming.architecture.clone());
            self.all_architectures.sort();
        }
        if tables.preferred_architecture(&self.architecture, &incoming.architecture)
            != self.architecture
        {
            self.architecture = incoming.architecture.clone();
        }
        self
    }
}

/// Collapse raw per-architecture records into the final package list.
///
/// Records are grouped by (name, component); the first record seen for a
/// key owns the merged entry. A version disagreement between
/// architectures is a data consistency warning, not a failure: the
/// first-seen version stays authoritative. The result is sorted by
/// (component, name) so repeated scans of the same tree are identical.
pub fn merge_packages(raw: Vec<Package>, tables: &ScanTables) -> Vec<Package> {
    let mut merged: HashMap<(String, String), Package> = HashMap::new();

    for pkg in raw {
        let key = (pkg.name.clone(), pkg.component.clone());
        match merged.get_mut(&key) {
            None => {
                merged.insert(key, pkg);
            }
            Some(existing) => {
                if pkg.version != existing.version {
                    warn!(
                        package = %pkg.name,
                        "package has different versions across architectures: {}={}, {}={}",
                        existing.architecture,
                        existing.version,
                        pkg.architecture,
                        pkg.version,
                    );
                }
                *existing = existing.clone().merged_with(&pkg, tables);
            }
        }
    }

    let mut packages: Vec<Package> = merged.into_values().collect();
    packages.sort_by(|a, b| (&a.component, &a.name).cmp(&(&b.component, &b.name)));
    packages
}
