//! Catalog data model: distributions, components, and packages.
//!
//! A catalog is the read-only snapshot produced by one repository scan.
//! Everything here is constructed once by the engine and never mutated
//! afterwards, so it can be shared freely with any number of consumers.

pub mod tables;

pub use tables::ScanTables;

use serde::Serialize;

/// One distributable unit from a `Packages` index.
///
/// Before merging, a package is unique per (name, component, architecture).
/// After merging, it is unique per (name, component) and carries the full
/// set of architectures it was observed under.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Package {
    /// Package name, unique within (distribution, component) after merge
    pub name: String,
    /// Opaque version string, compared only for equality
    pub version: String,
    /// Free-text description, one logical line
    pub description: String,
    /// Primary architecture chosen for display
    pub architecture: String,
    /// Every architecture this package was observed under, sorted
    pub all_architectures: Vec<String>,
    /// Relative path to the .deb artifact (first-seen, never merged)
    pub filename: String,
    /// Component this record belongs to
    pub component: String,
}

/// A named release channel of the repository.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    /// Directory-derived identifier (e.g. "stable", "bookworm-unstable")
    pub name: String,
    /// Human-readable name from the display table
    pub display_name: String,
    /// Presentation description from the display table
    pub description: String,
    /// Merged packages, sorted by (component, name)
    pub packages: Vec<Package>,
}

impl Distribution {
    /// Number of distinct package names in this distribution.
    pub fn package_count(&self) -> usize {
        let mut names: Vec<&str> = self.packages.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    /// Components that have packages, known components first in their
    /// preferred order, then others alphabetically. Never empty: falls
    /// back to a lone "main" so pages always have something to show.
    pub fn components(&self, tables: &ScanTables) -> Vec<String> {
        let mut found: Vec<String> = self.packages.iter().map(|p| p.component.clone()).collect();
        found.sort_unstable();
        found.dedup();

        let mut ordered = Vec::new();
        for known in &tables.known_components {
            if let Some(pos) = found.iter().position(|c| c == known) {
                ordered.push(found.remove(pos));
            }
        }
        ordered.extend(found);

        if ordered.is_empty() {
            ordered.push("main".to_string());
        }
        ordered
    }

    /// Packages belonging to one component, in catalog order.
    pub fn packages_by_component<'a>(&'a self, component: &str) -> Vec<&'a Package> {
        self.packages
            .iter()
            .filter(|p| p.component == component)
            .collect()
    }

    /// Number of distinct package names within one component.
    pub fn component_package_count(&self, component: &str) -> usize {
        let mut names: Vec<&str> = self
            .packages
            .iter()
            .filter(|p| p.component == component)
            .map(|p| p.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    /// Product distributions are named without a separator (e.g. "stable");
    /// OS-release distributions follow the "{distro}-{channel}" pattern.
    pub fn is_product(&self) -> bool {
        !self.name.contains('-')
    }
}
