//! Static lookup tables carried as injected configuration.
//!
//! The scanner and merge engine take these as a value instead of reading
//! process-wide state, so tests can substitute their own tables.

use std::collections::HashMap;

/// Configuration tables for one scan: supported architectures, component
/// ordering, architecture display preference, and distribution metadata.
#[derive(Debug, Clone)]
pub struct ScanTables {
    /// Architectures whose `binary-<arch>` directories are scanned, in
    /// canonical processing order
    pub supported_architectures: Vec<String>,
    /// Components listed first, in this order, before any others
    pub known_components: Vec<String>,
    /// Display preference rank per architecture (higher wins)
    arch_preference: HashMap<String, u8>,
    /// Display name and description per distribution name
    distribution_info: HashMap<String, (String, String)>,
    /// Human-readable component names
    component_names: HashMap<String, String>,
}

/// Preference rank for architectures absent from the table.
const DEFAULT_ARCH_RANK: u8 = 1;

impl Default for ScanTables {
    fn default() -> Self {
        let distribution_info = [
            ("stable", "Stable", "Hat Labs product packages (stable releases)"),
            ("unstable", "Unstable", "Hat Labs product packages (rolling, latest from main)"),
            ("bookworm-stable", "Bookworm Stable", "Halos packages for Debian Bookworm (stable releases)"),
            ("bookworm-unstable", "Bookworm Unstable", "Halos packages for Debian Bookworm (rolling)"),
            ("trixie-stable", "Trixie Stable", "Halos packages for Debian Trixie (stable releases)"),
            ("trixie-unstable", "Trixie Unstable", "Halos packages for Debian Trixie (rolling)"),
        ]
        .into_iter()
        .map(|(name, display, desc)| (name.to_string(), (display.to_string(), desc.to_string())))
        .collect();

        let arch_preference = [("all", 0u8), ("armhf", 1), ("arm64", 2)]
            .into_iter()
            .map(|(arch, rank)| (arch.to_string(), rank))
            .collect();

        let component_names = [("main", "Main Packages"), ("hatlabs", "Hat Labs Products")]
            .into_iter()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect();

        Self {
            supported_architectures: vec![
                "arm64".to_string(),
                "armhf".to_string(),
                "all".to_string(),
            ],
            known_components: vec!["main".to_string(), "hatlabs".to_string()],
            arch_preference,
            distribution_info,
            component_names,
        }
    }
}

impl ScanTables {
    /// Pick the architecture to display for a merged package.
    ///
    /// Specific hardware architectures outrank the generic "all" marker;
    /// unknown architectures get a middle rank. Ties keep the existing
    /// value, so merge results do not depend on equal-rank arrival order.
    pub fn preferred_architecture<'a>(&self, existing: &'a str, incoming: &'a str) -> &'a str {
        if self.arch_rank(existing) >= self.arch_rank(incoming) {
            existing
        } else {
            incoming
        }
    }

    fn arch_rank(&self, arch: &str) -> u8 {
        self.arch_preference
            .get(arch)
            .copied()
            .unwrap_or(DEFAULT_ARCH_RANK)
    }

    /// Display name and description for a distribution.
    ///
    /// Unknown names get a title-cased display name and a generic
    /// description; this is a presentation default, not an error.
    pub fn distribution_info(&self, name: &str) -> (String, String) {
        match self.distribution_info.get(name) {
            Some((display, desc)) => (display.clone(), desc.clone()),
            None => (title_case(name), format!("{name} distribution")),
        }
    }

    /// Human-readable name for a component, title-cased when unknown.
    pub fn component_display_name(&self, component: &str) -> String {
        match self.component_names.get(component) {
            Some(name) => name.clone(),
            None => title_case(component),
        }
    }
}

/// Uppercase the first letter of every alphabetic run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
