//! Projection of raw stanza fields into typed [`Package`] records.

use crate::catalog::Package;
use crate::engine::stanza::FieldMap;

/// Fields a stanza must carry to produce a package record.
const REQUIRED_FIELDS: [&str; 4] = ["Package", "Version", "Description", "Filename"];

/// Architecture recorded when a stanza omits the `Architecture` field.
const FALLBACK_ARCHITECTURE: &str = "unknown";

impl Package {
    /// Build a package from one stanza's fields, tagged with a component.
    ///
    /// Returns `None` when any required field is missing; partial records
    /// are never emitted. `Architecture` is optional and falls back to
    /// `"unknown"`. The architecture set starts as a singleton and grows
    /// during merging.
    pub fn from_fields(fields: &FieldMap, component: &str) -> Option<Package> {
        if REQUIRED_FIELDS.iter().any(|f| !fields.contains_key(*f)) {
            return None;
        }

        let architecture = fields
            .get("Architecture")
            .cloned()
            .unwrap_or_else(|| FALLBACK_ARCHITECTURE.to_string());

        Some(Package {
            name: fields["Package"].clone(),
            version: fields["Version"].clone(),
            description: fields["Description"].clone(),
            all_architectures: vec![architecture.clone()],
            architecture,
            filename: fields["Filename"].clone(),
            component: component.to_string(),
        })
    }
}
