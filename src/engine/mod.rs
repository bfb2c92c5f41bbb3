//! The debindex engine: repository ingestion and reconciliation.
//!
//! The pipeline runs in three stages:
//! - stanza parsing turns `Packages` text into field maps
//! - the builder projects field maps into typed [`Package`] records
//! - the scanner walks the `dists/` tree and folds per-architecture
//!   records into one merged catalog per distribution
//!
//! [`Package`]: crate::catalog::Package

pub mod builder;
pub mod merge;
pub mod scanner;
pub mod stanza;

pub use merge::merge_packages;
pub use scanner::Scanner;
pub use stanza::{stanzas, FieldMap};
