//! Deduplication and digest assembly.
//!
//! This crate provides:
//! - `SeenStore`: the flat-file record of posting ids already digested
//! - `filter_new`: the order-preserving cross-run deduplicator
//! - `build`: ranked digest assembly from classified postings
//! - CSV export of the entry-level rows

pub mod builder;
pub mod csv_export;
pub mod dedup;
pub mod seen_store;

pub use builder::build;
pub use csv_export::{csv_filename, digest_csv, ExportError};
pub use dedup::filter_new;
pub use seen_store::{SeenStore, StoreError};
