//! Job-search API boundary.
//!
//! This crate provides:
//! - `JobSearchProvider` trait for pluggable search backends
//! - A SerpApi `google_jobs` implementation over reqwest
//! - `collect_postings`, which runs every configured query and collapses
//!   in-run duplicates

pub mod collect;
pub mod provider;
pub mod serpapi;

pub use collect::collect_postings;
pub use provider::{JobSearchProvider, SearchError};
pub use serpapi::SerpApiClient;
