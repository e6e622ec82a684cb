//! Core library for jobmatch.
//!
//! This crate provides the search/aggregation routine and its collaborators
//! used by the `jobmatch` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`dataset`] - Job-ad dataset loading (CSV)
//! - [`search`] - Term matching and occupation aggregation
//! - [`taxonomy`] - SSYK definition lookups with a fixed fallback
//! - [`cache`] - Injectable memoization for definition lookups
//! - [`pagination`] - Explicit result paging
//! - [`links`] - Outbound Platsbanken search links
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use jobmatch_core::{Dataset, aggregate};
//!
//! let dataset = Dataset::load(Utf8Path::new("finaldataset.csv"))
//!     .expect("dataset should be readable");
//! let ranked = aggregate("nurse, doctor", dataset.records());
//! for entry in &ranked {
//!     println!("{}: {}", entry.title, entry.count);
//! }
//! ```
#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod links;
pub mod pagination;
pub mod search;
pub mod taxonomy;

pub use cache::CachedDefinitions;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dataset::{Dataset, JobRecord};
pub use error::{ConfigError, ConfigResult, DatasetError, DatasetResult};
pub use links::listings_url;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use search::{RankedOccupation, aggregate};
pub use taxonomy::{
    DefinitionSource, DescribedOccupation, FALLBACK_DEFINITION, FallbackOnly, TaxonomyClient,
    enrich,
};
