//! # zearch - search over organizations, users and tickets
//!
//! Three JSON collections are loaded once into an in-memory [`Index`] and
//! queried with single `field = value` terms. Any field can be searched,
//! whatever its value type, and results come back joined with their related
//! records: an organization's users and tickets, a user's or ticket's
//! organization name.
//!
//! ## Architecture
//!
//! - [`model`] - schema-free records, typed identifiers, result views
//! - [`index`] - index construction (three collections in parallel)
//! - [`query`] - value matching and the per-kind query operations
//! - [`loader`] - reading the JSON files
//! - [`output`] - text and JSON rendering
//! - [`app`] - interactive menu and search dispatch
//! - [`config`] - data file locations
//!
//! ## Quick Start
//!
//! ```no_run
//! use zearch::loader::DataSet;
//! use std::path::Path;
//!
//! let index = DataSet::load(
//!     Path::new("data/organizations.json"),
//!     Path::new("data/users.json"),
//!     Path::new("data/tickets.json"),
//! )?
//! .into_index()?;
//!
//! for result in index.organizations("tags", "Farley")? {
//!     println!("{:?} has users {:?}", result.organization.get("name"), result.user_names);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Lookups by `_id` go straight to a hash map; every other field is a scan.
//! List-valued fields match by substring of their `;`-joined elements, every
//! other type by exact equality.

pub mod app;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{IndexError, SearchError};
pub use index::Index;
pub use query::Searcher;
