//! Schema-free record model.
//!
//! Organizations, users and tickets share one representation: a [`Record`]
//! mapping field names to dynamically-typed [`FieldValue`]s. Typed
//! identifiers are only extracted when the index is built.

pub mod results;
pub mod types;
pub mod value;

pub use results::*;
pub use types::*;
pub use value::*;
