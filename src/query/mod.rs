pub mod executor;
pub mod matcher;
pub mod terms;

pub use matcher::matches;
pub use terms::{split_terms, TERM_SEPARATOR};

use crate::error::SearchError;
use crate::index::Index;
use crate::model::{EntityKind, OrganizationResult, TicketResult, UserResult};
use std::collections::BTreeMap;

/// Query operations the presentation layer depends on.
///
/// Implemented by [`Index`]; tests of the presentation layer substitute their own.
pub trait Searcher {
    fn organizations(
        &self,
        term: &str,
        value: &str,
    ) -> Result<Vec<OrganizationResult>, SearchError>;
    fn users(&self, term: &str, value: &str) -> Result<Vec<UserResult>, SearchError>;
    fn tickets(&self, term: &str, value: &str) -> Result<Vec<TicketResult>, SearchError>;
    fn searchable_fields(&self) -> BTreeMap<EntityKind, Vec<String>>;
}

impl Searcher for Index {
    fn organizations(
        &self,
        term: &str,
        value: &str,
    ) -> Result<Vec<OrganizationResult>, SearchError> {
        Index::organizations(self, term, value)
    }

    fn users(&self, term: &str, value: &str) -> Result<Vec<UserResult>, SearchError> {
        Index::users(self, term, value)
    }

    fn tickets(&self, term: &str, value: &str) -> Result<Vec<TicketResult>, SearchError> {
        Index::tickets(self, term, value)
    }

    fn searchable_fields(&self) -> BTreeMap<EntityKind, Vec<String>> {
        Index::searchable_fields(self).clone()
    }
}
