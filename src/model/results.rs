//! Enriched search results.
//!
//! These are computed views over the index, built per query and never stored.

use crate::model::types::{Organization, Ticket, User};
use serde::Serialize;

/// An organization with the names of its users and subjects of its tickets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationResult {
    #[serde(flatten)]
    pub organization: Organization,
    pub user_names: Vec<String>,
    pub ticket_subjects: Vec<String>,
}

/// A user with its organization's name and that organization's ticket subjects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResult {
    #[serde(flatten)]
    pub user: User,
    pub organization_name: String,
    pub ticket_subjects: Vec<String>,
}

/// A ticket with its organization's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketResult {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub organization_name: String,
}
