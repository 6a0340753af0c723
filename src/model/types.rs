use crate::error::SearchError;
use crate::model::value::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Field holding every record's unique identifier
pub const ID_FIELD: &str = "_id";

/// Field linking users and tickets to their organization
pub const ORGANIZATION_ID_FIELD: &str = "organization_id";

pub type Organization = Record;
pub type User = Record;
pub type Ticket = Record;

/// Organization identifier (numeric `_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrgId(pub i64);

/// User identifier (numeric `_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Ticket identifier (string `_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(pub String);

/// The three collections that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Organizations,
    Users,
    Tickets,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Organizations,
        EntityKind::Users,
        EntityKind::Tickets,
    ];

    /// Lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Organizations => "organizations",
            EntityKind::Users => "users",
            EntityKind::Tickets => "tickets",
        }
    }

    /// Capitalized name for headings
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Organizations => "Organizations",
            EntityKind::Users => "Users",
            EntityKind::Tickets => "Tickets",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "organizations" | "organization" | "orgs" => Ok(EntityKind::Organizations),
            "users" | "user" => Ok(EntityKind::Users),
            "tickets" | "ticket" => Ok(EntityKind::Tickets),
            _ => Err(SearchError::UnknownEntity(s.to_string())),
        }
    }
}

/// Typed identifier of one record kind.
///
/// Implementors decide which dynamic type `_id` must have and how a query
/// value is turned into a key.
pub trait RecordId: Clone + Eq + Hash + fmt::Display + Send {
    const KIND: EntityKind;

    /// Whether records of this kind carry an `organization_id` worth indexing
    const OWNED_BY_ORGANIZATION: bool;

    /// Dynamic type `_id` must have, for error messages
    const EXPECTED_TYPE: &'static str;

    /// Convert a stored `_id` value, `None` if it has the wrong dynamic type.
    fn from_field(value: &FieldValue) -> Option<Self>;

    /// Parse a query value typed by the user.
    fn parse_query(value: &str) -> Result<Self, SearchError>;
}

fn parse_numeric_id(value: &str) -> Result<i64, SearchError> {
    value.parse::<i64>().map_err(|source| SearchError::InvalidId {
        value: value.to_string(),
        source,
    })
}

impl RecordId for OrgId {
    const KIND: EntityKind = EntityKind::Organizations;
    const OWNED_BY_ORGANIZATION: bool = false;
    const EXPECTED_TYPE: &'static str = "number";

    fn from_field(value: &FieldValue) -> Option<Self> {
        // fractional parts never occur in identifiers
        value.as_f64().map(|n| OrgId(n as i64))
    }

    fn parse_query(value: &str) -> Result<Self, SearchError> {
        parse_numeric_id(value).map(OrgId)
    }
}

impl RecordId for UserId {
    const KIND: EntityKind = EntityKind::Users;
    const OWNED_BY_ORGANIZATION: bool = true;
    const EXPECTED_TYPE: &'static str = "number";

    fn from_field(value: &FieldValue) -> Option<Self> {
        value.as_f64().map(|n| UserId(n as i64))
    }

    fn parse_query(value: &str) -> Result<Self, SearchError> {
        parse_numeric_id(value).map(UserId)
    }
}

impl RecordId for TicketId {
    const KIND: EntityKind = EntityKind::Tickets;
    const OWNED_BY_ORGANIZATION: bool = true;
    const EXPECTED_TYPE: &'static str = "string";

    fn from_field(value: &FieldValue) -> Option<Self> {
        value.as_str().map(|s| TicketId(s.to_string()))
    }

    fn parse_query(value: &str) -> Result<Self, SearchError> {
        Ok(TicketId(value.to_string()))
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Organization a user or ticket belongs to, if `organization_id` is a number.
pub fn owning_organization(record: &Record) -> Option<OrgId> {
    record.get(ORGANIZATION_ID_FIELD).and_then(OrgId::from_field)
}
