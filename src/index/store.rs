use crate::model::{EntityKind, OrgId, Organization, Ticket, TicketId, User, UserId};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// In-memory index over the three collections.
///
/// Built once by [`Index::build`](crate::index::build) and never mutated
/// afterwards, so it can be shared across threads and queried without locks.
#[derive(Debug, Default)]
pub struct Index {
    pub(crate) organizations: AHashMap<OrgId, Organization>,
    pub(crate) users: AHashMap<UserId, User>,
    pub(crate) tickets: AHashMap<TicketId, Ticket>,
    /// Users per organization, in input order
    pub(crate) org_users: AHashMap<OrgId, Vec<UserId>>,
    /// Tickets per organization, in input order
    pub(crate) org_tickets: AHashMap<OrgId, Vec<TicketId>>,
    /// Field names of the first record of each collection, sorted
    pub(crate) searchable_fields: BTreeMap<EntityKind, Vec<String>>,
}

impl Index {
    pub fn organization(&self, id: OrgId) -> Option<&Organization> {
        self.organizations.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.get(id)
    }

    /// Users linked to `org`. Entries may refer to users that no longer exist.
    pub fn users_of(&self, org: OrgId) -> &[UserId] {
        self.org_users.get(&org).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tickets linked to `org`. Entries may refer to tickets that no longer exist.
    pub fn tickets_of(&self, org: OrgId) -> &[TicketId] {
        self.org_tickets.get(&org).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct records of one kind
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Organizations => self.organizations.len(),
            EntityKind::Users => self.users.len(),
            EntityKind::Tickets => self.tickets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|&kind| self.len(kind) == 0)
    }

    /// Field names that can be searched, per entity kind.
    ///
    /// Taken from the first record of each collection only, so fields that
    /// first appear in later records are not listed.
    pub fn searchable_fields(&self) -> &BTreeMap<EntityKind, Vec<String>> {
        &self.searchable_fields
    }
}
