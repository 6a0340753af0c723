use crate::error::IndexError;
use crate::index::store::Index;
use crate::model::{
    owning_organization, EntityKind, OrgId, Organization, Record, RecordId, Ticket, TicketId, User,
    UserId, ID_FIELD,
};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Result of indexing a single collection (computed in parallel)
struct IndexedCollection<K> {
    by_id: AHashMap<K, Record>,
    by_organization: AHashMap<OrgId, Vec<K>>,
}

/// Index one collection by its typed `_id`.
///
/// A later record with an already-seen identifier replaces the earlier one,
/// and the earlier record's organization link is dropped with it.
fn index_collection<K: RecordId>(records: Vec<Record>) -> Result<IndexedCollection<K>, IndexError> {
    let mut by_id: AHashMap<K, Record> = AHashMap::with_capacity(records.len());
    let mut by_organization: AHashMap<OrgId, Vec<K>> = AHashMap::new();

    for (position, record) in records.into_iter().enumerate() {
        let id = extract_id::<K>(&record, position)?;

        let organization = if K::OWNED_BY_ORGANIZATION {
            owning_organization(&record)
        } else {
            None
        };

        if let Some(previous) = by_id.insert(id.clone(), record) {
            tracing::debug!(
                kind = %K::KIND,
                id = %id,
                "duplicate identifier, keeping the later record"
            );
            if let Some(ids) = owning_organization(&previous)
                .filter(|_| K::OWNED_BY_ORGANIZATION)
                .and_then(|org| by_organization.get_mut(&org))
            {
                ids.retain(|linked| *linked != id);
            }
        }

        // absent or non-numeric organization_id just means no link
        if let Some(org) = organization {
            by_organization.entry(org).or_default().push(id);
        }
    }

    tracing::info!(
        kind = %K::KIND,
        records = by_id.len(),
        organizations = by_organization.len(),
        "indexed collection"
    );

    Ok(IndexedCollection { by_id, by_organization })
}

fn extract_id<K: RecordId>(record: &Record, position: usize) -> Result<K, IndexError> {
    // `_id: null` counts as missing
    let raw = record
        .get(ID_FIELD)
        .filter(|value| !value.is_null())
        .ok_or(IndexError::MissingId {
            kind: K::KIND,
            position,
        })?;

    K::from_field(raw).ok_or_else(|| IndexError::InvalidId {
        kind: K::KIND,
        position,
        found: raw.type_name(),
        expected: K::EXPECTED_TYPE,
    })
}

/// Sorted field names of the first record, empty for an empty collection
fn first_record_fields(records: &[Record]) -> Vec<String> {
    let mut fields: Vec<String> = records
        .first()
        .map(|record| record.field_names().map(str::to_string).collect())
        .unwrap_or_default();
    fields.sort();
    fields
}

impl Index {
    /// Build the index from the three parsed collections.
    ///
    /// Each collection is scanned on its own rayon task; the call returns once
    /// all three are done. Fails if any record's `_id` is missing or has the
    /// wrong type for its kind.
    pub fn build(
        organizations: Vec<Organization>,
        users: Vec<User>,
        tickets: Vec<Ticket>,
    ) -> Result<Self, IndexError> {
        let searchable_fields: BTreeMap<EntityKind, Vec<String>> = BTreeMap::from([
            (EntityKind::Organizations, first_record_fields(&organizations)),
            (EntityKind::Users, first_record_fields(&users)),
            (EntityKind::Tickets, first_record_fields(&tickets)),
        ]);

        let (organizations, (users, tickets)) = rayon::join(
            || index_collection::<OrgId>(organizations),
            || {
                rayon::join(
                    || index_collection::<UserId>(users),
                    || index_collection::<TicketId>(tickets),
                )
            },
        );

        let organizations = organizations?;
        let users = users?;
        let tickets = tickets?;

        Ok(Self {
            organizations: organizations.by_id,
            users: users.by_id,
            tickets: tickets.by_id,
            org_users: users.by_organization,
            org_tickets: tickets.by_organization,
            searchable_fields,
        })
    }
}
