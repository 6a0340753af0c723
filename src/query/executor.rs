use crate::error::SearchError;
use crate::index::Index;
use crate::model::{
    owning_organization, OrgId, OrganizationResult, Record, RecordId, TicketResult, UserResult,
    ID_FIELD,
};
use crate::query::matcher::matches;
use ahash::AHashMap;

/// Records whose `term` field matches `value`.
///
/// `_id` goes straight to the identifier map. Any other field is a full scan
/// in map iteration order; records without the field are skipped.
fn find_records<'a, K: RecordId>(
    records: &'a AHashMap<K, Record>,
    term: &str,
    value: &str,
) -> Result<Vec<(&'a K, &'a Record)>, SearchError> {
    tracing::debug!(kind = %K::KIND, term, value, "searching");

    if term == ID_FIELD {
        let id = K::parse_query(value)?;
        return records
            .get_key_value(&id)
            .map(|entry| vec![entry])
            .ok_or(SearchError::NotFound);
    }

    let found: Vec<_> = records
        .iter()
        .filter(|(_, record)| record.get(term).is_some_and(|field| matches(field, value)))
        .collect();

    if found.is_empty() {
        return Err(SearchError::NotFound);
    }

    Ok(found)
}

impl Index {
    /// Search organizations by `term = value`.
    pub fn organizations(
        &self,
        term: &str,
        value: &str,
    ) -> Result<Vec<OrganizationResult>, SearchError> {
        let found = find_records(&self.organizations, term, value)?;

        Ok(found
            .into_iter()
            .map(|(id, organization)| OrganizationResult {
                organization: organization.clone(),
                user_names: self.user_names(*id),
                ticket_subjects: self.ticket_subjects(*id),
            })
            .collect())
    }

    /// Search users by `term = value`.
    pub fn users(&self, term: &str, value: &str) -> Result<Vec<UserResult>, SearchError> {
        let found = find_records(&self.users, term, value)?;

        Ok(found
            .into_iter()
            .map(|(_, user)| {
                let organization = owning_organization(user);
                UserResult {
                    user: user.clone(),
                    organization_name: self.organization_name(organization),
                    ticket_subjects: organization
                        .map(|org| self.ticket_subjects(org))
                        .unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Search tickets by `term = value`.
    pub fn tickets(&self, term: &str, value: &str) -> Result<Vec<TicketResult>, SearchError> {
        let found = find_records(&self.tickets, term, value)?;

        Ok(found
            .into_iter()
            .map(|(_, ticket)| TicketResult {
                ticket: ticket.clone(),
                organization_name: self.organization_name(owning_organization(ticket)),
            })
            .collect())
    }

    /// Names of the users linked to `org`, skipping links to missing users
    fn user_names(&self, org: OrgId) -> Vec<String> {
        resolve_field(&self.users, self.users_of(org), "name")
    }

    /// Subjects of the tickets linked to `org`, skipping links to missing tickets
    fn ticket_subjects(&self, org: OrgId) -> Vec<String> {
        resolve_field(&self.tickets, self.tickets_of(org), "subject")
    }

    /// Name of the organization, empty if absent or not indexed
    fn organization_name(&self, org: Option<OrgId>) -> String {
        org.and_then(|org| self.organizations.get(&org))
            .and_then(|organization| organization.str_field("name"))
            .unwrap_or_default()
            .to_string()
    }
}

fn resolve_field<K: RecordId>(
    records: &AHashMap<K, Record>,
    ids: &[K],
    field: &str,
) -> Vec<String> {
    ids.iter()
        .filter_map(|id| records.get(id))
        .filter_map(|record| record.str_field(field))
        .map(str::to_string)
        .collect()
}
