use crate::index::store::Index;
use crate::model::{EntityKind, OrgId};
use ahash::AHashMap;
use serde::Serialize;
use std::io::{self, Write};

/// Summary of what a built index holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub organizations: usize,
    pub users: usize,
    pub tickets: usize,
    /// Organizations with at least one linked user
    pub organizations_with_users: usize,
    /// Organizations with at least one linked ticket
    pub organizations_with_tickets: usize,
    /// Adjacency entries pointing at an organization that is not indexed
    pub orphaned_links: usize,
}

impl IndexStats {
    pub fn collect(index: &Index) -> Self {
        let orphaned_links = index
            .org_users
            .iter()
            .filter(|(org, _)| !index.organizations.contains_key(*org))
            .map(|(_, users)| users.len())
            .chain(
                index
                    .org_tickets
                    .iter()
                    .filter(|(org, _)| !index.organizations.contains_key(*org))
                    .map(|(_, tickets)| tickets.len()),
            )
            .sum();

        Self {
            organizations: index.len(EntityKind::Organizations),
            users: index.len(EntityKind::Users),
            tickets: index.len(EntityKind::Tickets),
            organizations_with_users: count_linked(index, &index.org_users),
            organizations_with_tickets: count_linked(index, &index.org_tickets),
            orphaned_links,
        }
    }
}

/// Indexed organizations with at least one linked member
fn count_linked<K>(index: &Index, links: &AHashMap<OrgId, Vec<K>>) -> usize {
    links
        .iter()
        .filter(|(org, members)| !members.is_empty() && index.organizations.contains_key(*org))
        .count()
}

/// Display index statistics
pub fn show_stats(index: &Index, out: &mut impl Write) -> io::Result<()> {
    let stats = IndexStats::collect(index);

    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Organizations:              {}", stats.organizations)?;
    writeln!(out, "Users:                      {}", stats.users)?;
    writeln!(out, "Tickets:                    {}", stats.tickets)?;
    writeln!(out)?;
    writeln!(out, "Organizations with users:   {}", stats.organizations_with_users)?;
    writeln!(out, "Organizations with tickets: {}", stats.organizations_with_tickets)?;
    writeln!(out, "Orphaned links:             {}", stats.orphaned_links)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldValue, Record};

    #[test]
    fn test_collect() {
        let orgs = vec![Record::from_iter([("_id", FieldValue::from(101))])];
        let users = vec![
            Record::from_iter([
                ("_id", FieldValue::from(1)),
                ("organization_id", FieldValue::from(101)),
            ]),
            Record::from_iter([
                ("_id", FieldValue::from(2)),
                ("organization_id", FieldValue::from(999)),
            ]),
        ];
        let tickets = vec![Record::from_iter([("_id", FieldValue::from("t1"))])];
        let index = Index::build(orgs, users, tickets).unwrap();

        let stats = IndexStats::collect(&index);
        assert_eq!(stats.organizations, 1);
        assert_eq!(stats.users, 2);
        assert_eq!(stats.tickets, 1);
        assert_eq!(stats.organizations_with_users, 1);
        assert_eq!(stats.organizations_with_tickets, 0);
        assert_eq!(stats.orphaned_links, 1);

        let mut out = Vec::new();
        show_stats(&index, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Orphaned links:             1"));
    }

    #[test]
    fn test_links_to_unknown_organizations_are_not_counted() {
        let orgs = vec![Record::from_iter([("_id", FieldValue::from(101))])];
        let users = vec![Record::from_iter([
            ("_id", FieldValue::from(1)),
            ("organization_id", FieldValue::from(999)),
        ])];
        let tickets = vec![Record::from_iter([
            ("_id", FieldValue::from("t1")),
            ("organization_id", FieldValue::from(998)),
        ])];
        let index = Index::build(orgs, users, tickets).unwrap();

        let stats = IndexStats::collect(&index);
        assert_eq!(stats.organizations_with_users, 0);
        assert_eq!(stats.organizations_with_tickets, 0);
        assert_eq!(stats.orphaned_links, 2);
    }
}
