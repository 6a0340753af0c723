//! Query tests against the JSON fixtures in `tests/fixtures`.

use std::collections::HashSet;
use std::path::PathBuf;
use zearch::loader::{read_records, DataSet};
use zearch::model::{
    owning_organization, EntityKind, FieldValue, OrgId, Record, TicketId, UserId, ID_FIELD,
};
use termcolor::NoColor;
use zearch::app::App;
use zearch::{Index, SearchError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_data() -> DataSet {
    DataSet::load(
        &fixture("organizations.json"),
        &fixture("users.json"),
        &fixture("tickets.json"),
    )
    .expect("Failed to load fixtures")
}

fn load_index() -> Index {
    load_data().into_index().expect("Failed to build index")
}

fn numeric_id(record: &Record) -> i64 {
    record.get(ID_FIELD).and_then(FieldValue::as_f64).expect("numeric _id") as i64
}

fn sorted_ids<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<i64> {
    let mut ids: Vec<i64> = records.map(numeric_id).collect();
    ids.sort();
    ids
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

#[test]
fn test_every_record_is_indexed_by_id() {
    let data = load_data();
    let index = load_index();

    for org in &data.organizations {
        assert_eq!(index.organization(OrgId(numeric_id(org))), Some(org));
    }
    for user in &data.users {
        assert_eq!(index.user(UserId(numeric_id(user))), Some(user));
    }
    for ticket in &data.tickets {
        let id = TicketId(ticket.str_field(ID_FIELD).unwrap().to_string());
        assert_eq!(index.ticket(&id), Some(ticket));
    }
}

#[test]
fn test_organization_by_id_joins_exactly_its_users_and_tickets() {
    let data = load_data();
    let index = load_index();

    for org in &data.organizations {
        let id = OrgId(numeric_id(org));
        let results = index.organizations("_id", &id.to_string()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(numeric_id(&results[0].organization), id.0);

        let expected_users: Vec<String> = data
            .users
            .iter()
            .filter(|u| owning_organization(u) == Some(id))
            .map(|u| u.str_field("name").unwrap().to_string())
            .collect();
        let expected_tickets: Vec<String> = data
            .tickets
            .iter()
            .filter(|t| owning_organization(t) == Some(id))
            .map(|t| t.str_field("subject").unwrap().to_string())
            .collect();

        assert_eq!(sorted(results[0].user_names.clone()), sorted(expected_users));
        assert_eq!(sorted(results[0].ticket_subjects.clone()), sorted(expected_tickets));
    }
}

#[test]
fn test_organization_101() {
    let results = load_index().organizations("_id", "101").unwrap();
    assert_eq!(results[0].organization.str_field("name"), Some("Enthaze"));
    assert_eq!(results[0].user_names, vec!["Francis Bailey"]);
    assert_eq!(results[0].ticket_subjects, vec!["A Problem in Guyana"]);
}

#[test]
fn test_nonexistent_id_is_not_found() {
    let index = load_index();
    assert!(matches!(index.organizations("_id", "0"), Err(SearchError::NotFound)));
    assert!(matches!(index.users("_id", "0"), Err(SearchError::NotFound)));
    assert!(matches!(index.tickets("_id", "0"), Err(SearchError::NotFound)));
}

#[test]
fn test_unknown_field_is_not_found() {
    let index = load_index();
    assert!(index.organizations("unknown", "x").unwrap_err().is_not_found());
    assert!(index.users("unknown", "x").unwrap_err().is_not_found());
    assert!(index.tickets("unknown", "x").unwrap_err().is_not_found());
}

#[test]
fn test_malformed_numeric_id() {
    let err = load_index().organizations("_id", "10a").unwrap_err();
    assert!(matches!(err, SearchError::InvalidId { ref value, .. } if value == "10a"));
}

#[test]
fn test_boolean_field() {
    let results = load_index().organizations("shared_tickets", "true").unwrap();
    assert_eq!(sorted_ids(results.iter().map(|r| &r.organization)), vec![102]);

    let results = load_index().organizations("shared_tickets", "false").unwrap();
    assert_eq!(sorted_ids(results.iter().map(|r| &r.organization)), vec![101, 103, 124, 125]);
}

#[test]
fn test_list_field_matches_substring_of_any_tag() {
    // "Farley" is a whole tag of 101 but only part of "Farleyville" on 102
    let results = load_index().organizations("tags", "Farley").unwrap();
    assert_eq!(sorted_ids(results.iter().map(|r| &r.organization)), vec![101, 102]);
}

#[test]
fn test_number_field_matches_integer_text() {
    let results = load_index().tickets("submitter_id", "5").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].ticket.str_field("subject"), Some("A Nuisance in Kiribati"));
    assert_eq!(results[0].organization_name, "Nutralab");
}

#[test]
fn test_string_field_is_exact() {
    let index = load_index();
    assert!(index.organizations("name", "enthaze").unwrap_err().is_not_found());
    assert!(index.organizations("name", "Enth").unwrap_err().is_not_found());
    assert_eq!(index.organizations("name", "Strezzö").unwrap().len(), 1);
}

#[test]
fn test_user_joins_organization() {
    let results = load_index().users("_id", "1").unwrap();
    assert_eq!(results[0].organization_name, "Enthaze");
    assert_eq!(results[0].ticket_subjects, vec!["A Problem in Guyana"]);
}

#[test]
fn test_user_with_unknown_organization() {
    let results = load_index().users("verified", "true").unwrap();
    assert_eq!(sorted_ids(results.iter().map(|r| &r.user)), vec![2]);
    assert_eq!(results[0].organization_name, "");
    assert!(results[0].ticket_subjects.is_empty());
}

#[test]
fn test_user_without_organization() {
    let results = load_index().users("name", "Rose Newton").unwrap();
    assert_eq!(results[0].organization_name, "");
}

#[test]
fn test_user_tags() {
    let results = load_index().users("tags", "Leola").unwrap();
    assert_eq!(sorted_ids(results.iter().map(|r| &r.user)), vec![2, 3]);
}

#[test]
fn test_tickets_by_priority() {
    let results = load_index().tickets("priority", "high").unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.organization_name == "Nutralab"));
}

#[test]
fn test_ticket_by_id() {
    let index = load_index();

    let results = index.tickets("_id", "1a227508-9f39-427c-8f57-1b72f3fab87c").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].organization_name, "Enthaze");

    let results = index.tickets("_id", "87db32c5-76a3-4069-954c-7d59c6c21de0").unwrap();
    assert_eq!(results[0].organization_name, "");

    let results = index.tickets("_id", "6aac0369-a7e5-4417-8b50-92528ef485d3").unwrap();
    assert_eq!(results[0].organization_name, "");
}

#[test]
fn test_searchable_fields() {
    let index = load_index();
    let fields = index.searchable_fields();

    let orgs: HashSet<&str> = fields[&EntityKind::Organizations]
        .iter()
        .map(String::as_str)
        .collect();
    let expected: HashSet<&str> = [
        "_id",
        "url",
        "external_id",
        "name",
        "domain_names",
        "created_at",
        "details",
        "shared_tickets",
        "tags",
    ]
    .into_iter()
    .collect();
    assert_eq!(orgs, expected);

    let users = &fields[&EntityKind::Users];
    let mut sorted_users = users.clone();
    sorted_users.sort();
    assert_eq!(users, &sorted_users);
    assert!(users.contains(&"alias".to_string()));
}

#[test]
fn test_read_records_matches_fixture_size() {
    let records = read_records(&fixture("tickets.json")).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(load_index().len(EntityKind::Tickets), 5);
}

fn search_output(entity: &str, term: &str, value: &str) -> String {
    let mut app = App::new(load_index(), NoColor::new(Vec::new()));
    app.search(entity, term, value).unwrap();
    String::from_utf8(app.into_writer().into_inner()).unwrap()
}

#[test]
fn test_multi_term_skips_alternatives_without_matches() {
    let out = search_output("organizations", "name or name", "Bitrex or Nobody");
    assert!(out.contains("Bitrex"));
    assert!(out.contains("Total organizations found: 1"));

    let out = search_output("organizations", "name or name", "Nobody or Somebody");
    assert!(out.contains("No results found"));
    assert!(!out.contains("Total organizations found"));
}

#[test]
fn test_multi_term_mixed_fields() {
    let out = search_output("users", "_id or name", "1 or Nobody");
    assert!(out.contains("Francis Bailey"));
    assert!(out.contains("Total users found: 1"));
}
