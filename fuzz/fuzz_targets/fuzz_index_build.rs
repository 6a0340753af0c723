#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zearch::model::Record;
use zearch::Index;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    organizations: &'a str,
    users: &'a str,
    tickets: &'a str,
    term: &'a str,
    value: &'a str,
}

fn parse(json: &str) -> Vec<Record> {
    serde_json::from_str(json).unwrap_or_default()
}

fuzz_target!(|input: Input| {
    // Malformed identifiers must surface as errors, never panics
    let built = Index::build(
        parse(input.organizations),
        parse(input.users),
        parse(input.tickets),
    );
    if let Ok(index) = built {
        let _ = index.organizations(input.term, input.value);
        let _ = index.users(input.term, input.value);
        let _ = index.tickets(input.term, input.value);
    }
});
