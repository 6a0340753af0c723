#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zearch::model::FieldValue;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    json: &'a str,
    query: &'a str,
}

fuzz_target!(|input: Input| {
    // Any JSON value a record can hold must be matchable without panicking
    if let Ok(value) = serde_json::from_str::<FieldValue>(input.json) {
        let _ = zearch::query::matches(&value, input.query);
    }
});
