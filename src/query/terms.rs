//! Splitting of multi-term queries.
//!
//! `"name or _id"` with `"Bitrex or 101"` becomes two single-term queries whose
//! results are concatenated. There is no `and`.

use crate::error::SearchError;

/// Delimiter between alternatives in both the term and the value
pub const TERM_SEPARATOR: &str = " or ";

/// Pair up the alternatives of `term` and `value` by position.
///
/// Fails when the two sides have a different number of alternatives.
pub fn split_terms<'a>(
    term: &'a str,
    value: &'a str,
) -> Result<Vec<(&'a str, &'a str)>, SearchError> {
    let terms: Vec<&str> = term.split(TERM_SEPARATOR).collect();
    let values: Vec<&str> = value.split(TERM_SEPARATOR).collect();

    if terms.len() != values.len() {
        return Err(SearchError::TermCountMismatch {
            terms: terms.len(),
            values: values.len(),
        });
    }

    Ok(terms.into_iter().zip(values).collect())
}
