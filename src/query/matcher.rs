//! Equality predicate between a stored field value and a query string.

use crate::model::FieldValue;

/// Separator placed before every element when a list is flattened for matching
pub const LIST_SEPARATOR: char = ';';

/// Check whether `field` matches the text `query`.
///
/// Strings, numbers and booleans compare by exact equality of their text
/// form. Numbers are rendered as base-10 integers. Lists are the exception:
/// the elements are flattened into one `;`-separated string and `query`
/// only has to occur somewhere in it, so `"Farley"` matches a `"Farleyville"`
/// tag and a query can span two adjacent elements.
pub fn matches(field: &FieldValue, query: &str) -> bool {
    match field {
        FieldValue::String(s) => s == query,
        // identifiers and counts never carry fractions
        FieldValue::Number(n) => (*n as i64).to_string() == query,
        FieldValue::Bool(b) => b.to_string() == query,
        FieldValue::List(items) => flatten_list(items).contains(query),
        FieldValue::Null => false,
        FieldValue::Other(_) => {
            tracing::warn!(value_type = field.type_name(), "unhandled field value type");
            false
        }
    }
}

/// Flatten list elements into `;a;b;c`.
fn flatten_list(items: &[FieldValue]) -> String {
    items
        .iter()
        .map(|item| format!("{LIST_SEPARATOR}{item}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_exact() {
        let v = FieldValue::from("Enthaze");
        assert!(matches(&v, "Enthaze"));
        assert!(!matches(&v, "enthaze"));
        assert!(!matches(&v, "Enth"));
    }

    #[test]
    fn test_number_as_integer() {
        let v = FieldValue::from(101);
        assert!(matches(&v, "101"));
        assert!(!matches(&v, "101.0"));
        assert!(!matches(&v, "10"));
    }

    #[test]
    fn test_bool() {
        assert!(matches(&FieldValue::from(true), "true"));
        assert!(!matches(&FieldValue::from(true), "True"));
        assert!(matches(&FieldValue::from(false), "false"));
    }

    #[test]
    fn test_list_is_substring_not_element_equality() {
        let tags = FieldValue::from(vec!["Fulton", "West", "Farleyville"]);
        assert!(matches(&tags, "West"));
        // only part of a longer tag
        assert!(matches(&tags, "Farley"));
        // spans two elements through the separator
        assert!(matches(&tags, "Fulton;West"));
        assert!(!matches(&tags, "East"));
    }

    #[test]
    fn test_list_of_numbers() {
        let v = FieldValue::from(vec![FieldValue::from(1), FieldValue::from(22)]);
        assert!(matches(&v, "22"));
        assert!(!matches(&v, "1.0"));
    }

    #[test]
    fn test_null_and_unknown_never_match() {
        assert!(!matches(&FieldValue::Null, ""));
        let object = FieldValue::Other(serde_json::json!({"channel": "web"}));
        assert!(!matches(&object, "web"));
    }
}
