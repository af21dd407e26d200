//! Integration tests for predicates and conversions

use extkit::text::{convert, number, predicates, query};

#[test]
fn numeric_predicates() {
    assert!(predicates::is_integer(" -42 "));
    assert!(!predicates::is_integer("4.2"));
    assert!(predicates::is_decimal("-112.9"));
    assert!(predicates::is_decimal(".5"));
    assert!(!predicates::is_decimal("1e5"));
    assert!(predicates::is_numeric("1e5"));
    assert!(!predicates::is_numeric("NaN"));
}

#[test]
fn character_and_length_predicates() {
    assert!(predicates::is_alpha("hello world"));
    assert!(!predicates::is_alpha("   "));
    assert!(predicates::is_alphanumeric("route 66"));
    assert!(predicates::is_blank(" \t"));
    assert!(predicates::is_between_length("héllo", 5, 5));
    assert!(predicates::is_min_length("ab", 2));
    assert!(!predicates::is_max_length("abc", 2));
    assert!(predicates::is_in_ignore_case("GET", &["get", "post"]));
    assert!(!predicates::is_in("GET", &["get", "post"]));
}

#[test]
fn boolean_parsing() {
    assert!(convert::to_boolean(" True ").unwrap());
    assert!(!convert::to_boolean("n").unwrap());
    let err = convert::to_boolean("tR").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(format!("{err}").contains("tR"));
}

#[test]
fn split_and_parse() {
    let ports: Vec<u16> = convert::split_to("80, 443 ;8080", &[',', ';'], true).unwrap();
    assert_eq!(ports, vec![80, 443, 8080]);
    assert!(convert::split_to::<u8>("1,300", &[','], false).is_err());
}

#[test]
fn csv_field_from_optional() {
    assert_eq!(convert::quote_csv(Some(" a,b ")), "\"a,b\"");
    assert_eq!(convert::none_if_blank(Some("\t")), None);
}

#[test]
fn query_strings() {
    let map = query::query_to_map("/items?Sort=desc&Limit=10").unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["limit", "sort"]);
    assert!(query::query_to_map("/items").is_none());
}

#[test]
fn fixed_formatting() {
    assert_eq!(number::format_fixed(Some(1.005), 1), "1.0");
    assert_eq!(number::format_fixed(None, 4), "");
}
