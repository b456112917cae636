//! Record Codec Tests
//!
//! Tests verify:
//! - Plain records read and write verbatim
//! - Whitespace inside fields is escaped
//! - Malformed lines report their line number

use stocklist::catalog::Item;
use stocklist::storage::{decode_field, encode_field, format_record, parse_record};
use stocklist::StockError;

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_format_plain_record() {
    let item = Item::new("Coke", "Beverage", 3.0, 20);

    assert_eq!(format_record(&item), "Coke Beverage 3 20");
}

#[test]
fn test_format_keeps_price_precision() {
    let item = Item::new("Boba", "Tea", 4.125, 7);

    assert_eq!(format_record(&item), "Boba Tea 4.125 7");
}

#[test]
fn test_format_escapes_spaces() {
    let item = Item::new("Milk Tea", "Tea", 5.5, 10);

    assert_eq!(format_record(&item), "Milk%20Tea Tea 5.5 10");
}

#[test]
fn test_price_round_trips_exactly() {
    let price = 0.1 + 0.2;
    let item = Item::new("Odd", "Juice", price, 1);

    let parsed = parse_record(&format_record(&item), 1).unwrap().unwrap();

    assert_eq!(parsed.price, price);
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_plain_record() {
    let item = parse_record("Coke Beverage 3 20", 1).unwrap();

    assert_eq!(item, Some(Item::new("Coke", "Beverage", 3.0, 20)));
}

#[test]
fn test_parse_extra_whitespace() {
    let item = parse_record("  Sprite\tBeverage   2.50  8 ", 1).unwrap();

    assert_eq!(item, Some(Item::new("Sprite", "Beverage", 2.5, 8)));
}

#[test]
fn test_parse_blank_line() {
    assert_eq!(parse_record("", 1).unwrap(), None);
    assert_eq!(parse_record("   \t", 2).unwrap(), None);
}

#[test]
fn test_parse_escaped_name() {
    let item = parse_record("Orange%20Juice Juice 4 15", 1).unwrap().unwrap();

    assert_eq!(item.name, "Orange Juice");
}

#[test]
fn test_parse_wrong_field_count() {
    let result = parse_record("Milk Tea Tea 5.5 10", 7);

    assert!(matches!(result, Err(StockError::Record { line: 7, .. })));
}

#[test]
fn test_parse_non_numeric_price() {
    let result = parse_record("Coke Beverage cheap 20", 3);

    assert!(matches!(result, Err(StockError::Record { line: 3, .. })));
}

#[test]
fn test_parse_negative_values() {
    assert!(parse_record("Coke Beverage -3 20", 1).is_err());
    assert!(parse_record("Coke Beverage 3 -20", 1).is_err());
}

#[test]
fn test_parse_non_finite_price() {
    assert!(parse_record("Coke Beverage NaN 20", 1).is_err());
    assert!(parse_record("Coke Beverage inf 20", 1).is_err());
}

#[test]
fn test_parse_fractional_stock() {
    assert!(parse_record("Coke Beverage 3 2.5", 1).is_err());
}

// =============================================================================
// Field Escaping Tests
// =============================================================================

#[test]
fn test_plain_field_is_borrowed() {
    assert!(matches!(encode_field("Coke"), std::borrow::Cow::Borrowed("Coke")));
}

#[test]
fn test_escape_percent_and_tab() {
    assert_eq!(encode_field("50% Sugar"), "50%25%20Sugar");
    assert_eq!(encode_field("a\tb"), "a%09b");
}

#[test]
fn test_escape_round_trip() {
    for field in ["Milk Tea", "100%", " lead", "tab\there", "wide\u{3000}space", "plain"] {
        assert_eq!(decode_field(&encode_field(field)).unwrap(), field);
    }
}

#[test]
fn test_decode_bad_escapes() {
    assert!(decode_field("bad%2").is_err());
    assert!(decode_field("bad%zz").is_err());
    assert!(decode_field("bad%+1").is_err());
    assert!(decode_field("bad%FF").is_err());
}
