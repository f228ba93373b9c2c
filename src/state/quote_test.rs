use super::*;

#[test]
fn from_pairs_trims_values() {
    let quote = QuoteRequest::from_pairs([("name", "  Asha "), ("phone", "98450 12345")]);
    assert_eq!(quote.fields["name"], "Asha");
    assert_eq!(quote.fields["phone"], "98450 12345");
}

#[test]
fn filled_count_skips_blank_fields() {
    let quote = QuoteRequest::from_pairs([("name", "Asha"), ("message", "   "), ("from", "Pune")]);
    assert_eq!(quote.filled_count(), 2);
}

#[test]
fn repeated_names_keep_last_value() {
    let quote = QuoteRequest::from_pairs([("service", "home"), ("service", "office")]);
    assert_eq!(quote.fields.len(), 1);
    assert_eq!(quote.fields["service"], "office");
}

#[test]
fn field_names_are_sorted() {
    let quote = QuoteRequest::from_pairs([("to", "Goa"), ("from", "Pune"), ("date", "")]);
    assert_eq!(quote.field_names(), vec!["date", "from", "to"]);
}

#[test]
fn serializes_as_field_map() {
    let quote = QuoteRequest::from_pairs([("name", "Asha")]);
    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json, serde_json::json!({ "fields": { "name": "Asha" } }));
}
