use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_optional_adds_null_tag() {
    let p = Property::string().optional();
    assert_eq!(p.types, vec![PropertyType::String, PropertyType::Null]);
}

#[test]
fn test_optional_is_idempotent() {
    let once = Property::string().optional();
    let twice = Property::string().optional().optional();
    assert_eq!(once.types, twice.types);
}

#[test]
fn test_date_time_keeps_string_tag() {
    let p = Property::date_time();
    assert!(p.types.contains(&PropertyType::String));
    assert!(p.is_date_time());

    // Invariant holds through optional()
    let p = Property::date_time().optional();
    assert!(p.types.contains(&PropertyType::String));
    assert!(p.is_date_time());
}

#[test]
fn test_type_predicates() {
    assert!(Property::boolean().is_boolean());
    assert!(Property::number().is_number());
    assert!(Property::integer().is_integer());
    assert!(!Property::string().is_boolean());
    assert!(!Property::string().is_date_time());

    // Predicates see through nullable unions
    assert!(Property::integer().optional().is_integer());
}

#[test]
fn test_array_of_object() {
    let item = Property::object([("id", Property::string()), ("name", Property::string())]);
    let p = Property::array_of(item);

    assert_eq!(p.types, vec![PropertyType::Array]);
    let items = p.items.expect("array property should carry items");
    assert_eq!(items.item_type, PropertyType::Object);
    assert!(items.properties.contains_key("id"));
    assert!(items.properties.contains_key("name"));
}

#[test]
fn test_array_of_scalar() {
    let p = Property::array_of(Property::string());
    let items = p.items.expect("array property should carry items");
    assert_eq!(items.item_type, PropertyType::String);
    assert!(items.properties.is_empty());
}

#[test]
fn test_schema_wire_format() {
    let schema = Schema::object(Property::object([
        ("id", Property::string()),
        ("created_at", Property::date_time()),
        ("archived", Property::boolean().optional()),
    ]));

    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value,
        json!({
            "type": ["object"],
            "additionalProperties": false,
            "properties": {
                "archived": {"type": ["boolean", "null"]},
                "created_at": {"type": ["string"], "format": "date-time"},
                "id": {"type": ["string"]},
            }
        })
    );
}

#[test]
fn test_schema_round_trip() {
    let schema = Schema::object(Property::object([
        ("id", Property::string()),
        (
            "entries",
            Property::array_of(Property::object([("value", Property::number().optional())])),
        ),
    ]));

    let text = serde_json::to_string(&schema).unwrap();
    let parsed: Schema = serde_json::from_str(&text).unwrap();
    assert_eq!(schema, parsed);
}
