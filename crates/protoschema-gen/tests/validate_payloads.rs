//! Integration test: compile generated schemas with the `jsonschema` crate
//! and check real payloads against them. Covers both timestamp encodings,
//! repeated timestamps, bounds, and required fields.

use std::path::PathBuf;

use jsonschema::Validator;
use protoschema_core::DescriptorSet;
use protoschema_gen::Generator;
use serde_json::{json, Value};

fn validator_for(fixture: &str, message: &str) -> Validator {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture);
    let set = DescriptorSet::load(&path).expect("fixture should load");
    let descriptor = set.get(message).expect("message should exist");

    // Validate through the ordered text, the form consumers actually receive.
    let text = Generator::new()
        .generate_ordered_schema(descriptor)
        .expect("generation enabled")
        .to_json_string()
        .expect("schema renders");
    let schema: Value = serde_json::from_str(&text).expect("schema is valid JSON");
    jsonschema::validator_for(&schema).expect("schema compiles")
}

fn timestamps() -> Validator {
    validator_for("timestamps.yaml", "test.v1.TimestampTestMessage")
}

fn users() -> Validator {
    validator_for("users.yaml", "example.v1.UserRequest")
}

#[test]
fn test_rfc3339_string_timestamps_accepted() {
    let payload = json!({
        "requiredTimestamp": "2023-01-01T00:00:00Z",
        "createdAt": "2023-01-01T12:30:45.123Z",
        "name": "test"
    });
    assert!(timestamps().is_valid(&payload));
}

#[test]
fn test_object_timestamps_accepted() {
    let payload = json!({
        "requiredTimestamp": {"seconds": 1_672_531_200, "nanos": 0},
        "createdAt": {"seconds": 1_672_576_245, "nanos": 123_000_000},
        "name": "test"
    });
    assert!(timestamps().is_valid(&payload));
}

#[test]
fn test_mixed_timestamp_forms_accepted() {
    let payload = json!({
        "requiredTimestamp": "2023-01-01T00:00:00Z",
        "createdAt": {"seconds": 1_672_576_245},
        "eventTimestamps": [
            "2023-01-01T10:00:00Z",
            {"seconds": 1_672_570_800, "nanos": 500_000_000}
        ]
    });
    assert!(timestamps().is_valid(&payload));
}

#[test]
fn test_timestamp_object_constraints_enforced() {
    let validator = timestamps();

    let nanos_too_large = json!({
        "requiredTimestamp": {"seconds": 1, "nanos": 1_000_000_000}
    });
    assert!(!validator.is_valid(&nanos_too_large));

    let negative_nanos = json!({"requiredTimestamp": {"seconds": 1, "nanos": -1}});
    assert!(!validator.is_valid(&negative_nanos));

    let missing_seconds = json!({"requiredTimestamp": {"nanos": 5}});
    assert!(!validator.is_valid(&missing_seconds));

    let extra_key = json!({"requiredTimestamp": {"seconds": 1, "millis": 5}});
    assert!(!validator.is_valid(&extra_key));

    let wrong_type = json!({"requiredTimestamp": 1_672_531_200});
    assert!(!validator.is_valid(&wrong_type));
}

#[test]
fn test_required_timestamp_missing_rejected() {
    assert!(!timestamps().is_valid(&json!({"name": "test"})));
}

#[test]
fn test_user_request_accepts_valid_payload() {
    let payload = json!({
        "email": "user@example.com",
        "name": "John Doe",
        "age": 25,
        "phone": "+1234567890",
        "status": "USER_STATUS_ACTIVE",
        "tags": ["beta", "staff"],
        "address": {"streetLine": "1 Main St"}
    });
    assert!(users().is_valid(&payload));
}

#[test]
fn test_user_request_rejections() {
    let validator = users();

    let missing_name = json!({"email": "user@example.com"});
    assert!(!validator.is_valid(&missing_name));

    let too_young = json!({"email": "a@b.co", "name": "John Doe", "age": 17});
    assert!(!validator.is_valid(&too_young));

    let short_name = json!({"email": "a@b.co", "name": "Jo"});
    assert!(!validator.is_valid(&short_name));

    let bad_phone = json!({"email": "a@b.co", "name": "John Doe", "phone": "call me"});
    assert!(!validator.is_valid(&bad_phone));

    let bad_status = json!({"email": "a@b.co", "name": "John Doe", "status": "DELETED"});
    assert!(!validator.is_valid(&bad_status));

    let scalar_tags = json!({"email": "a@b.co", "name": "John Doe", "tags": "beta"});
    assert!(!validator.is_valid(&scalar_tags));
}

#[test]
fn test_hidden_field_is_unconstrained() {
    // Hidden fields are left out of the schema, not forbidden.
    let payload = json!({
        "email": "user@example.com",
        "name": "John Doe",
        "internalNotes": 42
    });
    assert!(users().is_valid(&payload));
}
