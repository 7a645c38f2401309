use jsonschema::{Draft, Resource};
use serde_json::json;

#[test]
fn const_validation_fails_at_nested_property() {
    let schema = json!({
        "type": "object",
        "properties": {"speak": {"const": "meow"}},
        "required": ["speak"]
    });
    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    let instance = json!({"speak": "bow"});

    assert!(!validator.is_valid(&instance));
    let errors: Vec<_> = validator.validate(&instance).unwrap_err().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].instance_path.to_string(), "/speak");
}

#[test]
fn one_of_with_ref_across_resources_picks_the_matching_branch() {
    let dog = Resource::from_contents(json!({
        "type": "object",
        "properties": {"speak": {"const": "bow"}},
        "required": ["speak"]
    }))
    .expect("valid resource");
    let cat = Resource::from_contents(json!({
        "type": "object",
        "properties": {"speak": {"const": "meow"}},
        "required": ["speak"]
    }))
    .expect("valid resource");

    let schema = json!({
        "$id": "https://example.com/pet.json",
        "oneOf": [
            {"$ref": "dog.json"},
            {"$ref": "cat.json"}
        ]
    });
    let validator = jsonschema::options()
        .with_resource("https://example.com/dog.json", dog)
        .with_resource("https://example.com/cat.json", cat)
        .build(&schema)
        .expect("valid schema");

    assert!(validator.is_valid(&json!({"speak": "bow"})));
    assert!(!validator.is_valid(&json!({"speak": "woof"})));
}

fn is_palindrome(s: &str) -> bool {
    let cleaned: String = s.chars().filter(|c| c.is_alphanumeric()).collect();
    let lowered = cleaned.to_lowercase();
    lowered.chars().eq(lowered.chars().rev())
}

#[test]
fn custom_format_validator_asserts_when_enabled() {
    let schema = json!({"type": "string", "format": "palindrome"});
    let validator = jsonschema::options()
        .with_format("palindrome", |s: &str| is_palindrome(s))
        .should_validate_formats(true)
        .build(&schema)
        .expect("valid schema");

    assert!(validator.is_valid(&json!("racecar")));
    assert!(!validator.is_valid(&json!("hello world")));
}

#[test]
fn custom_format_is_annotation_only_when_assertion_disabled() {
    let schema = json!({"type": "string", "format": "palindrome"});
    let validator = jsonschema::options()
        .with_format("palindrome", |s: &str| is_palindrome(s))
        .should_validate_formats(false)
        .build(&schema)
        .expect("valid schema");

    assert!(validator.is_valid(&json!("hello world")));
}

fn check_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn decode_hex(s: &str) -> Result<Option<String>, jsonschema::ValidationError<'static>> {
    if check_hex(s) {
        Ok(Some(s.to_string()))
    } else {
        Ok(None)
    }
}

#[test]
fn custom_content_encoding_rejects_invalid_input() {
    let schema = json!({"type": "string", "contentEncoding": "hex"});
    let validator = jsonschema::options()
        .with_content_encoding("hex", check_hex, decode_hex)
        .build(&schema)
        .expect("valid schema");

    assert!(validator.is_valid(&json!("abc123")));
    assert!(!validator.is_valid(&json!("abcxyz")));
}

/// Minimal well-formedness check: every opening tag must be closed by a
/// matching tag name, in order. Enough to distinguish `<abc></abc>` from
/// the mismatched `<abc></def>` without pulling in a real XML parser.
fn is_xml(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    let mut stack: Vec<&str> = Vec::new();
    let mut rest = trimmed;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            return false;
        };
        let tag = &after[..end];
        match tag.strip_prefix('/') {
            Some(name) => {
                if stack.pop() != Some(name) {
                    return false;
                }
            }
            None => stack.push(tag),
        }
        rest = &after[end + 1..];
    }
    stack.is_empty()
}

#[test]
fn custom_content_media_type_rejects_malformed_input() {
    let schema = json!({"type": "string", "contentMediaType": "application/xml"});
    let validator = jsonschema::options()
        .with_content_media_type("application/xml", is_xml)
        .build(&schema)
        .expect("valid schema");

    assert!(validator.is_valid(&json!("<abc></abc>")));
    assert!(!validator.is_valid(&json!("<abc></def>")));
}

#[test]
fn ecma_control_escape_is_translated_for_fancy_regex() {
    let schema = json!({"type": "string", "pattern": "^\\cc$"});
    let validator = jsonschema::validator_for(&schema).expect("valid schema");

    assert!(validator.is_valid(&json!("\u{0003}")));
    assert!(!validator.is_valid(&json!("c")));
}

#[test]
fn duplicate_id_within_a_single_document_is_a_compile_error() {
    let schema = json!({
        "$id": "https://example.com/schema",
        "$defs": {
            "a": {"$id": "https://example.com/shared", "type": "string"},
            "b": {"$id": "https://example.com/shared", "type": "integer"}
        }
    });

    let result = jsonschema::validator_for(&schema);
    assert!(result.is_err(), "duplicate $id must fail to compile");
}

#[test]
fn duplicate_anchor_within_a_single_document_is_a_compile_error() {
    let schema = json!({
        "$id": "https://example.com/schema",
        "$defs": {
            "a": {"$anchor": "shared", "type": "string"},
            "b": {"$anchor": "shared", "type": "integer"}
        }
    });

    let result = jsonschema::validator_for(&schema);
    assert!(result.is_err(), "duplicate $anchor must fail to compile");
}

#[test]
fn re_registering_the_same_resource_at_its_own_id_is_not_a_duplicate() {
    // The root resource legitimately "re-registers" itself at its own $id during
    // compilation; this must not be treated as a duplicate-id collision.
    let schema = json!({
        "$id": "https://example.com/root",
        "type": "object",
        "properties": {
            "value": {"$ref": "#/$defs/inner"}
        },
        "$defs": {
            "inner": {"type": "integer"}
        }
    });

    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    assert!(validator.is_valid(&json!({"value": 1})));
    assert!(!validator.is_valid(&json!({"value": "nope"})));
}

#[test]
fn dynamic_ref_resolves_against_the_calling_scope_not_the_lexical_one() {
    // The classic "extensible list" pattern: `base` declares a placeholder
    // `$dynamicAnchor` for its item type, and whichever schema `$ref`s into
    // `base` can override that placeholder by declaring its own
    // `$dynamicAnchor` of the same name. Resolution follows the dynamic
    // scope stack built up during evaluation, not `base`'s own lexical tree.
    let base = Resource::from_contents(json!({
        "$id": "https://example.com/base",
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$ref": "list",
        "$defs": {
            "list": {
                "$id": "list",
                "items": {"$dynamicRef": "#item"},
                "$defs": {
                    "item": {"$dynamicAnchor": "item"}
                }
            }
        }
    }))
    .expect("valid resource");

    let derived = json!({
        "$id": "https://example.com/derived",
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$ref": "base",
        "$defs": {
            "item": {"$dynamicAnchor": "item", "type": "string"}
        }
    });

    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .with_resource("https://example.com/base", base)
        .build(&derived)
        .expect("valid schema");

    assert!(validator.is_valid(&json!(["foo", "bar"])));
    assert!(!validator.is_valid(&json!([1, 2])));
}

#[test]
fn unevaluated_properties_sees_annotations_from_all_of_branches() {
    let schema = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "allOf": [
            {"properties": {"a": {"type": "string"}}},
            {"properties": {"b": {"type": "string"}}}
        ],
        "unevaluatedProperties": false
    });
    let validator = jsonschema::validator_for(&schema).expect("valid schema");

    assert!(validator.is_valid(&json!({"a": "x", "b": "y"})));
    assert!(!validator.is_valid(&json!({"a": "x", "c": "z"})));
}
