//! A JSON Schema validator for Rust.
//!
//! - Support for popular JSON Schema drafts: Draft 4, 6, 7, 2019-09 and 2020-12
//! - Custom keywords and format validators
//! - Remote reference fetching (network/file), with a pluggable `Retrieve` trait
//! - `basic` output style as per the JSON Schema specification
//!
//! # Validation
//!
//! The `jsonschema` crate offers two main approaches to validation: one-off validation and
//! reusable validators.
//!
//! ## One-off Validation
//!
//! For simple use cases where you need to validate an instance against a schema once, use the
//! [`is_valid`] function:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let instance = json!("Hello, world!");
//!
//! assert!(jsonschema::is_valid(&schema, &instance));
//! ```
//!
//! ## Reusable Validators
//!
//! For better performance, especially when validating multiple instances against the same
//! schema, build a validator once and reuse it:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::validator_for(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello, world!")));
//! assert!(!validator.is_valid(&json!(42)));
//!
//! // Iterate over all errors
//! let instance = json!(42);
//! if let Err(errors) = validator.validate(&instance) {
//!     for error in errors {
//!         eprintln!("Error: {}", error);
//!         eprintln!("Location: {}", error.instance_path);
//!     }
//! }
//! ```
//!
//! # Configuration
//!
//! `jsonschema` provides a builder for configuration options via [`options`].
//!
//! Here is how you can explicitly set the JSON Schema draft version:
//!
//! ```rust
//! use jsonschema::Draft;
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::options()
//!     .with_draft(Draft::Draft7)
//!     .build(&schema)
//!     .expect("Invalid schema");
//! ```
//!
//! For the full list of configuration options and their usage, see [`ValidationOptions`].
//!
//! # Reference Resolving
//!
//! By default, `jsonschema` resolves `file` references from the local file system and, with the
//! `resolve-http` feature (enabled by default), HTTP(S) references via `reqwest`.
//!
//! You can disable the default behavior using crate features:
//!
//! - Disable HTTP resolving: `default-features = false, features = ["resolve-file"]`
//! - Disable file resolving: `default-features = false, features = ["resolve-http"]`
//! - Disable both: `default-features = false`
//!
//! For references that aren't resolvable through a URL scheme loader at all, implement
//! [`Retrieve`] and register it via [`ValidationOptions::with_retriever`]:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashMap;
//! use jsonschema::Retrieve;
//! use referencing::UriRef;
//! use serde_json::{json, Value};
//!
//! struct StaticRetriever {
//!     schemas: HashMap<String, Value>,
//! }
//!
//! impl Retrieve for StaticRetriever {
//!     fn retrieve(
//!         &self,
//!         uri: &UriRef<&str>,
//!     ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
//!         self.schemas
//!             .get(uri.as_str())
//!             .cloned()
//!             .ok_or_else(|| format!("schema not found: {uri}").into())
//!     }
//! }
//!
//! let mut schemas = HashMap::new();
//! schemas.insert(
//!     "https://example.com/person.json".to_string(),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "name": { "type": "string" },
//!             "age": { "type": "integer" }
//!         },
//!         "required": ["name", "age"]
//!     }),
//! );
//!
//! let retriever = StaticRetriever { schemas };
//!
//! let schema = json!({ "$ref": "https://example.com/person.json" });
//!
//! let validator = jsonschema::options()
//!     .with_retriever(retriever)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!({ "name": "Alice", "age": 30 })));
//! assert!(!validator.is_valid(&json!({ "name": "Bob" })));
//! #    Ok(())
//! # }
//! ```
//!
//! # Output Styles
//!
//! `jsonschema` supports the `basic` output style as defined in the JSON Schema core
//! specification. This style allows you to serialize validation results in a standardized
//! format using `serde`.
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use serde_json::json;
//!
//! let schema_json = json!({
//!     "title": "string value",
//!     "type": "string"
//! });
//! let instance = json!("some string");
//! let validator = jsonschema::validator_for(&schema_json)
//!     .expect("Invalid schema");
//!
//! let output = validator.apply(&instance).basic();
//! assert_eq!(
//!     serde_json::to_value(output)?,
//!     json!({
//!         "valid": true,
//!         "annotations": [
//!             {
//!                 "keywordLocation": "",
//!                 "instanceLocation": "",
//!                 "annotations": {
//!                     "title": "string value"
//!                 }
//!             }
//!         ]
//!     })
//! );
//! #    Ok(())
//! # }
//! ```
//!
//! # Custom Keywords
//!
//! `jsonschema` allows you to extend its functionality by implementing custom validation logic
//! through custom keywords. This is useful when you need to validate against domain-specific
//! rules that aren't covered by the standard JSON Schema keywords.
//!
//! To implement a custom keyword:
//! 1. Create a struct that implements the [`Keyword`] trait.
//! 2. Create a factory function or closure that produces instances of your custom keyword.
//! 3. Register the factory with [`ValidationOptions::with_keyword`].
//!
//! ```rust
//! use jsonschema::{
//!     paths::{JsonPointer, JsonPointerNode},
//!     ErrorIterator, Keyword, ValidationError,
//! };
//! use serde_json::{json, Map, Value};
//! use std::iter::once;
//!
//! struct EvenNumberValidator;
//!
//! impl Keyword for EvenNumberValidator {
//!     fn validate<'instance>(
//!         &self,
//!         instance: &'instance Value,
//!         instance_path: &JsonPointerNode,
//!     ) -> ErrorIterator<'instance> {
//!         if let Value::Number(n) = instance {
//!             if n.as_u64().map_or(false, |n| n % 2 == 0) {
//!                 Box::new(None.into_iter())
//!             } else {
//!                 let error = ValidationError::custom(
//!                     JsonPointer::default(),
//!                     instance_path.into(),
//!                     instance,
//!                     "Number must be even",
//!                 );
//!                 Box::new(once(error))
//!             }
//!         } else {
//!             let error = ValidationError::custom(
//!                 JsonPointer::default(),
//!                 instance_path.into(),
//!                 instance,
//!                 "Value must be a number",
//!             );
//!             Box::new(once(error))
//!         }
//!     }
//!
//!     fn is_valid(&self, instance: &Value) -> bool {
//!         instance.as_u64().map_or(false, |n| n % 2 == 0)
//!     }
//! }
//!
//! fn even_number_validator_factory<'a>(
//!     _parent: &'a Map<String, Value>,
//!     value: &'a Value,
//!     _path: JsonPointer,
//! ) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
//!     if value.as_bool() == Some(true) {
//!         Ok(Box::new(EvenNumberValidator))
//!     } else {
//!         Err(ValidationError::custom(
//!             JsonPointer::default(),
//!             JsonPointer::default(),
//!             value,
//!             "The 'even-number' keyword must be set to true",
//!         ))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({"even-number": true, "type": "integer"});
//! let validator = jsonschema::options()
//!     .with_keyword("even-number", even_number_validator_factory)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!(2)));
//! assert!(!validator.is_valid(&json!(3)));
//! assert!(!validator.is_valid(&json!("not a number")));
//! #    Ok(())
//! # }
//! ```
//!
//! # Custom Formats
//!
//! JSON Schema allows format validation through the `format` keyword. While `jsonschema`
//! provides built-in validators for standard formats, you can also define custom format
//! validators for domain-specific string formats.
//!
//! ```rust
//! use serde_json::json;
//!
//! fn ends_with_42(s: &str) -> bool {
//!     s.ends_with("42!")
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({
//!     "type": "string",
//!     "format": "ends-with-42"
//! });
//!
//! let validator = jsonschema::options()
//!     .with_format("ends-with-42", ends_with_42)
//!     .should_validate_formats(true)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello42!")));
//! assert!(!validator.is_valid(&json!("Hello43!")));
//! assert!(!validator.is_valid(&json!(42))); // Not a string
//! #    Ok(())
//! # }
//! ```
//!
//! ### Notes on Custom Format Validators
//!
//! - Custom format validators are only called for string instances.
//! - Whether `format` is asserted or treated as an annotation depends on the draft and on
//!   [`ValidationOptions::should_validate_formats`]; make sure validation is enabled if you
//!   rely on a custom format.
mod compiler;
mod content_encoding;
mod content_media_type;
mod ecma;
pub mod error;
mod keywords;
mod node;
mod options;
pub mod output;
pub mod paths;
pub mod primitive_type;
pub(crate) mod properties;
mod retriever;
mod validator;

pub use error::{ErrorIterator, ValidationError};
pub use keywords::custom::Keyword;
pub use options::ValidationOptions;
pub use output::BasicOutput;
pub use referencing::{Draft, Resource, Retrieve, Uri};
pub use retriever::{SchemaResolver, SchemaResolverError};
pub use validator::Validator;

use serde_json::Value;

/// Create a default [`ValidationOptions`] for configuring JSON Schema validation.
///
/// Use this to set the draft version, register custom keywords/formats, or plug in a retriever
/// before building a [`Validator`].
#[must_use]
#[inline]
pub fn options() -> ValidationOptions {
    Validator::options()
}

/// Build a validator for the input schema, automatically detecting its draft from `$schema`
/// (falling back to the latest supported draft when absent).
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let validator = jsonschema::validator_for(&schema).expect("Invalid schema");
/// assert!(validator.is_valid(&json!("foo")));
/// ```
#[inline]
pub fn validator_for(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    Validator::new(schema)
}

/// A shortcut for validating `instance` against `schema`. Draft version is detected
/// automatically.
///
/// ```rust
/// use jsonschema::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed. Use [`validator_for`] if you want to
/// handle compile errors explicitly.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let validator = validator_for(schema).expect("Invalid schema");
    validator.is_valid(instance)
}


#[cfg(test)]
mod tests {
    use super::{is_valid, Draft};
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }

    #[test_case(Draft::Draft4)]
    #[test_case(Draft::Draft6)]
    #[test_case(Draft::Draft7)]
    fn meta_schemas(draft: Draft) {
        for schema in [json!({"enum": [0, 0.0]}), json!({"enum": []})] {
            assert!(crate::options().with_draft(draft).build(&schema).is_ok())
        }
    }

    #[test]
    fn incomplete_escape_in_pattern() {
        let schema = json!({"pattern": "\\u"});
        assert!(crate::validator_for(&schema).is_err())
    }
}
