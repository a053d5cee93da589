//! Rule evaluator — pure logic, no I/O.

use std::sync::Arc;

use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateUrl};

use super::messages::MessageCatalog;
use super::rules::{FieldErrorMap, Rule, RuleSet};

/// The raw body could not be read as a JSON object.
#[derive(Debug, thiserror::Error)]
pub enum MalformedPayload {
    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Outcome of a failed [`Validator::validate`] call.
///
/// `Malformed` means the shape itself was unreadable; `Invalid` means the
/// object was well-formed but broke at least one declared rule.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error(transparent)]
    Malformed(#[from] MalformedPayload),

    #[error("validation failed: {0}")]
    Invalid(FieldErrorMap),
}

/// Evaluates raw JSON bodies against rule sets, producing localized
/// per-field messages.
///
/// Holds no per-request state; one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Arc<MessageCatalog>,
}

impl Validator {
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Decode `raw_body` and check it against `rules`.
    pub fn validate(&self, raw_body: &[u8], rules: &RuleSet) -> Result<(), ValidateError> {
        let data = decode_object(raw_body)?;
        self.check(&data, rules).map_err(ValidateError::Invalid)
    }

    /// Check an already-decoded object against `rules`.
    ///
    /// Entries are visited in declaration order; only the first failing rule
    /// of each field produces a message.
    pub fn check(
        &self,
        data: &Map<String, Value>,
        rules: &RuleSet,
    ) -> Result<(), FieldErrorMap> {
        let mut errors = FieldErrorMap::new();

        for entry in rules.entries() {
            let value = data.get(&entry.field_name);
            if let Some(rule) = entry.rules.iter().find(|rule| violates(rule, value)) {
                let message = self.catalog.message_for(&entry.field_name, rule);
                errors.record(&entry.field_name, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn decode_object(raw_body: &[u8]) -> Result<Map<String, Value>, MalformedPayload> {
    match serde_json::from_slice::<Value>(raw_body)? {
        Value::Object(map) => Ok(map),
        other => Err(MalformedPayload::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn violates(rule: &Rule, value: Option<&Value>) -> bool {
    match rule {
        Rule::Required => is_zero_value(value),
        Rule::Min(min) => present(value).is_some_and(|v| !within(v, |n| n >= *min as f64)),
        Rule::Max(max) => present(value).is_some_and(|v| !within(v, |n| n <= *max as f64)),
        Rule::Email => present(value).is_some_and(|v| match v {
            Value::String(s) => !s.validate_email(),
            _ => true,
        }),
        Rule::Url => present(value).is_some_and(|v| match v {
            Value::String(s) => !s.validate_url(),
            _ => true,
        }),
    }
}

/// Non-`required` rules leave presence to `required` and skip absent values.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn is_zero_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}

/// Measure a value for `min`/`max`: character count for strings, the value
/// itself for numbers, item count for arrays. Other types fail closed.
fn within(value: &Value, bound: impl Fn(f64) -> bool) -> bool {
    let measured = match value {
        Value::String(s) => s.chars().count() as f64,
        Value::Number(n) => match n.as_f64() {
            Some(n) => n,
            None => return false,
        },
        Value::Array(items) => items.len() as f64,
        _ => return false,
    };
    bound(measured)
}
