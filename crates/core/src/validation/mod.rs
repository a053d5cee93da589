//! Request validation engine.
//!
//! Provides typed rule sets, a localized message catalog and a pure-logic
//! evaluator that turns a raw JSON body into either success or a per-field
//! error map.

pub mod evaluator;
pub mod messages;
pub mod rules;

pub use evaluator::{MalformedPayload, ValidateError, Validator};
pub use messages::{Locale, LocaleParseError, MessageCatalog};
pub use rules::{
    ClauseError, FieldErrorMap, Rule, RuleEntry, RuleKind, RuleParseError, RuleSet,
};
