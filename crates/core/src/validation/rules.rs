//! Validation rule and result types.
//!
//! Rule expressions use a comma-separated clause grammar (`"required"`,
//! `"required,max=50"`). Expressions are parsed once into [`Rule`] variants
//! when a [`RuleSet`] is built, so evaluation never sees an unknown clause.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A single parsed rule clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Value must be present and not the zero value of its type.
    Required,
    /// Strings: at least N characters. Numbers: at least N. Arrays: at least N items.
    Min(u64),
    /// Strings: at most N characters. Numbers: at most N. Arrays: at most N items.
    Max(u64),
    /// String must be an e-mail address.
    Email,
    /// String must be an absolute URL.
    Url,
}

/// Rule discriminant without parameters, used as a message catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    Required,
    Min,
    Max,
    Email,
    Url,
}

impl RuleKind {
    /// Clause name as written in rule expressions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::Min(_) => RuleKind::Min,
            Self::Max(_) => RuleKind::Max,
            Self::Email => RuleKind::Email,
            Self::Url => RuleKind::Url,
        }
    }

    /// Numeric argument of the clause, if it takes one.
    pub fn param(&self) -> Option<u64> {
        match self {
            Self::Min(n) | Self::Max(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(n) => write!(f, "{}={n}", self.kind()),
            None => f.write_str(self.kind().as_str()),
        }
    }
}

/// Why a single clause could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClauseError {
    #[error("empty clause")]
    Empty,

    #[error("unknown clause '{0}'")]
    UnknownClause(String),

    #[error("clause '{0}' requires an argument")]
    MissingArgument(&'static str),

    #[error("clause '{clause}' has an invalid argument '{value}'")]
    InvalidArgument { clause: &'static str, value: String },

    #[error("clause '{0}' does not take an argument")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Rule {
    type Err = ClauseError;

    fn from_str(clause: &str) -> Result<Self, Self::Err> {
        let clause = clause.trim();
        if clause.is_empty() {
            return Err(ClauseError::Empty);
        }

        let (name, arg) = match clause.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (clause, None),
        };

        match name {
            "required" => no_argument(RuleKind::Required, arg).map(|()| Self::Required),
            "email" => no_argument(RuleKind::Email, arg).map(|()| Self::Email),
            "url" => no_argument(RuleKind::Url, arg).map(|()| Self::Url),
            "min" => numeric_argument(RuleKind::Min, arg).map(Self::Min),
            "max" => numeric_argument(RuleKind::Max, arg).map(Self::Max),
            other => Err(ClauseError::UnknownClause(other.to_string())),
        }
    }
}

fn no_argument(kind: RuleKind, arg: Option<&str>) -> Result<(), ClauseError> {
    match arg {
        None => Ok(()),
        Some(_) => Err(ClauseError::UnexpectedArgument(kind.as_str())),
    }
}

fn numeric_argument(kind: RuleKind, arg: Option<&str>) -> Result<u64, ClauseError> {
    match arg {
        None | Some("") => Err(ClauseError::MissingArgument(kind.as_str())),
        Some(value) => value.parse().map_err(|_| ClauseError::InvalidArgument {
            clause: kind.as_str(),
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Rule sets
// ---------------------------------------------------------------------------

/// Failure to build a [`RuleSet`] from string expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    #[error("field '{field}' has an empty rule expression")]
    EmptyExpression { field: String },

    #[error("field '{field}': {source}")]
    Clause {
        field: String,
        #[source]
        source: ClauseError,
    },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

/// Rules attached to one field, evaluated in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub field_name: String,
    pub rules: Vec<Rule>,
}

impl RuleEntry {
    /// The entry's rules rendered back into expression form.
    pub fn expression(&self) -> String {
        self.rules
            .iter()
            .map(Rule::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Ordered per-field rules for one request shape.
///
/// Field names are unique. Built once per endpoint and never mutated after
/// the endpoint starts serving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare rules for `field_name`. Re-declaring a field replaces its
    /// rules but keeps its original position.
    pub fn field(
        mut self,
        field_name: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        let field_name = field_name.into();
        let rules: Vec<Rule> = rules.into_iter().collect();
        match self.entries.iter_mut().find(|e| e.field_name == field_name) {
            Some(existing) => existing.rules = rules,
            None => self.entries.push(RuleEntry { field_name, rules }),
        }
        self
    }

    /// Build a rule set from `(field, expression)` pairs such as
    /// `("name", "required,max=50")`.
    pub fn parse(pairs: &[(&str, &str)]) -> Result<Self, RuleParseError> {
        let mut entries: Vec<RuleEntry> = Vec::with_capacity(pairs.len());
        for (field, expression) in pairs {
            if entries.iter().any(|e| e.field_name == *field) {
                return Err(RuleParseError::DuplicateField(field.to_string()));
            }
            entries.push(RuleEntry {
                field_name: field.to_string(),
                rules: parse_expression(field, expression)?,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_expression(field: &str, expression: &str) -> Result<Vec<Rule>, RuleParseError> {
    if expression.trim().is_empty() {
        return Err(RuleParseError::EmptyExpression {
            field: field.to_string(),
        });
    }
    expression
        .split(',')
        .map(|clause| {
            clause.parse().map_err(|source| RuleParseError::Clause {
                field: field.to_string(),
                source,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Field name to localized error message, one message per field.
///
/// Serializes as a plain JSON object with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrorMap(BTreeMap<String, String>);

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    /// Returns whether the message was recorded.
    pub fn record(&mut self, field: &str, message: String) -> bool {
        if self.0.contains_key(field) {
            return false;
        }
        self.0.insert(field.to_string(), message);
        true
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}
