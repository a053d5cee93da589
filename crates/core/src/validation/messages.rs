//! Localized validation messages.
//!
//! A [`MessageCatalog`] resolves `(field, rule)` pairs to display strings.
//! Lookup order:
//!
//! 1. an exact entry registered for the field and rule kind,
//! 2. the locale's template for the rule kind, with `{field}` replaced by the
//!    field's label (or its raw name) and `{param}` by the rule argument,
//! 3. the catalog's generic fallback message.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::rules::{Rule, RuleKind};

/// Languages with a built-in message table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'ja' or 'en')")]
pub struct LocaleParseError(String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            _ => Err(LocaleParseError(s.to_string())),
        }
    }
}

/// Read-only message table for one locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    exact: HashMap<(String, RuleKind), String>,
    templates: HashMap<RuleKind, String>,
    labels: HashMap<String, String>,
    fallback: String,
}

impl MessageCatalog {
    /// An empty catalog: every lookup yields the locale's generic fallback.
    pub fn new(locale: Locale) -> Self {
        let fallback = match locale {
            Locale::Ja => "入力内容が正しくありません。",
            Locale::En => "The input is invalid.",
        };
        Self {
            locale,
            exact: HashMap::new(),
            templates: HashMap::new(),
            labels: HashMap::new(),
            fallback: fallback.to_string(),
        }
    }

    /// The built-in table for `locale`, covering every rule kind and the
    /// fields the service declares.
    pub fn builtin(locale: Locale) -> Self {
        let catalog = Self::new(locale);
        match locale {
            Locale::Ja => catalog
                .with_template(RuleKind::Required, "{field}を入力してください。")
                .with_template(RuleKind::Min, "{field}は{param}以上で入力してください。")
                .with_template(RuleKind::Max, "{field}は{param}以下で入力してください。")
                .with_template(
                    RuleKind::Email,
                    "{field}は正しいメールアドレスの形式で入力してください。",
                )
                .with_template(RuleKind::Url, "{field}は正しいURLの形式で入力してください。")
                .with_label("name", "名前")
                .with_message("name", RuleKind::Required, "名前を入力してください。"),
            Locale::En => catalog
                .with_template(RuleKind::Required, "Please enter {field}.")
                .with_template(RuleKind::Min, "{field} must be at least {param}.")
                .with_template(RuleKind::Max, "{field} must be at most {param}.")
                .with_template(RuleKind::Email, "{field} must be a valid email address.")
                .with_template(RuleKind::Url, "{field} must be a valid URL.")
                .with_label("name", "name")
                .with_message("name", RuleKind::Required, "Please enter a name."),
        }
    }

    /// Register an exact message for a field and rule kind.
    pub fn with_message(
        mut self,
        field: impl Into<String>,
        kind: RuleKind,
        message: impl Into<String>,
    ) -> Self {
        self.exact.insert((field.into(), kind), message.into());
        self
    }

    /// Register the template used for `kind` when no exact entry exists.
    pub fn with_template(mut self, kind: RuleKind, template: impl Into<String>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    /// Register the display label substituted for `{field}` in templates.
    pub fn with_label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve the message shown when `rule` fails on `field`.
    pub fn message_for(&self, field: &str, rule: &Rule) -> String {
        let kind = rule.kind();
        if let Some(message) = self.exact.get(&(field.to_string(), kind)) {
            return message.clone();
        }

        match self.templates.get(&kind) {
            Some(template) => {
                let label = self.labels.get(field).map(String::as_str).unwrap_or(field);
                let param = rule.param().map(|n| n.to_string()).unwrap_or_default();
                template.replace("{field}", label).replace("{param}", &param)
            }
            None => self.fallback.clone(),
        }
    }
}
