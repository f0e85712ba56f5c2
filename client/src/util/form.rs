//! Declarative form schemas and validation.
//!
//! DESIGN
//! ======
//! A schema is a static field list. Pages keep raw input strings in a
//! `FormValues` signal and run `FormSchema::validate` on submit; mutations are
//! only invoked with the `ValidForm` it returns. Numeric fields are parsed
//! here, so non-numeric input is a field error rather than a submit failure.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// Input kind; controls the rendered `<input type>` and parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    /// Non-negative whole number.
    Integer,
    /// Finite decimal number.
    Decimal,
}

impl FieldKind {
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Integer | Self::Decimal => "number",
        }
    }
}

/// One field of a form schema. `message` is shown when the field is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub message: &'static str,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind, message: &'static str) -> Self {
        Self { name, label, kind, message }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

/// Raw input strings keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_owned(), value.into());
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect())
    }
}

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: &'static str, message: impl Into<String>) {
        self.0.insert(name, message.into());
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A parsed, validated field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u32),
    Decimal(f64),
}

/// Output of a successful validation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidForm(BTreeMap<&'static str, FieldValue>);

impl ValidForm {
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<u32> {
        match self.0.get(name) {
            Some(FieldValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn decimal(&self, name: &str) -> Option<f64> {
        match self.0.get(name) {
            Some(FieldValue::Decimal(n)) => Some(*n),
            _ => None,
        }
    }
}

impl FormSchema {
    /// Every field present with an empty value; used for form resets.
    #[must_use]
    pub fn blank_values(&self) -> FormValues {
        FormValues(self.fields.iter().map(|f| (f.name.to_owned(), String::new())).collect())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check every field and parse numeric ones.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self, values: &FormValues) -> Result<ValidForm, FieldErrors> {
        let mut parsed = ValidForm::default();
        let mut errors = FieldErrors::default();
        for field in self.fields {
            match validate_field(field, values.get(field.name)) {
                Ok(value) => {
                    parsed.0.insert(field.name, value);
                }
                Err(message) => errors.insert(field.name, message),
            }
        }
        if errors.is_empty() { Ok(parsed) } else { Err(errors) }
    }
}

/// Validate a single raw input against its spec.
///
/// # Errors
///
/// Returns the message to render next to the field.
pub fn validate_field(field: &FieldSpec, raw: &str) -> Result<FieldValue, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(field.message.to_owned());
    }
    match field.kind {
        FieldKind::Text => Ok(FieldValue::Text(trimmed.to_owned())),
        // Passwords are taken verbatim.
        FieldKind::Password => Ok(FieldValue::Text(raw.to_owned())),
        FieldKind::Integer => trimmed
            .parse::<u32>()
            .map(FieldValue::Integer)
            .map_err(|_| format!("{} must be a whole number", field.label)),
        FieldKind::Decimal => match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(FieldValue::Decimal(n)),
            _ => Err(format!("{} must be a number", field.label)),
        },
    }
}
