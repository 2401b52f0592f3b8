use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::draft::{Draft, Field};

/// Errors raised while interpreting raw form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

/// Per-field validation messages, keyed by [`Field`] in form order.
///
/// Each validation pass produces a fresh map; an empty map means the draft
/// may be committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message for `field`, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns `true` if `field` failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the invalid fields in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    /// Iterates `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl FromIterator<(Field, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Returns the message reported when `field` is left empty.
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Email => "Email is required",
        Field::Date => "Date is required",
        Field::Phone => "Phone is required",
        Field::Gender => "Gender is required",
        Field::Terms => "You must accept the terms",
        Field::Country => "Country is required",
    }
}

/// Checks that every required field of `draft` is filled in.
///
/// Text fields fail only when empty; whitespace counts as input. Gender and
/// country fail when unselected, terms when unchecked.
pub fn validate(draft: &Draft) -> ErrorMap {
    Field::all()
        .iter()
        .copied()
        .filter(|&field| !is_present(draft, field))
        .map(|field| (field, required_message(field).to_string()))
        .collect()
}

fn is_present(draft: &Draft, field: Field) -> bool {
    match field {
        Field::Name => !draft.name.is_empty(),
        Field::Email => !draft.email.is_empty(),
        Field::Date => !draft.date.is_empty(),
        Field::Phone => !draft.phone.is_empty(),
        Field::Gender => draft.gender.is_some(),
        Field::Terms => draft.terms,
        Field::Country => draft.country.is_some(),
    }
}
