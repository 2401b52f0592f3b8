use std::fmt;
use std::str::FromStr;

use super::country::Country;
use super::gender::Gender;
use super::record::{Record, RecordFields};
use super::validation::{ErrorMap, ValidationError, validate};

/// A form field, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Date,
    Phone,
    Gender,
    Terms,
    Country,
}

static ALL_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Date,
    Field::Phone,
    Field::Gender,
    Field::Terms,
    Field::Country,
];

impl Field {
    /// Returns the key used for this field in error maps and raw input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Date => "date",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Terms => "terms",
            Field::Country => "country",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Date => "Date (YYYY-MM-DD)",
            Field::Phone => "Phone",
            Field::Gender => "Gender",
            Field::Terms => "I accept the terms and conditions",
            Field::Country => "Country",
        }
    }

    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw input for one field: typed text, or the checked state of a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldInput {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

/// The in-progress, not-yet-committed record bound to the form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub date: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub terms: bool,
    pub country: Option<Country>,
}

impl Draft {
    /// Creates an empty draft with `country` pre-selected.
    pub fn with_country(country: Option<Country>) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }

    /// Merges one field into the draft, leaving every other field untouched.
    ///
    /// Terms takes the checked state; text for terms counts as checked when
    /// non-empty. Gender and country parse their text, and anything that is
    /// not one of the offered values clears the selection. A checked state
    /// sent to any other field is ignored.
    pub fn set_field(&mut self, field: Field, input: FieldInput) {
        match (field, input) {
            (Field::Terms, FieldInput::Checked(checked)) => self.terms = checked,
            (Field::Terms, FieldInput::Text(text)) => self.terms = !text.is_empty(),
            (_, FieldInput::Checked(_)) => {}
            (Field::Name, FieldInput::Text(text)) => self.name = text,
            (Field::Email, FieldInput::Text(text)) => self.email = text,
            (Field::Date, FieldInput::Text(text)) => self.date = text,
            (Field::Phone, FieldInput::Text(text)) => self.phone = text,
            (Field::Gender, FieldInput::Text(text)) => self.gender = text.parse().ok(),
            (Field::Country, FieldInput::Text(text)) => self.country = text.parse().ok(),
        }
    }

    /// Returns the display text of one field; unselected choices and an
    /// unchecked box read as empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => self.name.as_str(),
            Field::Email => self.email.as_str(),
            Field::Date => self.date.as_str(),
            Field::Phone => self.phone.as_str(),
            Field::Gender => self.gender.map_or("", |g| g.as_str()),
            Field::Terms => {
                if self.terms {
                    "yes"
                } else {
                    ""
                }
            }
            Field::Country => self.country.map_or("", |c| c.as_str()),
        }
    }

    /// Validates the draft and converts it into committable fields.
    pub fn to_fields(&self) -> Result<RecordFields, ErrorMap> {
        let errors = validate(self);
        match (self.gender, self.country) {
            (Some(gender), Some(country)) if errors.is_empty() => Ok(RecordFields {
                name: self.name.clone(),
                email: self.email.clone(),
                date: self.date.clone(),
                phone: self.phone.clone(),
                gender,
                terms: self.terms,
                country,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&RecordFields> for Draft {
    fn from(fields: &RecordFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            date: fields.date.clone(),
            phone: fields.phone.clone(),
            gender: Some(fields.gender),
            terms: fields.terms,
            country: Some(fields.country),
        }
    }
}

impl From<&Record> for Draft {
    fn from(record: &Record) -> Self {
        Self::from(&record.fields)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::fixtures::complete_draft;

    mod field {
        use super::*;

        #[test]
        fn keys_for_every_field() {
            let keys: Vec<&str> = Field::all().iter().map(|f| f.as_str()).collect();
            assert_eq!(
                keys,
                vec!["name", "email", "date", "phone", "gender", "terms", "country"]
            );
        }

        #[test]
        fn parse_round_trip() {
            for field in Field::all() {
                assert_eq!(field.as_str().parse::<Field>(), Ok(*field));
            }
        }

        #[test]
        fn parse_unknown_key() {
            assert_eq!(
                "file".parse::<Field>(),
                Err(ValidationError::UnknownField("file".to_string()))
            );
        }

        #[test]
        fn order_follows_form() {
            assert!(Field::Name < Field::Email);
            assert!(Field::Terms < Field::Country);
        }
    }

    mod set_field {
        use super::*;

        #[test]
        fn text_field_preserves_others() {
            let mut draft = complete_draft();
            draft.set_field(Field::Name, "Bee".into());
            assert_eq!(draft.name, "Bee");
            assert_eq!(
                Draft {
                    name: complete_draft().name,
                    ..draft
                },
                complete_draft()
            );
        }

        #[test]
        fn each_text_field() {
            let mut draft = Draft::default();
            draft.set_field(Field::Email, "a@x.com".into());
            draft.set_field(Field::Date, "2024-01-01".into());
            draft.set_field(Field::Phone, "555".into());
            assert_eq!(draft.email, "a@x.com");
            assert_eq!(draft.date, "2024-01-01");
            assert_eq!(draft.phone, "555");
            assert_eq!(draft.name, "");
        }

        #[test]
        fn terms_takes_checked_state() {
            let mut draft = Draft::default();
            draft.set_field(Field::Terms, true.into());
            assert!(draft.terms);
            draft.set_field(Field::Terms, false.into());
            assert!(!draft.terms);
        }

        #[test]
        fn terms_text_is_checked_when_non_empty() {
            let mut draft = Draft::default();
            draft.set_field(Field::Terms, "on".into());
            assert!(draft.terms);
            draft.set_field(Field::Terms, "".into());
            assert!(!draft.terms);
        }

        #[test]
        fn checked_on_text_field_is_ignored() {
            let mut draft = complete_draft();
            draft.set_field(Field::Name, true.into());
            assert_eq!(draft, complete_draft());
        }

        #[test]
        fn gender_parses_label() {
            let mut draft = Draft::default();
            draft.set_field(Field::Gender, "Male".into());
            assert_eq!(draft.gender, Some(Gender::Male));
        }

        #[test]
        fn unknown_choice_clears_selection() {
            let mut draft = complete_draft();
            draft.set_field(Field::Country, "".into());
            draft.set_field(Field::Gender, "Other".into());
            assert_eq!(draft.country, None);
            assert_eq!(draft.gender, None);
        }

        #[quickcheck]
        fn text_input_sets_only_that_field(text: String) -> bool {
            let mut draft = complete_draft();
            draft.set_field(Field::Phone, FieldInput::Text(text.clone()));
            draft.phone == text
                && Draft {
                    phone: complete_draft().phone,
                    ..draft
                } == complete_draft()
        }
    }

    mod value {
        use super::*;

        #[test]
        fn values_of_complete_draft() {
            let draft = complete_draft();
            assert_eq!(draft.value(Field::Name), "Ann");
            assert_eq!(draft.value(Field::Gender), "Female");
            assert_eq!(draft.value(Field::Terms), "yes");
            assert_eq!(draft.value(Field::Country), "USA");
        }

        #[test]
        fn values_of_empty_draft() {
            let draft = Draft::default();
            for field in Field::all() {
                assert_eq!(draft.value(*field), "", "{field:?} should read empty");
            }
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn with_country_preselects() {
            let draft = Draft::with_country(Some(Country::Canada));
            assert_eq!(draft.country, Some(Country::Canada));
            assert_eq!(draft.name, "");
        }

        #[test]
        fn to_fields_of_complete_draft() {
            let fields = complete_draft().to_fields().unwrap();
            assert_eq!(fields.name, "Ann");
            assert_eq!(fields.gender, Gender::Female);
            assert_eq!(fields.country, Country::Usa);
            assert!(fields.terms);
        }

        #[test]
        fn to_fields_of_incomplete_draft() {
            let draft = Draft {
                country: None,
                ..complete_draft()
            };
            let errors = draft.to_fields().unwrap_err();
            assert_eq!(errors.fields(), vec![Field::Country]);
        }

        #[test]
        fn fields_back_to_draft_is_verbatim() {
            let fields = complete_draft().to_fields().unwrap();
            assert_eq!(Draft::from(&fields), complete_draft());
        }
    }
}
