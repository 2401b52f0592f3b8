mod country;
mod draft;
mod gender;
mod record;
mod validation;

pub use country::Country;
pub use draft::{Draft, Field, FieldInput};
pub use gender::Gender;
pub use record::{Record, RecordFields, RecordId, RecordView};
pub use validation::{ErrorMap, ValidationError, required_message, validate};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared test data for model, store, and session tests.

    use quickcheck::Arbitrary;

    use super::*;

    /// The draft from the canonical "Ann" scenario.
    pub(crate) fn complete_draft() -> Draft {
        Draft {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            date: "2024-01-01".to_string(),
            phone: "555".to_string(),
            gender: Some(Gender::Female),
            terms: true,
            country: Some(Country::Usa),
        }
    }

    pub(crate) fn complete_fields() -> RecordFields {
        RecordFields {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            date: "2024-01-01".to_string(),
            phone: "555".to_string(),
            gender: Gender::Female,
            terms: true,
            country: Country::Usa,
        }
    }

    /// Fields named by `name`, otherwise identical to [`complete_fields`].
    pub(crate) fn fields_named(name: &str) -> RecordFields {
        RecordFields {
            name: name.to_string(),
            ..complete_fields()
        }
    }

    impl Arbitrary for Gender {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            *g.choose(Gender::all()).unwrap()
        }
    }

    impl Arbitrary for Country {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            *g.choose(Country::all()).unwrap()
        }
    }

    /// A complete draft with arbitrary non-empty content.
    #[derive(Debug, Clone)]
    pub(crate) struct CompleteDraft(pub(crate) Draft);

    impl Arbitrary for CompleteDraft {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let text = |g: &mut quickcheck::Gen| format!("x{}", String::arbitrary(g));
            Self(Draft {
                name: text(g),
                email: text(g),
                date: text(g),
                phone: text(g),
                gender: Some(Gender::arbitrary(g)),
                terms: true,
                country: Some(Country::arbitrary(g)),
            })
        }
    }

    /// A random subset of fields to blank out of a complete draft.
    #[derive(Debug, Clone)]
    pub(crate) struct MissingFields([bool; 7]);

    impl MissingFields {
        /// Returns the blanked fields in form order.
        pub(crate) fn fields(&self) -> Vec<Field> {
            Field::all()
                .iter()
                .zip(self.0)
                .filter_map(|(field, missing)| missing.then_some(*field))
                .collect()
        }

        /// Clears every selected field of `draft`.
        pub(crate) fn apply(&self, mut draft: Draft) -> Draft {
            for field in self.fields() {
                match field {
                    Field::Name => draft.name.clear(),
                    Field::Email => draft.email.clear(),
                    Field::Date => draft.date.clear(),
                    Field::Phone => draft.phone.clear(),
                    Field::Gender => draft.gender = None,
                    Field::Terms => draft.terms = false,
                    Field::Country => draft.country = None,
                }
            }
            draft
        }

        pub(crate) fn is_empty(&self) -> bool {
            !self.0.iter().any(|&m| m)
        }
    }

    impl Arbitrary for MissingFields {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut flags = [false; 7];
            for flag in &mut flags {
                *flag = bool::arbitrary(g);
            }
            Self(flags)
        }
    }
}
