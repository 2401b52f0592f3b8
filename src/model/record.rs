use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::country::Country;
use super::gender::Gender;

/// Stable identifier assigned to a record when it is first committed.
///
/// Ids are never reused within a session, so edit and delete targets stay
/// valid while other records are removed around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The user-entered content of a committed record.
///
/// Only a validated draft produces one of these, so every text field is
/// non-empty and both choices are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub email: String,
    pub date: String,
    pub phone: String,
    pub gender: Gender,
    pub terms: bool,
    pub country: Country,
}

/// A committed entry in the managed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub fields: RecordFields,
}

impl Record {
    /// Returns a display-ready projection of this record.
    pub fn view(&self) -> RecordView {
        let f = &self.fields;
        RecordView {
            id: self.id,
            name: f.name.clone(),
            email: f.email.clone(),
            phone: f.phone.clone(),
            date: f.date.clone(),
            gender: f.gender,
            country: f.country,
            terms: f.terms,
        }
    }
}

/// Read-only projection of a [`Record`] for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub gender: Gender,
    pub country: Country,
    pub terms: bool,
}

impl RecordView {
    /// Returns `(label, value)` rows in form order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Date", self.date.clone()),
            ("Gender", self.gender.to_string()),
            ("Country", self.country.to_string()),
            ("Terms", if self.terms { "accepted" } else { "not accepted" }.to_string()),
        ]
    }
}

impl fmt::Display for RecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {}", self.id)?;
        for (label, value) in self.rows() {
            write!(f, "\n{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::fixtures::complete_fields;

    fn make_record() -> Record {
        Record {
            id: RecordId::new(3),
            created_at: Utc.with_ymd_and_hms(2026, 2, 16, 14, 30, 0).unwrap(),
            fields: complete_fields(),
        }
    }

    #[test]
    fn id_display_has_hash_prefix() {
        assert_eq!(RecordId::new(42).to_string(), "#42");
        assert_eq!(RecordId::new(42).get(), 42);
    }

    #[test]
    fn ids_order_by_value() {
        assert!(RecordId::new(1) < RecordId::new(2));
    }

    #[test]
    fn view_copies_every_field() {
        let view = make_record().view();
        assert_eq!(view.id, RecordId::new(3));
        assert_eq!(view.name, "Ann");
        assert_eq!(view.email, "a@x.com");
        assert_eq!(view.phone, "555");
        assert_eq!(view.date, "2024-01-01");
        assert_eq!(view.gender, Gender::Female);
        assert_eq!(view.country, Country::Usa);
        assert!(view.terms);
    }

    #[test]
    fn view_rows_in_form_order() {
        let labels: Vec<&str> = make_record()
            .view()
            .rows()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            labels,
            vec!["Name", "Email", "Phone", "Date", "Gender", "Country", "Terms"]
        );
    }

    #[test]
    fn view_display() {
        insta::assert_snapshot!(make_record().view().to_string(), @r"
        Record #3
        Name: Ann
        Email: a@x.com
        Phone: 555
        Date: 2024-01-01
        Gender: Female
        Country: USA
        Terms: accepted
        ");
    }
}
