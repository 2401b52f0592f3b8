use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Gender as offered by the form's radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

static ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female];

impl Gender {
    /// Returns the label shown next to the radio button, also used as the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Returns all genders in form order.
    pub fn all() -> &'static [Gender] {
        ALL_GENDERS
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_GENDERS
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownGender(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
