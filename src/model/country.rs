use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Country offered by the form's select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    Canada,
    #[serde(rename = "UK")]
    Uk,
}

static ALL_COUNTRIES: &[Country] = &[Country::Usa, Country::Canada, Country::Uk];

impl Country {
    /// Returns the stored value, which is also the label shown in the list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Uk => "UK",
        }
    }

    /// Returns all countries in list order.
    pub fn all() -> &'static [Country] {
        ALL_COUNTRIES
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_COUNTRIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCountry(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
