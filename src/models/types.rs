//! Common domain type definitions
//!
//! Categorical patient fields. Both enums keep unrecognised text so that a
//! record prints exactly what the import file contained.

use std::fmt;

/// Sex of a patient
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Missing or unrecognised value, kept verbatim
    Other(String),
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("male") {
            Self::Male
        } else if s.eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Other(s.to_string())
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Clinical state of a patient
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatientStatus {
    /// Active case
    Isolated,
    /// Recovered
    Released,
    /// Died
    Deceased,
    /// Missing or unrecognised value, kept verbatim
    Other(String),
}

impl From<&str> for PatientStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "isolated" => Self::Isolated,
            "released" => Self::Released,
            "deceased" => Self::Deceased,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isolated => f.write_str("isolated"),
            Self::Released => f.write_str("released"),
            Self::Deceased => f.write_str("deceased"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
