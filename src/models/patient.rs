//! Patient record
//!
//! One row of the line list. Patients are created once during import and
//! stored by value in the patient list.

use std::fmt;

use crate::models::date::Date;
use crate::models::types::{PatientStatus, Sex};

/// Text printed in place of a missing value
const UNKNOWN: &str = "unknown";

/// A confirmed case
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    /// Patient identifier
    pub id: i64,
    pub sex: Sex,
    /// Birth year, if known
    pub birth_year: Option<i32>,
    pub country: String,
    pub region: String,
    /// How the infection happened (may be empty)
    pub infection_reason: String,
    /// Identifier of the patient who passed on the infection, if known
    pub infected_by: Option<i64>,
    pub confirmed_date: Date,
    pub released_date: Date,
    pub deceased_date: Date,
    pub status: PatientStatus,
}

impl Patient {
    /// Create a patient from its fields in file order
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: i64,
        sex: Sex,
        birth_year: Option<i32>,
        country: impl Into<String>,
        region: impl Into<String>,
        infection_reason: impl Into<String>,
        infected_by: Option<i64>,
        confirmed_date: Date,
        released_date: Date,
        deceased_date: Date,
        status: PatientStatus,
    ) -> Self {
        Self {
            id,
            sex,
            birth_year,
            country: country.into(),
            region: region.into(),
            infection_reason: infection_reason.into(),
            infected_by,
            confirmed_date,
            released_date,
            deceased_date,
            status,
        }
    }

    /// Age in `reference_year`, if the birth year is known
    ///
    /// `None` when the difference does not fit an `i32`.
    #[must_use]
    pub fn age(&self, reference_year: i32) -> Option<i32> {
        self.birth_year.and_then(|year| reference_year.checked_sub(year))
    }

    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.status == PatientStatus::Isolated
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.status == PatientStatus::Released
    }

    #[must_use]
    pub fn is_deceased(&self) -> bool {
        self.status == PatientStatus::Deceased
    }

    /// Detail block printed by SHOW and TOP5
    #[must_use]
    pub fn show_block(&self, days_with_illness: Option<i64>, reference_year: i32) -> String {
        let infection_reason = if self.infection_reason.is_empty() {
            UNKNOWN
        } else {
            &self.infection_reason
        };

        format!(
            "ID: {}\nSex: {}\nAGE: {}\nCOUNTRY/REGION: {}/{}\nINFECTION REASON: {}\nSTATE: {}\nNUMBER OF DAYS WITH ILLNESS: {}\n",
            self.id,
            self.sex,
            or_unknown(self.age(reference_year)),
            self.country,
            self.region,
            infection_reason,
            self.status,
            or_unknown(days_with_illness),
        )
    }

    /// One-line summary printed by OLDEST
    #[must_use]
    pub fn oldest_line(&self, reference_year: i32) -> String {
        format!(
            "ID: {}, Sex: {}, AGE: {}, COUNTRY/REGION: {}/{}, STATE: {}",
            self.id,
            self.sex,
            or_unknown(self.age(reference_year)),
            self.country,
            self.region,
            self.status
        )
    }

    /// One-line summary printed for each link of a FOLLOW chain
    #[must_use]
    pub fn follow_line(&self, reference_year: i32) -> String {
        format!(
            "ID:{}, Sex: {}, AGE: {}, COUNTRY/REGION: {}/{}, STATE: {}",
            self.id,
            self.sex,
            or_unknown(self.age(reference_year)),
            self.country,
            self.region,
            self.status
        )
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "=========================================";
        writeln!(f, "{RULE}")?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Birth year: {}", or_unknown(self.birth_year))?;
        writeln!(f, "Sex: {}", self.sex)?;
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Infection reason: {}", self.infection_reason)?;
        writeln!(f, "Infected by: {}", or_unknown(self.infected_by))?;
        writeln!(f, "Confirmed date: {}", self.confirmed_date)?;
        writeln!(f, "Released date: {}", self.released_date)?;
        writeln!(f, "Deceased date: {}", self.deceased_date)?;
        write!(f, "{RULE}")
    }
}
