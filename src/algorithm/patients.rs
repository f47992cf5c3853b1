//! Patient statistics and searches
//!
//! Read-only traversals of the patient list backing the AVERAGE, SEX, SHOW,
//! FOLLOW, TOP5, OLDEST, GROWTH and MATRIX commands. Every function walks the
//! list by rank through the container interface; none of them mutates it.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::collections::ArrayList;
use crate::common::traits::Container;
use crate::error::{EpiReaderError, Result};
use crate::models::{Date, Patient, PatientStatus, Sex};

/// Running mean of ages
#[derive(Debug, Default, Clone, Copy)]
struct AgeAccumulator {
    total: f64,
    count: usize,
}

impl AgeAccumulator {
    fn add(&mut self, age: i32) {
        self.total += f64::from(age);
        self.count += 1;
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }
}

/// Average age per patient status
///
/// A status with no patient of known age has no average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageAges {
    pub isolated: Option<f64>,
    pub deceased: Option<f64>,
    pub released: Option<f64>,
}

/// Average age of isolated, deceased and released patients
#[must_use]
pub fn average_age_by_status(patients: &ArrayList<Patient>, reference_year: i32) -> AverageAges {
    let mut isolated = AgeAccumulator::default();
    let mut deceased = AgeAccumulator::default();
    let mut released = AgeAccumulator::default();

    for patient in patients {
        let Some(age) = patient.age(reference_year) else {
            continue;
        };
        match patient.status {
            PatientStatus::Isolated => isolated.add(age),
            PatientStatus::Deceased => deceased.add(age),
            PatientStatus::Released => released.add(age),
            PatientStatus::Other(_) => {}
        }
    }

    AverageAges {
        isolated: isolated.mean(),
        deceased: deceased.mean(),
        released: released.mean(),
    }
}

/// Share of patients per sex, as percentages of `total`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexBreakdown {
    pub male: f64,
    pub female: f64,
    pub unknown: f64,
    pub total: usize,
}

/// Percentage of male, female and unknown-sex patients
///
/// Returns `None` for an empty list.
#[must_use]
pub fn sex_breakdown(patients: &ArrayList<Patient>) -> Option<SexBreakdown> {
    let total = patients.len();
    if total == 0 {
        return None;
    }

    let (mut male, mut female, mut unknown) = (0usize, 0usize, 0usize);
    for patient in patients {
        match patient.sex {
            Sex::Male => male += 1,
            Sex::Female => female += 1,
            Sex::Other(_) => unknown += 1,
        }
    }

    let percent = |count: usize| count as f64 / total as f64 * 100.0;
    Some(SexBreakdown {
        male: percent(male),
        female: percent(female),
        unknown: percent(unknown),
        total,
    })
}

/// Find a patient by id
#[must_use]
pub fn find_patient(patients: &ArrayList<Patient>, id: i64) -> Option<&Patient> {
    patients.iter().find(|patient| patient.id == id)
}

/// Latest confirmed date in the list, ignoring empty dates
#[must_use]
pub fn most_recent_confirmed_date(patients: &ArrayList<Patient>) -> Option<Date> {
    patients
        .iter()
        .map(|patient| patient.confirmed_date)
        .filter(|date| !date.is_zero())
        .max_by_key(Date::day_number)
}

/// Number of days a patient has been (or was) ill
///
/// Released patients count up to their release, isolated patients up to the
/// most recent confirmation in the data set, deceased patients up to their
/// death. Anything else is unknown.
#[must_use]
pub fn days_with_illness(patient: &Patient, most_recent_confirmed: Option<Date>) -> Option<i64> {
    let confirmed = &patient.confirmed_date;
    if patient.released_date.has_day() {
        Some(confirmed.days_until(&patient.released_date))
    } else if patient.is_isolated() {
        most_recent_confirmed.map(|latest| confirmed.days_until(&latest))
    } else if patient.deceased_date.has_day() {
        Some(confirmed.days_until(&patient.deceased_date))
    } else {
        None
    }
}

/// A patient together with their days with illness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientDetails<'a> {
    pub patient: &'a Patient,
    pub days_with_illness: Option<i64>,
}

/// Look up a patient for SHOW
///
/// # Errors
/// Returns `PatientNotFound` if no patient has this id
pub fn show(
    patients: &ArrayList<Patient>,
    id: i64,
    most_recent_confirmed: Option<Date>,
) -> Result<PatientDetails<'_>> {
    let patient = find_patient(patients, id).ok_or(EpiReaderError::PatientNotFound { id })?;
    Ok(PatientDetails {
        patient,
        days_with_illness: days_with_illness(patient, most_recent_confirmed),
    })
}

/// How a contamination chain ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainEnd {
    /// Last patient has no known source
    Unknown,
    /// The chain refers to a patient that is not in the list
    Missing(i64),
    /// The chain refers back to a patient already listed
    Cycle(i64),
}

/// Patients linked by "infected by", starting from the followed patient
#[derive(Debug, Clone, PartialEq)]
pub struct FollowChain<'a> {
    pub links: Vec<&'a Patient>,
    pub end: ChainEnd,
}

/// Contamination chain of a patient, stopping where it loops back
///
/// Never fails: a chain that revisits a patient ends with [`ChainEnd::Cycle`].
#[must_use]
pub fn trace_chain(patients: &ArrayList<Patient>, id: i64) -> FollowChain<'_> {
    let mut visited = FxHashSet::default();
    let mut links = Vec::new();
    let mut next = Some(id);

    while let Some(current) = next {
        if !visited.insert(current) {
            log::warn!("Contamination chain of patient {id} loops back to {current}");
            return FollowChain {
                links,
                end: ChainEnd::Cycle(current),
            };
        }

        let Some(patient) = find_patient(patients, current) else {
            return FollowChain {
                links,
                end: ChainEnd::Missing(current),
            };
        };

        links.push(patient);
        next = patient.infected_by;
    }

    FollowChain {
        links,
        end: ChainEnd::Unknown,
    }
}

/// Follow the contamination chain of a patient back to its source
///
/// # Errors
/// Returns `CycleDetected` if the chain reaches a patient it already visited
pub fn follow_chain(patients: &ArrayList<Patient>, id: i64) -> Result<FollowChain<'_>> {
    let chain = trace_chain(patients, id);
    match chain.end {
        ChainEnd::Cycle(id) => Err(EpiReaderError::CycleDetected { id }),
        _ => Ok(chain),
    }
}

/// A released patient ranked by recovery time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveredPatient<'a> {
    pub patient: &'a Patient,
    pub age: Option<i32>,
    pub days_with_illness: i64,
}

/// Released patients who took longest to recover
///
/// Only patients with a recorded release date qualify. Ranking is by days
/// with illness, longest first; ties go to the older patient.
///
/// # Errors
/// Fails if the temporary list of released patients cannot be allocated
pub fn top_recovered(
    patients: &ArrayList<Patient>,
    count: usize,
    reference_year: i32,
) -> Result<Vec<RecoveredPatient<'_>>> {
    let released_count = patients
        .iter()
        .filter(|patient| patient.is_released() && patient.released_date.has_day())
        .count();

    let mut released = ArrayList::with_capacity(released_count)?;
    for patient in patients {
        if patient.is_released() && patient.released_date.has_day() {
            released.push(patient)?;
        }
    }

    let ranked = released
        .iter()
        .copied()
        .map(|patient| RecoveredPatient {
            patient,
            age: patient.age(reference_year),
            days_with_illness: patient.confirmed_date.days_until(&patient.released_date),
        })
        .sorted_by(|a, b| {
            b.days_with_illness
                .cmp(&a.days_with_illness)
                .then_with(|| b.age.cmp(&a.age))
        })
        .take(count)
        .collect_vec();

    released.destroy();
    Ok(ranked)
}

/// Oldest patients of each sex
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OldestPatients<'a> {
    pub female: Vec<&'a Patient>,
    pub male: Vec<&'a Patient>,
}

/// Patients sharing the earliest known birth year, per sex
#[must_use]
pub fn oldest_by_sex(patients: &ArrayList<Patient>) -> OldestPatients<'_> {
    OldestPatients {
        female: oldest_of(patients, &Sex::Female),
        male: oldest_of(patients, &Sex::Male),
    }
}

fn oldest_of<'a>(patients: &'a ArrayList<Patient>, sex: &Sex) -> Vec<&'a Patient> {
    let earliest = patients
        .iter()
        .filter(|patient| &patient.sex == sex)
        .filter_map(|patient| patient.birth_year)
        .min();
    let Some(earliest) = earliest else {
        return Vec::new();
    };

    patients
        .iter()
        .filter(|patient| &patient.sex == sex && patient.birth_year == Some(earliest))
        .collect()
}

/// Deaths and new confirmed cases recorded for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCounts {
    pub date: Date,
    pub deceased: usize,
    pub isolated: usize,
}

/// Day-over-day comparison for GROWTH
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSummary {
    pub previous: DayCounts,
    pub current: DayCounts,
    /// Percentage increase of new confirmed cases, never negative
    pub infection_rate: f64,
    /// Percentage increase of deaths, never negative
    pub death_rate: f64,
}

/// Compare `date` with the day before it
///
/// Deaths for `date` are cumulative over both days; confirmed cases are
/// counted per day.
///
/// # Errors
/// Returns `NoRecordForDate` if either day has no death or no confirmed case
pub fn growth(patients: &ArrayList<Patient>, date: Date) -> Result<GrowthSummary> {
    let previous_date = date.previous_day();

    let (mut previous_deaths, mut same_day_deaths) = (0usize, 0usize);
    let (mut previous_isolated, mut current_isolated) = (0usize, 0usize);
    for patient in patients {
        if patient.deceased_date == previous_date {
            previous_deaths += 1;
        }
        if patient.deceased_date == date {
            same_day_deaths += 1;
        }
        if patient.confirmed_date == previous_date {
            previous_isolated += 1;
        }
        if patient.confirmed_date == date {
            current_isolated += 1;
        }
    }
    let current_deaths = previous_deaths + same_day_deaths;

    if previous_deaths == 0 || current_deaths == 0 || previous_isolated == 0 || current_isolated == 0 {
        return Err(EpiReaderError::NoRecordForDate {
            date: date.to_string(),
        });
    }

    let rate = |previous: usize, current: usize| {
        ((current as f64 - previous as f64) / previous as f64 * 100.0).max(0.0)
    };

    Ok(GrowthSummary {
        previous: DayCounts {
            date: previous_date,
            deceased: previous_deaths,
            isolated: previous_isolated,
        },
        current: DayCounts {
            date,
            deceased: current_deaths,
            isolated: current_isolated,
        },
        infection_rate: rate(previous_isolated, current_isolated),
        death_rate: rate(previous_deaths, current_deaths),
    })
}

/// Inclusive age band; the last band is open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    pub min: i32,
    pub max: Option<i32>,
}

impl AgeBand {
    #[must_use]
    pub fn contains(&self, age: i32) -> bool {
        age >= self.min && self.max.is_none_or(|max| age <= max)
    }

    /// Row label, e.g. `[16-30]` or `[76...[`
    #[must_use]
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("[{}-{max}]", self.min),
            None => format!("[{}...[", self.min),
        }
    }
}

/// Age bands of the MATRIX command
pub const AGE_BANDS: [AgeBand; 6] = [
    AgeBand { min: 0, max: Some(15) },
    AgeBand { min: 16, max: Some(30) },
    AgeBand { min: 31, max: Some(45) },
    AgeBand { min: 46, max: Some(60) },
    AgeBand { min: 61, max: Some(75) },
    AgeBand { min: 76, max: None },
];

/// Patient counts per status within one age band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBandCounts {
    pub band: AgeBand,
    pub isolated: usize,
    pub deceased: usize,
    pub released: usize,
}

/// Count patients of known age per age band and status
#[must_use]
pub fn age_status_matrix(patients: &ArrayList<Patient>, reference_year: i32) -> Vec<AgeBandCounts> {
    let mut rows = AGE_BANDS
        .iter()
        .map(|band| AgeBandCounts {
            band: *band,
            isolated: 0,
            deceased: 0,
            released: 0,
        })
        .collect_vec();

    for patient in patients {
        let Some(age) = patient.age(reference_year) else {
            continue;
        };
        let Some(row) = rows.iter_mut().find(|row| row.band.contains(age)) else {
            continue;
        };
        match patient.status {
            PatientStatus::Isolated => row.isolated += 1,
            PatientStatus::Deceased => row.deceased += 1,
            PatientStatus::Released => row.released += 1,
            PatientStatus::Other(_) => {}
        }
    }

    rows
}
