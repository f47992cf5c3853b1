//! Region indicators
//!
//! REGIONS lists the regions that still have active cases; REPORT writes
//! mortality, incident rate and lethality per country and region.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::collections::{ArrayList, SortedArrayMap};
use crate::common::traits::Container;
use crate::config::EpiReaderConfig;
use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::models::{Patient, Region, RegionKey};

/// Regions with at least one isolated patient, in name order
///
/// The returned map is a temporary view: values are copied out of `regions`
/// and the caller destroys it once printed. Isolated patients whose region is
/// not in `regions` are skipped.
///
/// # Errors
/// Fails if the temporary map cannot be allocated or grown
pub fn regions_with_active_cases(
    patients: &ArrayList<Patient>,
    regions: &SortedArrayMap<RegionKey, Region>,
) -> Result<SortedArrayMap<RegionKey, Region>> {
    if patients.is_empty() {
        return Ok(SortedArrayMap::with_capacity(0)?);
    }

    let mut active = SortedArrayMap::with_capacity(regions.len())?;
    for patient in patients.iter().filter(|patient| patient.is_isolated()) {
        if active.contains(patient.region.as_str()) {
            continue;
        }
        match regions.get(patient.region.as_str()) {
            Ok(region) => {
                active.put(patient.region.clone(), region.clone())?;
            }
            Err(e) => {
                log::debug!(
                    "Patient {} is isolated in region '{}' with no region record: {e}",
                    patient.id,
                    patient.region
                );
            }
        }
    }

    Ok(active)
}

/// Indicators of one country or region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStatistics {
    /// Deaths per 10,000 inhabitants
    pub mortality: f64,
    /// Isolated patients as a percentage of the population
    pub incident_rate: f64,
    /// Deaths as a percentage of all patients in the list
    pub lethality: f64,
}

impl RegionStatistics {
    fn compute(
        patients: &ArrayList<Patient>,
        population: i64,
        belongs: impl Fn(&Patient) -> bool,
    ) -> Option<Self> {
        if population <= 0 {
            return None;
        }

        let (mut deaths, mut isolated) = (0usize, 0usize);
        for patient in patients.iter().filter(|patient| belongs(patient)) {
            if patient.is_deceased() {
                deaths += 1;
            } else if patient.is_isolated() {
                isolated += 1;
            }
        }

        let total = patients.len();
        let population = population as f64;
        Some(Self {
            mortality: deaths as f64 / population * 10_000.0,
            incident_rate: isolated as f64 / population * 100.0,
            lethality: if total == 0 {
                0.0
            } else {
                deaths as f64 / total as f64 * 100.0
            },
        })
    }
}

fn population_of(regions: &SortedArrayMap<RegionKey, Region>, key: &str) -> i64 {
    regions.get(key).map_or(0, |region| region.population)
}

/// Indicators for a country, using the population stored under `population_key`
///
/// `None` when that region is missing or has no population.
#[must_use]
pub fn country_statistics(
    patients: &ArrayList<Patient>,
    regions: &SortedArrayMap<RegionKey, Region>,
    country: &str,
    population_key: &str,
) -> Option<RegionStatistics> {
    RegionStatistics::compute(patients, population_of(regions, population_key), |patient| {
        patient.country == country
    })
}

/// Indicators for one region of the map
///
/// `None` when the region is missing or has no population.
#[must_use]
pub fn region_statistics(
    patients: &ArrayList<Patient>,
    regions: &SortedArrayMap<RegionKey, Region>,
    region: &str,
) -> Option<RegionStatistics> {
    RegionStatistics::compute(patients, population_of(regions, region), |patient| {
        patient.region == region
    })
}

/// One line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub name: String,
    pub statistics: Option<RegionStatistics>,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.statistics {
            None => write!(f, "{} unknown (no population data)", self.name),
            Some(stats) => write!(
                f,
                "{} Mortality: {:.3}% Incident Rate: {:.3}% Lethality: {:.3}%",
                self.name, stats.mortality, stats.incident_rate, stats.lethality
            ),
        }
    }
}

/// Country line followed by one line per region
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub country: ReportLine,
    pub regions: Vec<ReportLine>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.country)?;
        for line in &self.regions {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Compute the report
///
/// Regions are listed in name order; the region holding the country
/// population is only reported as the country line.
#[must_use]
pub fn render_report(
    patients: &ArrayList<Patient>,
    regions: &SortedArrayMap<RegionKey, Region>,
    config: &EpiReaderConfig,
) -> Report {
    let country = ReportLine {
        name: config.country.clone(),
        statistics: country_statistics(
            patients,
            regions,
            &config.country,
            &config.country_region_key,
        ),
    };

    let region_lines = regions
        .iter()
        .filter(|(name, _)| **name != config.country_region_key)
        .map(|(name, _)| ReportLine {
            name: name.clone(),
            statistics: region_statistics(patients, regions, name),
        })
        .collect();

    Report {
        country,
        regions: region_lines,
    }
}

/// Write the report to `path`, replacing any existing file
///
/// # Errors
/// Fails if the file cannot be created or written
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let mut file = safe_create_file(path, "report")?;
    write!(file, "{report}")?;
    file.flush()?;
    log::info!(
        "Report written to {} ({} region lines)",
        path.display(),
        report.regions.len()
    );
    Ok(())
}
