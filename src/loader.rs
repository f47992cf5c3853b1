//! Line-list and region file loading
//!
//! Both import files are semicolon-delimited text with one header line.
//! Patients are appended to an [`ArrayList`] in file order; regions are put
//! into a [`SortedArrayMap`] keyed by region name, so a repeated name keeps
//! the last row read.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use crate::collections::{ArrayList, SortedArrayMap};
use crate::common::traits::Container;
use crate::config::EpiReaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{EpiReaderError, Result};
use crate::models::{Date, Patient, PatientStatus, Region, RegionKey, Sex};
use crate::utils::text::{parse_decimal_comma, parse_grouped_integer, parse_optional_id, split_fields};
use crate::utils::{log_import_complete, log_import_start, log_suspicious_date};

/// Number of fields in a patient record
pub const PATIENT_FIELDS: usize = 11;

/// Number of fields in a region record
pub const REGION_FIELDS: usize = 4;

/// Import the patient file at `path`
///
/// # Errors
/// Fails if the file cannot be opened or read, if a record is malformed, or
/// if the list cannot store a record. A failed import returns no partial list.
pub fn import_patients(path: &Path, config: &EpiReaderConfig) -> Result<ArrayList<Patient>> {
    let start = Instant::now();
    log_import_start("patients", path);

    let reader = safe_open_file(path, "patient import")?;
    let patients = read_patients(reader, config)?;

    log_import_complete("patients", path, patients.len(), start.elapsed());
    Ok(patients)
}

/// Read patient records from any buffered source
///
/// # Errors
/// See [`import_patients`]
pub fn read_patients<R: BufRead>(reader: R, config: &EpiReaderConfig) -> Result<ArrayList<Patient>> {
    let mut patients = ArrayList::with_policy(config.patient_capacity, config.growth)?;

    for (line_no, line) in records(reader)? {
        let line = line.map_err(|e| read_failure(line_no, e))?;
        let patient = parse_patient(&line, line_no)?;
        patients.push(patient)?;
    }

    Ok(patients)
}

/// Import the region file at `path`
///
/// # Errors
/// Fails if the file cannot be opened or read, if a record is malformed, or
/// if the map cannot store a record.
pub fn import_regions(
    path: &Path,
    config: &EpiReaderConfig,
) -> Result<SortedArrayMap<RegionKey, Region>> {
    let start = Instant::now();
    log_import_start("regions", path);

    let reader = safe_open_file(path, "region import")?;
    let regions = read_regions(reader, config)?;

    log_import_complete("regions", path, regions.len(), start.elapsed());
    Ok(regions)
}

/// Read region records from any buffered source
///
/// # Errors
/// See [`import_regions`]
pub fn read_regions<R: BufRead>(
    reader: R,
    config: &EpiReaderConfig,
) -> Result<SortedArrayMap<RegionKey, Region>> {
    let mut regions = SortedArrayMap::with_policy(config.region_capacity, config.growth)?;

    for (line_no, line) in records(reader)? {
        let line = line.map_err(|e| read_failure(line_no, e))?;
        let region = parse_region(&line, line_no)?;
        if let Some(previous) = regions.put(region.name.clone(), region)? {
            log::debug!("Line {line_no}: region '{}' read again, replacing it", previous.name);
        }
    }

    Ok(regions)
}

/// Data lines of an import file with their 1-based line numbers
///
/// Consumes the header and skips blank lines.
///
/// # Errors
/// Fails if the header line cannot be read
fn records<R: BufRead>(
    reader: R,
) -> Result<impl Iterator<Item = (usize, std::io::Result<String>)>> {
    let mut lines = reader.lines();
    if let Some(header) = lines.next() {
        header.map_err(|e| read_failure(1, e))?;
    }

    Ok(lines
        .enumerate()
        .map(|(index, line)| (index + 2, line))
        .filter(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty())))
}

/// Error for a line that could not be read
///
/// Undecodable text becomes a parse error naming the line.
fn read_failure(line_no: usize, e: std::io::Error) -> EpiReaderError {
    log::error!("Line {line_no}: unable to read record: {e}");
    if e.kind() == std::io::ErrorKind::InvalidData {
        EpiReaderError::parse(line_no, "line is not valid UTF-8")
    } else {
        EpiReaderError::Io(e)
    }
}

/// Parse one patient record
///
/// Fields: id; sex; birth year; country; region; infection reason;
/// infected by; confirmed date; released date; deceased date; status.
///
/// # Errors
/// Returns a parse error naming `line_no` if a field is malformed
pub fn parse_patient(line: &str, line_no: usize) -> Result<Patient> {
    let fields = split_fields(line, PATIENT_FIELDS).map_err(|e| EpiReaderError::parse(line_no, e))?;

    let id = fields[0]
        .trim()
        .parse::<i64>()
        .map_err(|e| EpiReaderError::parse(line_no, format!("patient id '{}': {e}", fields[0])))?;

    let birth_year = parse_optional_id(fields[2])
        .map_err(|e| EpiReaderError::parse(line_no, format!("birth year {e}")))?
        .map(|year| {
            i32::try_from(year)
                .map_err(|_| EpiReaderError::parse(line_no, format!("birth year {year} out of range")))
        })
        .transpose()?;

    let infected_by = parse_optional_id(fields[6])
        .map_err(|e| EpiReaderError::parse(line_no, format!("infected by {e}")))?;

    let confirmed_date = parse_date(fields[7], "confirmed date", line_no)?;
    let released_date = parse_date(fields[8], "released date", line_no)?;
    let deceased_date = parse_date(fields[9], "deceased date", line_no)?;

    Ok(Patient::new(
        id,
        Sex::from(fields[1]),
        birth_year,
        fields[3].trim(),
        fields[4].trim(),
        fields[5].trim(),
        infected_by,
        confirmed_date,
        released_date,
        deceased_date,
        PatientStatus::from(fields[10]),
    ))
}

fn parse_date(field: &str, name: &str, line_no: usize) -> Result<Date> {
    let date = Date::parse(field).map_err(|e| EpiReaderError::parse(line_no, format!("{name}: {e}")))?;
    if !date.is_zero() && !date.is_calendar_valid() {
        log_suspicious_date(line_no, name, field.trim());
    }
    Ok(date)
}

/// Parse one region record
///
/// Fields: name; capital; area (decimal comma); population (may contain
/// thousands-separator commas).
///
/// # Errors
/// Returns a parse error naming `line_no` if a field is malformed
pub fn parse_region(line: &str, line_no: usize) -> Result<Region> {
    let fields = split_fields(line, REGION_FIELDS).map_err(|e| EpiReaderError::parse(line_no, e))?;

    let area = parse_decimal_comma(fields[2])
        .map_err(|e| EpiReaderError::parse(line_no, format!("area {e}")))?;
    let population = parse_grouped_integer(fields[3])
        .map_err(|e| EpiReaderError::parse(line_no, format!("population {e}")))?;

    Ok(Region::new(fields[0].trim(), fields[1].trim(), population, area))
}
