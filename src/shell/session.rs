//! Interactive session state and command handlers
//!
//! A [`Session`] owns the imported containers for the lifetime of the shell.
//! Each handler borrows them, runs one analytic function and prints the
//! result. Handler failures are printed and logged; only QUIT or the end of
//! input stops the loop.

use std::io::{self, BufRead, Lines, Write};
use std::path::Path;

use crate::algorithm::patients::{self, ChainEnd};
use crate::algorithm::regions;
use crate::collections::{ArrayList, SortedArrayMap};
use crate::common::traits::{Container, is_empty_or_null};
use crate::config::EpiReaderConfig;
use crate::error::{EpiReaderError, Result};
use crate::loader::{import_patients, import_regions};
use crate::models::{Date, Patient, Region, RegionKey};
use crate::shell::command::Command;
use crate::utils::logging::console::{
    FAREWELL, NO_PATIENTS, NO_RECORDS, NO_REGIONS, NO_REPORT_RECORDS, print_commands_menu,
    print_prompt,
};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Imported data and settings of one shell run
#[derive(Debug)]
pub struct Session {
    patients: Option<ArrayList<Patient>>,
    regions: Option<SortedArrayMap<RegionKey, Region>>,
    patients_read: usize,
    regions_read: usize,
    most_recent_confirmed: Option<Date>,
    config: EpiReaderConfig,
}

impl Session {
    /// Create a session with nothing imported
    #[must_use]
    pub fn new(config: EpiReaderConfig) -> Self {
        Self {
            patients: None,
            regions: None,
            patients_read: 0,
            regions_read: 0,
            most_recent_confirmed: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EpiReaderConfig {
        &self.config
    }

    /// Imported patient list, if any
    #[must_use]
    pub fn patients(&self) -> Option<&ArrayList<Patient>> {
        self.patients.as_ref()
    }

    /// Imported region map, if any
    #[must_use]
    pub fn regions(&self) -> Option<&SortedArrayMap<RegionKey, Region>> {
        self.regions.as_ref()
    }

    /// Latest confirmed date of the imported patients
    #[must_use]
    pub fn most_recent_confirmed(&self) -> Option<Date> {
        self.most_recent_confirmed
    }

    /// Import the patient file, replacing the current list
    ///
    /// On failure the previously imported list is kept.
    ///
    /// # Errors
    /// See [`import_patients`]
    pub fn load_patients(&mut self, path: &Path) -> Result<usize> {
        let list = import_patients(path, &self.config)?;
        self.most_recent_confirmed = patients::most_recent_confirmed_date(&list);
        self.patients_read = list.len();
        if let Some(previous) = self.patients.replace(list) {
            previous.destroy();
        }
        Ok(self.patients_read)
    }

    /// Import the region file, replacing the current map
    ///
    /// On failure the previously imported map is kept.
    ///
    /// # Errors
    /// See [`import_regions`]
    pub fn load_regions(&mut self, path: &Path) -> Result<usize> {
        let map = import_regions(path, &self.config)?;
        self.regions_read = map.len();
        if let Some(previous) = self.regions.replace(map) {
            previous.destroy();
        }
        Ok(self.regions_read)
    }

    /// Read and execute commands until QUIT or end of input
    ///
    /// # Errors
    /// Fails only if reading `input` or writing `out` fails
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            if self.config.show_menu {
                print_commands_menu(out)?;
            }
            print_prompt(out, "COMMAND")?;

            let Some(line) = lines.next().transpose()? else {
                log::debug!("End of input, leaving the shell");
                self.quit(out)?;
                break;
            };

            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, &mut lines, out)?,
                Err(unknown) => {
                    writeln!(out, "{unknown}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.release();
        Ok(())
    }

    /// Execute one command
    ///
    /// Missing arguments are read from `lines` after printing a prompt.
    ///
    /// # Errors
    /// Fails only if reading `lines` or writing `out` fails
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> io::Result<Flow> {
        log::debug!("Executing {command}");

        match command {
            Command::Quit => {
                self.quit(out)?;
                return Ok(Flow::Quit);
            }
            Command::LoadPatients(argument) => {
                if let Some(file) = read_argument(argument, "Insert filename", lines, out)? {
                    self.load_patients_command(&file, out)?;
                }
            }
            Command::LoadRegions(argument) => {
                if let Some(file) = read_argument(argument, "Insert filename", lines, out)? {
                    self.load_regions_command(&file, out)?;
                }
            }
            Command::Clear => self.clear(out)?,
            Command::Regions => self.regions_command(out)?,
            Command::Report => self.report_command(out)?,
            other => {
                if is_empty_or_null(self.patients.as_ref()) {
                    write!(out, "\n{NO_PATIENTS}\n")?;
                } else {
                    self.patient_command(other, lines, out)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn load_patients_command<W: Write>(&mut self, file: &str, out: &mut W) -> io::Result<()> {
        match self.load_patients(Path::new(file)) {
            Ok(0) => {
                log::info!("{file} holds no patients");
                Ok(())
            }
            Ok(count) => write!(out, "\n{count} patients were read from {file}\n"),
            Err(e @ EpiReaderError::FileNotFound { .. }) => writeln!(out, "{e}."),
            Err(e) => failure(out, "Unable to import patients", &e),
        }
    }

    fn load_regions_command<W: Write>(&mut self, file: &str, out: &mut W) -> io::Result<()> {
        match self.load_regions(Path::new(file)) {
            Ok(0) => {
                log::info!("{file} holds no regions");
                Ok(())
            }
            Ok(count) => write!(out, "\n{count} regions were read from {file}\n"),
            Err(e @ EpiReaderError::FileNotFound { .. }) => writeln!(out, "{e}."),
            Err(e) => failure(out, "Unable to import regions", &e),
        }
    }

    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Some(map) = self.regions.as_mut() {
            map.clear();
        }
        if let Some(list) = self.patients.as_mut() {
            list.clear();
        }

        write!(out, "\n{} region records deleted.", self.regions_read)?;
        write!(out, "\n{} patient records deleted.\n", self.patients_read)?;

        self.patients_read = 0;
        self.regions_read = 0;
        self.most_recent_confirmed = None;
        Ok(())
    }

    fn quit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\n{FAREWELL}\n\n")?;
        out.flush()
    }

    fn release(&mut self) {
        if let Some(list) = self.patients.take() {
            list.destroy();
        }
        if let Some(map) = self.regions.take() {
            map.destroy();
        }
    }

    /// Commands that need a non-empty patient list and nothing else
    fn patient_command<R: BufRead, W: Write>(
        &self,
        command: Command,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(list) = self.patients.as_ref() else {
            return Ok(());
        };
        let year = self.config.reference_year;

        match command {
            Command::Average => print_averages(out, &patients::average_age_by_status(list, year)),
            Command::Sex => match patients::sex_breakdown(list) {
                Some(breakdown) => print_sex_breakdown(out, &breakdown),
                None => write!(out, "\n{NO_PATIENTS}\n"),
            },
            Command::Follow(argument) => {
                let Some(text) = read_argument(argument, "Insert an ID\nFOLLOW", lines, out)? else {
                    return Ok(());
                };
                write!(out, "\nFollowing Patient : ")?;
                let chain = match parse_id(&text) {
                    Ok(id) => patients::trace_chain(list, id),
                    Err(e) => return failure(out, "Unable to show contamination sequence", &e),
                };
                print_chain(out, &chain, year)?;
                if let ChainEnd::Cycle(id) = chain.end {
                    let e = EpiReaderError::CycleDetected { id };
                    failure(out, "Unable to show contamination sequence", &e)?;
                }
                Ok(())
            }
            Command::Show(argument) => {
                let Some(text) =
                    read_argument(argument, "Insert an ID to show the patient\nSHOW", lines, out)?
                else {
                    return Ok(());
                };
                writeln!(out)?;
                match parse_id(&text)
                    .and_then(|id| patients::show(list, id, self.most_recent_confirmed))
                {
                    Ok(details) => write!(
                        out,
                        "{}",
                        details.patient.show_block(details.days_with_illness, year)
                    ),
                    Err(EpiReaderError::PatientNotFound { id }) => {
                        log::debug!("SHOW: no patient with id {id}");
                        writeln!(out, "Patient not found. Please enter a valid ID!")
                    }
                    Err(e) => failure(out, "Unable to show patient", &e),
                }
            }
            Command::Top5 => match patients::top_recovered(list, self.config.top_count, year) {
                Ok(ranked) => {
                    writeln!(out)?;
                    for entry in ranked {
                        writeln!(
                            out,
                            "{}",
                            entry.patient.show_block(Some(entry.days_with_illness), year)
                        )?;
                    }
                    Ok(())
                }
                Err(e) => failure(out, "Unable to show top 5", &e),
            },
            Command::Oldest => {
                let oldest = patients::oldest_by_sex(list);
                write!(out, "\nFEMALE:\n")?;
                for patient in &oldest.female {
                    writeln!(out, "{}", patient.oldest_line(year))?;
                }
                write!(out, "\nMALE:\n")?;
                for patient in &oldest.male {
                    writeln!(out, "{}", patient.oldest_line(year))?;
                }
                Ok(())
            }
            Command::Growth(argument) => {
                let Some(text) = read_argument(
                    argument,
                    "Please insert a date to show the growth rate (DD/MM/YYYY)\nGROWTH",
                    lines,
                    out,
                )?
                else {
                    return Ok(());
                };
                let result = Date::parse(&text)
                    .map_err(|e| EpiReaderError::invalid_argument(e.to_string()))
                    .and_then(|date| patients::growth(list, date));
                match result {
                    Ok(summary) => print_growth(out, &summary),
                    Err(EpiReaderError::NoRecordForDate { date }) => {
                        write!(out, "\nThere is no record for date <{date}>\n")
                    }
                    Err(e) => failure(out, "Unable to show growth", &e),
                }
            }
            Command::Matrix => print_matrix(out, &patients::age_status_matrix(list, year)),
            other => {
                log::warn!("{other} is not a patient command");
                Ok(())
            }
        }
    }

    /// Guard of REPORT; returns the containers when both hold data
    fn both_collections<W: Write>(
        &self,
        out: &mut W,
    ) -> io::Result<Option<(&ArrayList<Patient>, &SortedArrayMap<RegionKey, Region>)>> {
        let no_patients = is_empty_or_null(self.patients.as_ref());
        let no_regions = is_empty_or_null(self.regions.as_ref());

        if no_patients && no_regions {
            write!(out, "\n{NO_REPORT_RECORDS}\n")?;
        } else if no_patients {
            write!(out, "\n{NO_PATIENTS}\n")?;
        } else if no_regions {
            write!(out, "\n{NO_REGIONS}\n")?;
        } else if let (Some(list), Some(map)) = (self.patients.as_ref(), self.regions.as_ref()) {
            return Ok(Some((list, map)));
        }
        Ok(None)
    }

    /// REGIONS runs as soon as a patient list exists, even an empty one
    fn regions_command<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let no_regions = is_empty_or_null(self.regions.as_ref());

        let (list, map) = match (self.patients.as_ref(), self.regions.as_ref()) {
            (Some(list), Some(map)) if !no_regions => (list, map),
            (imported, _) if no_regions && is_empty_or_null(imported) => {
                return write!(out, "\n{NO_RECORDS}\n");
            }
            (_, _) if no_regions => return write!(out, "\n{NO_REGIONS}\n"),
            _ => return write!(out, "\n{NO_PATIENTS}\n"),
        };

        match regions::regions_with_active_cases(list, map) {
            Ok(active) => {
                for region in active.values() {
                    writeln!(out, "{region}")?;
                }
                active.destroy();
                Ok(())
            }
            Err(e) => failure(out, "Unable to show list of infected regions", &e),
        }
    }

    fn report_command<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some((list, map)) = self.both_collections(out)? else {
            return Ok(());
        };

        let report = regions::render_report(list, map, &self.config);
        match regions::write_report(&report, &self.config.report_path) {
            Ok(()) => write!(out, "\nReport created\n"),
            Err(e) => {
                log::error!("Report not written to {}: {e}", self.config.report_path.display());
                write!(out, "\nReport not created\n")
            }
        }
    }
}

/// Use the inline argument, or prompt for it on the next input line
fn read_argument<R: BufRead, W: Write>(
    inline: Option<String>,
    prompt: &str,
    lines: &mut Lines<R>,
    out: &mut W,
) -> io::Result<Option<String>> {
    if inline.is_some() {
        return Ok(inline);
    }
    print_prompt(out, prompt)?;
    Ok(lines
        .next()
        .transpose()?
        .map(|line| line.trim().to_string()))
}

fn parse_id(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|e| EpiReaderError::invalid_argument(format!("patient id '{text}': {e}")))
}

/// Print the failure line of a command and log the cause
fn failure<W: Write>(out: &mut W, what: &str, error: &EpiReaderError) -> io::Result<()> {
    log::error!("{what}: {error}");
    write!(out, "\nOperation failure: {what}. Please try again!\n")
}

fn rounded(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| format!("{:.0}", v.round()))
}

fn print_averages<W: Write>(out: &mut W, averages: &patients::AverageAges) -> io::Result<()> {
    write!(out, "\nAverage Age for deceased patients: {}", rounded(averages.deceased))?;
    write!(out, "\nAverage Age for released patients: {}", rounded(averages.released))?;
    write!(out, "\nAverage Age for isolated patients: {}", rounded(averages.isolated))?;
    writeln!(out)
}

fn print_sex_breakdown<W: Write>(out: &mut W, breakdown: &patients::SexBreakdown) -> io::Result<()> {
    write!(out, "\nPercentage of Females: {:.0}% ", breakdown.female.round())?;
    write!(out, "\nPercentage of Males: {:.0}% ", breakdown.male.round())?;
    write!(out, "\nPercentage of unknowns: {:.0}% ", breakdown.unknown.round())?;
    write!(out, "\nTotal of patients: {}", breakdown.total)?;
    writeln!(out)
}

fn print_chain<W: Write>(out: &mut W, chain: &patients::FollowChain<'_>, year: i32) -> io::Result<()> {
    let last = chain.links.len().saturating_sub(1);
    for (index, patient) in chain.links.iter().enumerate() {
        write!(out, "{}", patient.follow_line(year))?;
        if index == last && chain.end == ChainEnd::Unknown {
            write!(out, "\ncontaminated by Unknown\n")?;
        } else {
            write!(out, "\ncontaminated by Patient: ")?;
        }
    }
    match chain.end {
        ChainEnd::Missing(id) => writeln!(out, "ID:{id} : does not exist record")?,
        ChainEnd::Cycle(id) => writeln!(out, "ID:{id} : already in the chain")?,
        ChainEnd::Unknown => {}
    }
    Ok(())
}

fn print_growth<W: Write>(out: &mut W, summary: &patients::GrowthSummary) -> io::Result<()> {
    let (previous, current) = (&summary.previous, &summary.current);
    write!(out, "\nDate:<{}>", previous.date)?;
    write!(out, "\nNumber of dead: {}", previous.deceased)?;
    write!(out, "\nNumber of isolated: {}\n\n", previous.isolated)?;
    write!(out, "Date:<{}>", current.date)?;
    write!(out, "\nNumber of dead: {}", current.deceased)?;
    write!(out, "\nNumber of isolated: {}\n", current.isolated)?;
    write!(out, "\nRate of new infected: {:.0}%", summary.infection_rate.round())?;
    write!(out, "\nRate of new dead: {:.0}%", summary.death_rate.round())?;
    writeln!(out)
}

fn print_matrix<W: Write>(out: &mut W, rows: &[patients::AgeBandCounts]) -> io::Result<()> {
    write!(out, "\n\t|  Isol |  Dcsd |  Rlsd |\n")?;
    for row in rows {
        write!(out, "{}\t| ", row.band.label())?;
        for count in [row.isolated, row.deceased, row.released] {
            write!(out, "{count:5}\t|")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
