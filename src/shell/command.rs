//! Command parsing
//!
//! Command names are matched case-insensitively. Commands that need an
//! argument accept it on the same line (`SHOW 12`); without one the shell
//! prompts for it.

use std::fmt;
use std::str::FromStr;

/// Input that does not name a known command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} : Command not found.")]
pub struct UnknownCommand(pub String);

/// A shell command with its inline argument, if one was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// LOADP: import the patient file
    LoadPatients(Option<String>),
    /// LOADR: import the region file
    LoadRegions(Option<String>),
    Clear,
    Average,
    /// FOLLOW: contamination chain of a patient
    Follow(Option<String>),
    Sex,
    Show(Option<String>),
    Top5,
    Oldest,
    /// GROWTH: day-over-day rates for a date
    Growth(Option<String>),
    Matrix,
    Regions,
    Report,
    Quit,
}

impl Command {
    /// Upper-case command name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadPatients(_) => "LOADP",
            Self::LoadRegions(_) => "LOADR",
            Self::Clear => "CLEAR",
            Self::Average => "AVERAGE",
            Self::Follow(_) => "FOLLOW",
            Self::Sex => "SEX",
            Self::Show(_) => "SHOW",
            Self::Top5 => "TOP5",
            Self::Oldest => "OLDEST",
            Self::Growth(_) => "GROWTH",
            Self::Matrix => "MATRIX",
            Self::Regions => "REGIONS",
            Self::Report => "REPORT",
            Self::Quit => "QUIT",
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (name, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim().to_string())),
            None => (trimmed, None),
        };
        let unknown = || UnknownCommand(input.trim_end_matches(['\r', '\n']).to_string());

        let command = match name.to_ascii_uppercase().as_str() {
            "LOADP" => Self::LoadPatients(argument),
            "LOADR" => Self::LoadRegions(argument),
            "FOLLOW" => Self::Follow(argument),
            "SHOW" => Self::Show(argument),
            "GROWTH" => Self::Growth(argument),
            other => {
                if argument.is_some() {
                    return Err(unknown());
                }
                match other {
                    "CLEAR" => Self::Clear,
                    "AVERAGE" => Self::Average,
                    "SEX" => Self::Sex,
                    "TOP5" => Self::Top5,
                    "OLDEST" => Self::Oldest,
                    "MATRIX" => Self::Matrix,
                    "REGIONS" => Self::Regions,
                    "REPORT" => Self::Report,
                    "QUIT" => Self::Quit,
                    _ => return Err(unknown()),
                }
            }
        };

        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
