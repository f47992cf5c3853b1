//! Console output utilities
//!
//! Menu and guard messages printed by the interactive shell.

use std::io::{self, Write};

/// Printed when a patient command runs before any patient was imported
pub const NO_PATIENTS: &str = "No patient records were found! Please make sure you've correctly imported the patients' file before proceeding.";

/// Printed when a region command runs before any region was imported
pub const NO_REGIONS: &str = "No region records were found! Please make sure you've correctly imported the regions' file before proceeding.";

/// Printed by REGIONS when neither file was imported
pub const NO_RECORDS: &str = "No records were found! Please make sure you've correctly imported both the patients' and the regions' files before proceeding.";

/// Printed by REPORT when neither file was imported
pub const NO_REPORT_RECORDS: &str = "No records were found to create the report from! Please make sure you've correctly imported both the patients' and the regions' files before proceeding.";

/// Printed by QUIT
pub const FAREWELL: &str = "Thank you for using the program. See you next time!";

/// Print the command menu followed by the command prompt
pub fn print_commands_menu<W: Write>(out: &mut W) -> io::Result<()> {
    const RULE: &str =
        "===================================================================================";
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "                          PROJECT: COVID-19")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "A. Base Commands (LOADP, LOADR, CLEAR).")?;
    writeln!(
        out,
        "B. Simple Indicators and searchs (AVERAGE, FOLLOW, MATRIX, OLDEST, GROWTH, SEX, SHOW, TOP5)."
    )?;
    writeln!(out, "C. Advanced indicator (REGIONS, REPORT)")?;
    writeln!(out, "D. Exit (QUIT)")?;
    writeln!(out)?;
    Ok(())
}

/// Print a prompt without a trailing newline and flush it
pub fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}> ")?;
    out.flush()
}
