//! End-to-end tests of the interactive shell through in-memory input

use epi_reader::utils::logging::console::{FAREWELL, NO_PATIENTS, NO_RECORDS, NO_REGIONS};
use epi_reader::{Container, EpiReaderConfig, Session};

use crate::utils::{
    PATIENT_HEADER, REGION_HEADER, quiet_session, run_session, write_import_file,
};

const PATIENT_ROWS: [&str; 4] = [
    "1;male;1990;Portugal;Lisboa;contact;-1;01/01/2020;10/01/2020;;released",
    "2;female;1950;Korea;Seoul;;;09/03/2020;;09/03/2020;deceased",
    "3;male;1985;Korea;Seoul;contact with patient;2;10/03/2020;;;isolated",
    "4;female;1970;Korea;Busan;;;10/03/2020;;10/03/2020;deceased",
];

const REGION_ROWS: [&str; 3] = [
    "Seoul;Seoul;605,2;9,776,000",
    "Busan;Busan;770,04;3,429,000",
    "South Korea;Seoul;100210;51,780,000",
];

#[test]
fn test_unknown_command_is_echoed() {
    let output = run_session(&mut quiet_session(), "hello there\nQUIT\n");

    assert!(output.contains("hello there : Command not found."));
    assert!(output.contains(FAREWELL));
}

#[test]
fn test_commands_are_case_insensitive() {
    let output = run_session(&mut quiet_session(), "average\nQuit\nhello\n");

    assert!(output.contains(NO_PATIENTS));
    assert!(output.contains(FAREWELL));
    assert!(!output.contains("hello : Command not found."));
}

#[test]
fn test_end_of_input_quits() {
    let output = run_session(&mut quiet_session(), "");

    assert!(output.starts_with("COMMAND> "));
    assert!(output.contains(FAREWELL));
}

#[test]
fn test_menu_is_printed_by_default() {
    let mut session = Session::new(EpiReaderConfig::default());
    let output = run_session(&mut session, "QUIT\n");

    assert!(output.contains("PROJECT: COVID-19"));
    assert!(output.contains("D. Exit (QUIT)"));
}

#[test]
fn test_load_and_show_patient() {
    let file = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let input = format!("LOADP\n{}\nSHOW 1\nshow\n42\nQUIT\n", file.path().display());
    let output = run_session(&mut quiet_session(), &input);

    assert!(output.contains("Insert filename> "));
    assert!(output.contains(&format!("4 patients were read from {}", file.path().display())));
    assert!(output.contains(
        "ID: 1\nSex: male\nAGE: 30\nCOUNTRY/REGION: Portugal/Lisboa\nINFECTION REASON: contact\nSTATE: released\nNUMBER OF DAYS WITH ILLNESS: 9\n"
    ));
    assert!(output.contains("Insert an ID to show the patient\nSHOW> "));
    assert!(output.contains("Patient not found. Please enter a valid ID!"));
}

#[test]
fn test_missing_file_message() {
    let output = run_session(&mut quiet_session(), "LOADR /no/such/regions.csv\nQUIT\n");

    assert!(output.contains("File not found (/no/such/regions.csv)."));
}

#[test]
fn test_patient_indicators() {
    let file = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let mut session = quiet_session();
    session.load_patients(file.path()).unwrap();

    let output = run_session(
        &mut session,
        "AVERAGE\nSEX\nFOLLOW 3\nOLDEST\nGROWTH 10/03/2020\nMATRIX\nTOP5\nQUIT\n",
    );

    assert!(output.contains("Average Age for deceased patients: 60"));
    assert!(output.contains("Average Age for isolated patients: 35"));
    assert!(output.contains("Percentage of Females: 50% "));
    assert!(output.contains("Total of patients: 4"));
    assert!(output.contains(
        "Following Patient : ID:3, Sex: male, AGE: 35, COUNTRY/REGION: Korea/Seoul, STATE: isolated\ncontaminated by Patient: ID:2, Sex: female, AGE: 70, COUNTRY/REGION: Korea/Seoul, STATE: deceased\ncontaminated by Unknown\n"
    ));
    assert!(output.contains("\nFEMALE:\nID: 2, Sex: female, AGE: 70"));
    assert!(output.contains("Date:<09/03/2020>\nNumber of dead: 1\nNumber of isolated: 1\n\n"));
    assert!(output.contains("Date:<10/03/2020>\nNumber of dead: 2\nNumber of isolated: 2\n"));
    assert!(output.contains("Rate of new infected: 100%"));
    assert!(output.contains("\t|  Isol |  Dcsd |  Rlsd |\n"));
    assert!(output.contains("[46-60]\t|     0\t|    1\t|    0\t|\n"));
    assert!(output.contains("NUMBER OF DAYS WITH ILLNESS: 9"));
}

#[test]
fn test_growth_without_records() {
    let file = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let mut session = quiet_session();
    session.load_patients(file.path()).unwrap();

    let output = run_session(&mut session, "GROWTH\n01/01/2021\nQUIT\n");

    assert!(output.contains("GROWTH> "));
    assert!(output.contains("There is no record for date <01/01/2021>"));
}

#[test]
fn test_header_only_files_print_no_count() {
    let patients = write_import_file(PATIENT_HEADER, &[]);
    let regions = write_import_file(REGION_HEADER, &[]);
    let mut session = quiet_session();
    let input = format!(
        "LOADP {}\nLOADR {}\nQUIT\n",
        patients.path().display(),
        regions.path().display()
    );

    let output = run_session(&mut session, &input);

    assert!(output.starts_with("COMMAND> COMMAND> COMMAND> "), "{output}");
    assert!(!output.contains("were read from"));
    assert!(!output.contains("Operation failure"));
}

#[test]
fn test_follow_cycle_is_reported() {
    let file = write_import_file(
        PATIENT_HEADER,
        &[
            "1;male;1990;Korea;Seoul;;2;01/03/2020;;;isolated",
            "2;male;1990;Korea;Seoul;;1;01/03/2020;;;isolated",
        ],
    );
    let mut session = quiet_session();
    session.load_patients(file.path()).unwrap();

    let output = run_session(&mut session, "FOLLOW 1\nQUIT\n");

    assert!(output.contains(
        "Following Patient : ID:1, Sex: male, AGE: 30, COUNTRY/REGION: Korea/Seoul, STATE: isolated\ncontaminated by Patient: ID:2, Sex: male, AGE: 30, COUNTRY/REGION: Korea/Seoul, STATE: isolated\ncontaminated by Patient: ID:1 : already in the chain\n"
    ));
    assert!(output.contains("Operation failure: Unable to show contamination sequence"));
    assert!(output.contains(FAREWELL));
}

#[test]
fn test_regions_with_empty_patient_list_prints_nothing() {
    let patients = write_import_file(PATIENT_HEADER, &[]);
    let regions = write_import_file(REGION_HEADER, &REGION_ROWS);
    let mut session = quiet_session();
    assert_eq!(session.load_patients(patients.path()).unwrap(), 0);
    assert_eq!(session.load_regions(regions.path()).unwrap(), 3);

    let output = run_session(&mut session, "REGIONS\nQUIT\n");

    assert!(output.starts_with("COMMAND> COMMAND> "));
    assert!(!output.contains("Region:"));
    assert!(!output.contains("No "));
}

#[test]
fn test_regions_guards() {
    let output = run_session(&mut quiet_session(), "REGIONS\nQUIT\n");
    assert!(output.contains(NO_RECORDS));

    let patients = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let mut session = quiet_session();
    session.load_patients(patients.path()).unwrap();
    let output = run_session(&mut session, "REGIONS\nQUIT\n");
    assert!(output.contains(NO_REGIONS));
}

#[test]
fn test_regions_lists_active_regions() {
    let patients = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let regions = write_import_file(REGION_HEADER, &REGION_ROWS);
    let mut session = quiet_session();
    session.load_patients(patients.path()).unwrap();
    session.load_regions(regions.path()).unwrap();

    let output = run_session(&mut session, "REGIONS\nQUIT\n");

    assert!(output.contains(
        "\nRegion: Seoul\nCapital: Seoul\nPopulation: 9776000\nArea: 605.200 km2\n"
    ));
    assert!(!output.contains("Region: Busan"));
}

#[test]
fn test_report_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let patients = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let regions = write_import_file(REGION_HEADER, &REGION_ROWS);

    let mut session = Session::new(EpiReaderConfig {
        show_menu: false,
        report_path: report_path.clone(),
        ..EpiReaderConfig::default()
    });
    session.load_patients(patients.path()).unwrap();
    session.load_regions(regions.path()).unwrap();

    let output = run_session(&mut session, "REPORT\nQUIT\n");
    assert!(output.contains("\nReport created\n"));

    let report = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[0].starts_with("Korea Mortality: "));
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("Busan Mortality: "));
    assert!(lines[3].starts_with("Seoul Mortality: "));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_clear_empties_both_collections() {
    let patients = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let regions = write_import_file(REGION_HEADER, &REGION_ROWS);
    let input = format!(
        "LOADP {}\nLOADR {}\nCLEAR\nAVERAGE\nQUIT\n",
        patients.path().display(),
        regions.path().display()
    );
    let mut session = quiet_session();

    let output = run_session(&mut session, &input);

    assert!(output.contains("\n3 region records deleted.\n4 patient records deleted.\n"));
    assert!(output.contains(NO_PATIENTS));
}

#[test]
fn test_reload_replaces_patients() {
    let first = write_import_file(PATIENT_HEADER, &PATIENT_ROWS);
    let second = write_import_file(PATIENT_HEADER, &PATIENT_ROWS[..1]);
    let mut session = quiet_session();

    session.load_patients(first.path()).unwrap();
    session.load_patients(second.path()).unwrap();

    assert_eq!(session.patients().map(Container::len), Some(1));
}
