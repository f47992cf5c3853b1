//! Configuration for the epidemiological reader.

use std::path::PathBuf;

use crate::collections::GrowthPolicy;

/// Configuration for a reader session
#[derive(Debug, Clone)]
pub struct EpiReaderConfig {
    /// Initial capacity of the patient list
    pub patient_capacity: usize,
    /// Initial capacity of the region map
    pub region_capacity: usize,
    /// How both containers behave when they run out of room
    pub growth: GrowthPolicy,
    /// Year ages are computed against
    pub reference_year: i32,
    /// Where the REPORT command writes its output
    pub report_path: PathBuf,
    /// Country name used for the country-level report line
    pub country: String,
    /// Region-map key holding the population of the whole country
    pub country_region_key: String,
    /// Number of patients listed by TOP5
    pub top_count: usize,
    /// Print the command menu before every prompt
    pub show_menu: bool,
}

impl Default for EpiReaderConfig {
    fn default() -> Self {
        Self {
            patient_capacity: 3129,
            region_capacity: 18,
            growth: GrowthPolicy::Doubling,
            reference_year: 2020,
            report_path: PathBuf::from("report.txt"),
            country: "Korea".to_string(),
            country_region_key: "South Korea".to_string(),
            top_count: 5,
            show_menu: true,
        }
    }
}
