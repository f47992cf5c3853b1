//! Analytic commands over the imported data
//!
//! [`patients`] holds the indicators computed from the patient list alone;
//! [`regions`] combines the patient list with the region map.

pub mod patients;
pub mod regions;

pub use patients::{
    AGE_BANDS, AgeBand, AgeBandCounts, AverageAges, ChainEnd, DayCounts, FollowChain,
    GrowthSummary, OldestPatients, PatientDetails, RecoveredPatient, SexBreakdown,
};
pub use regions::{RegionStatistics, Report, ReportLine};
