use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use epi_reader::{EpiReaderConfig, Session};
use log::info;

#[derive(Parser)]
#[command(name = "epi-reader")]
#[command(about = "Import, normalise and analyse COVID-19 patient and region data")]
struct Cli {
    #[arg(long, value_name = "FILE", help = "Patient file imported before the first prompt")]
    patients: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Region file imported before the first prompt")]
    regions: Option<PathBuf>,

    #[arg(long, value_name = "FILE", default_value = "report.txt", help = "File written by REPORT")]
    report: PathBuf,

    #[arg(long, value_name = "YEAR", default_value_t = 2020, help = "Year ages are computed against")]
    reference_year: i32,

    #[arg(long, help = "Do not print the command menu before each prompt")]
    no_menu: bool,
}

impl Cli {
    fn config(&self) -> EpiReaderConfig {
        EpiReaderConfig {
            report_path: self.report.clone(),
            reference_year: self.reference_year,
            show_menu: !self.no_menu,
            ..EpiReaderConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut session = Session::new(cli.config());

    if let Some(path) = &cli.patients {
        let count = session
            .load_patients(path)
            .with_context(|| format!("Failed to import patients from {}", path.display()))?;
        info!("Preloaded {count} patients from {}", path.display());
    }

    if let Some(path) = &cli.regions {
        let count = session
            .load_regions(path)
            .with_context(|| format!("Failed to import regions from {}", path.display()))?;
        info!("Preloaded {count} regions from {}", path.display());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout.lock())
        .context("Interactive session failed")?;

    Ok(())
}
