use std::path::PathBuf;

use bronzegen::{GenerateOptions, GenerationEngine, GenerationError};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bronzegen",
    version,
    about = "Fabricates bronze-layer CSV fixtures for a tool rental dataset"
)]
struct Cli {
    /// Output directory for the CSV files.
    #[arg(long, default_value = "synthetic_data")]
    out_dir: PathBuf,
    /// Seed for the random stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Reference date treated as "today" (YYYY-MM-DD); defaults to the current UTC date.
    #[arg(long)]
    base_date: Option<NaiveDate>,
    /// Number of tool records.
    #[arg(long, default_value_t = 50)]
    tools: u64,
    /// Number of rental records.
    #[arg(long, default_value_t = 500)]
    rentals: u64,
    /// Number of repair records.
    #[arg(long, default_value_t = 200)]
    repairs: u64,
    /// Days of staff attendance to generate.
    #[arg(long, default_value_t = 120)]
    staff_days: u64,
    /// Write generation_report.json next to the CSV files.
    #[arg(long, default_value_t = false)]
    report: bool,
}

fn main() -> Result<(), GenerationError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let options = GenerateOptions {
        out_dir: cli.out_dir,
        seed: cli.seed,
        base_date: cli
            .base_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        tools: cli.tools,
        rentals: cli.rentals,
        repairs: cli.repairs,
        staff_days: cli.staff_days,
        write_report: cli.report,
    };

    println!("Generating synthetic data...");
    let result = GenerationEngine::new(options).run()?;
    println!(
        "Done. CSV files created in {} directory.",
        result.out_dir.display()
    );
    Ok(())
}
