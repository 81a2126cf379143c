use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::{read_table, write_table};
use crate::tables::rentals::{Rental, generate_rentals};
use crate::tables::repairs::generate_repairs;
use crate::tables::staff::generate_staff;
use crate::tables::tools::{Tool, generate_tools};

pub const TOOLS_FILE: &str = "bronze_tools_sample.csv";
pub const RENTALS_FILE: &str = "bronze_rentals_sample.csv";
pub const REPAIRS_FILE: &str = "bronze_repairs_sample.csv";
pub const STAFF_FILE: &str = "bronze_staff_sample.csv";
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the four bronze tables.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run all four stages in fixed order.
    ///
    /// A single ChaCha stream seeded from `options.seed` drives every draw,
    /// so two runs with identical options produce byte-identical files.
    /// Dependent stages read their parent table back from the CSV it was
    /// persisted to before sampling foreign keys.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let opts = &self.options;
        let run_id = uuid::Uuid::new_v4().to_string();

        std::fs::create_dir_all(&opts.out_dir)?;
        let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
        let mut report = GenerationReport::new(run_id.clone(), opts.seed, opts.base_date);

        info!(
            run_id = %run_id,
            seed = opts.seed,
            base_date = %opts.base_date,
            out_dir = %opts.out_dir.display(),
            "generation started"
        );

        let tools = generate_tools(&mut rng, opts.base_date, opts.tools);
        persist_stage(&opts.out_dir, "tools", TOOLS_FILE, opts.tools, &tools, &mut report)?;

        let tools: Vec<Tool> = read_table(&opts.out_dir.join(TOOLS_FILE))?;
        if tools.is_empty() && opts.rentals > 0 {
            return Err(GenerationError::EmptyParent("tools"));
        }
        let rentals = generate_rentals(&mut rng, opts.base_date, &tools, opts.rentals);
        persist_stage(
            &opts.out_dir,
            "rentals",
            RENTALS_FILE,
            opts.rentals,
            &rentals,
            &mut report,
        )?;

        let rentals: Vec<Rental> = read_table(&opts.out_dir.join(RENTALS_FILE))?;
        if rentals.is_empty() && opts.repairs > 0 {
            return Err(GenerationError::EmptyParent("rentals"));
        }
        let repairs = generate_repairs(&mut rng, &rentals, opts.repairs);
        persist_stage(
            &opts.out_dir,
            "repairs",
            REPAIRS_FILE,
            opts.repairs,
            &repairs,
            &mut report,
        )?;

        let staff = generate_staff(&mut rng, opts.base_date, opts.staff_days);
        persist_stage(
            &opts.out_dir,
            "staff",
            STAFF_FILE,
            opts.staff_days * 24,
            &staff,
            &mut report,
        )?;

        report.duration_ms = start.elapsed().as_millis() as u64;

        if opts.write_report {
            let report_path = opts.out_dir.join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
        }

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir: opts.out_dir.clone(),
            report,
        })
    }
}

fn persist_stage<T: Serialize>(
    out_dir: &Path,
    table: &str,
    file: &str,
    rows_requested: u64,
    rows: &[T],
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let stage_start = Instant::now();
    let bytes_written = write_table(&out_dir.join(file), rows)?;

    info!(
        table,
        rows = rows.len(),
        bytes_written,
        duration_ms = stage_start.elapsed().as_millis() as u64,
        "table written"
    );

    report.record_table(TableReport {
        table: table.to_string(),
        rows_requested,
        rows_generated: rows.len() as u64,
        bytes_written,
    });
    Ok(())
}
