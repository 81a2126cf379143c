use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written.
    pub out_dir: PathBuf,
    /// Seed for the single random stream driving all four tables.
    pub seed: u64,
    /// Reference date treated as "today"; injectable for reproducible runs.
    pub base_date: NaiveDate,
    /// Number of tool records.
    pub tools: u64,
    /// Number of rental records.
    pub rentals: u64,
    /// Number of repair records.
    pub repairs: u64,
    /// Days of attendance history (one record per day per employee).
    pub staff_days: u64,
    /// Write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("synthetic_data"),
            seed: 42,
            base_date: chrono::Utc::now().date_naive(),
            tools: 50,
            rentals: 500,
            repairs: 200,
            staff_days: 120,
            write_report: false,
        }
    }
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub base_date: NaiveDate,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, base_date: NaiveDate) -> Self {
        Self {
            run_id,
            seed,
            base_date,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written += table.bytes_written;
        self.tables.push(table);
    }
}
