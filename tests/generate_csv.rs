use std::fs;
use std::path::{Path, PathBuf};

use bronzegen::engine::{RENTALS_FILE, REPAIRS_FILE, REPORT_FILE, STAFF_FILE, TOOLS_FILE};
use bronzegen::tables::rentals::Rental;
use bronzegen::tables::repairs::Repair;
use bronzegen::tables::staff::AttendanceRecord;
use bronzegen::tables::tools::Tool;
use bronzegen::{GenerateOptions, GenerationEngine};
use chrono::NaiveDate;

fn base_options(out_dir: PathBuf) -> GenerateOptions {
    GenerateOptions {
        out_dir,
        base_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        ..GenerateOptions::default()
    }
}

fn run(label: &str) -> PathBuf {
    let out_dir = temp_out_dir(label);
    let engine = GenerationEngine::new(base_options(out_dir.clone()));
    engine.run().expect("run generation");
    out_dir
}

fn read_rows<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> Vec<T> {
    let mut reader = csv::Reader::from_path(dir.join(file)).expect("open csv");
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .expect("deserialize rows")
}

#[test]
fn generate_is_deterministic() {
    let dir_a = run("determinism_a");
    let dir_b = run("determinism_b");

    for file in [TOOLS_FILE, RENTALS_FILE, REPAIRS_FILE, STAFF_FILE] {
        let contents_a = fs::read_to_string(dir_a.join(file)).expect("read run A");
        let contents_b = fs::read_to_string(dir_b.join(file)).expect("read run B");
        assert_eq!(contents_a, contents_b, "{file} should be deterministic");
    }
}

#[test]
fn generate_respects_row_counts() {
    let dir = run("row_counts");

    assert_eq!(read_rows::<Tool>(&dir, TOOLS_FILE).len(), 50);
    assert_eq!(read_rows::<Rental>(&dir, RENTALS_FILE).len(), 500);
    assert_eq!(read_rows::<Repair>(&dir, REPAIRS_FILE).len(), 200);
    assert_eq!(
        read_rows::<AttendanceRecord>(&dir, STAFF_FILE).len(),
        120 * 24
    );
}

#[test]
fn tool_values_stay_in_range() {
    let dir = run("tool_ranges");

    for tool in read_rows::<Tool>(&dir, TOOLS_FILE) {
        assert!((5000.0..40000.0).contains(&tool.purchase_price_czk));
        assert!((1000.0..30000.0).contains(&tool.current_value_czk));
    }
}

#[test]
fn rental_invariants_hold() {
    let dir = run("rental_invariants");

    for rental in read_rows::<Rental>(&dir, RENTALS_FILE) {
        let days = (rental.return_date - rental.rental_date).num_days();
        assert!((1..=10).contains(&days), "duration {days}");
        if !rental.damage_reported {
            assert_eq!(rental.damage_cost_czk, 0.0);
        }
    }
}

#[test]
fn repair_references_resolve_against_persisted_rentals() {
    let dir = run("repair_references");

    let rentals = read_rows::<Rental>(&dir, RENTALS_FILE);
    for repair in read_rows::<Repair>(&dir, REPAIRS_FILE) {
        assert!(
            rentals
                .iter()
                .any(|rental| rental.rental_id == repair.rental_id
                    && rental.tool_id == repair.tool_id),
            "{} does not match any persisted rental",
            repair.repair_id
        );
    }
}

#[test]
fn absent_staff_have_sentinel_times() {
    let dir = run("staff_sentinel");

    for record in read_rows::<AttendanceRecord>(&dir, STAFF_FILE) {
        if record.is_vacation || record.is_sick_leave {
            assert_eq!(record.time_in, "00:00");
            assert_eq!(record.time_out, "00:00");
            assert_eq!(record.overtime_hours, 0.0);
        }
    }
}

#[test]
fn report_is_written_only_on_request() {
    let silent_dir = run("report_silent");
    assert!(!silent_dir.join(REPORT_FILE).exists());

    let out_dir = temp_out_dir("report_requested");
    let mut options = base_options(out_dir.clone());
    options.write_report = true;

    let result = GenerationEngine::new(options).run().expect("run generation");
    let report_json = fs::read_to_string(out_dir.join(REPORT_FILE)).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&report_json).expect("parse report");

    let tables = report
        .get("tables")
        .and_then(|value| value.as_array())
        .expect("tables array");
    assert_eq!(tables.len(), 4);
    assert_eq!(result.report.tables.len(), 4);
    assert_eq!(
        result.report.tables[3].rows_generated,
        120 * 24,
        "staff grid should be dense"
    );
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("bronzegen_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
