use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{LOCATIONS, Location, pick};

/// Tool catalog categories; each maps to its own set of model names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    PressureWasher,
    Drill,
    Grinder,
    Saw,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::PressureWasher,
        ToolCategory::Drill,
        ToolCategory::Grinder,
        ToolCategory::Saw,
    ];

    pub fn names(self) -> &'static [&'static str] {
        match self {
            ToolCategory::PressureWasher => &["Karcher K5", "Karcher K7"],
            ToolCategory::Drill => &["Bosch Pro Drill", "Makita Hammer Drill"],
            ToolCategory::Grinder => &["Metabo Angle Grinder", "Bosch Grinder"],
            ToolCategory::Saw => &["Makita Circular Saw", "DeWalt Jigsaw"],
        }
    }

    /// First three letters of the category name, uppercased.
    pub fn id_prefix(self) -> &'static str {
        match self {
            ToolCategory::PressureWasher => "PRE",
            ToolCategory::Drill => "DRI",
            ToolCategory::Grinder => "GRI",
            ToolCategory::Saw => "SAW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Available,
    Rented,
    Maintenance,
}

const STATUSES: [ToolStatus; 3] = [
    ToolStatus::Available,
    ToolStatus::Rented,
    ToolStatus::Maintenance,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceContract {
    Yes,
    No,
}

const CONTRACTS: [MaintenanceContract; 2] = [MaintenanceContract::Yes, MaintenanceContract::No];

/// One row of `bronze_tools_sample.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub tool_id: String,
    pub tool_category: ToolCategory,
    pub tool_name: String,
    pub purchase_date: NaiveDate,
    pub purchase_price_czk: f64,
    pub current_value_czk: f64,
    pub location: Location,
    pub status: ToolStatus,
    pub maintenance_contract: MaintenanceContract,
}

/// Synthesize the tool catalog.
///
/// Prices are integer-valued but stored as floats, matching the bronze
/// layer's loose typing.
pub fn generate_tools(rng: &mut impl Rng, base_date: NaiveDate, count: u64) -> Vec<Tool> {
    let mut rows = Vec::with_capacity(count as usize);
    for index in 0..count {
        let category = pick(rng, &ToolCategory::ALL);
        let name = pick(rng, category.names());
        rows.push(Tool {
            tool_id: format!("{}_{index:03}", category.id_prefix()),
            tool_category: category,
            tool_name: name.to_string(),
            purchase_date: base_date - Duration::days(rng.random_range(200..2000)),
            purchase_price_czk: rng.random_range(5000..40000) as f64,
            current_value_czk: rng.random_range(1000..30000) as f64,
            location: pick(rng, &LOCATIONS),
            status: pick(rng, &STATUSES),
            maintenance_contract: pick(rng, &CONTRACTS),
        });
    }
    rows
}
