use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pick;
use crate::tables::tools::Tool;

const DAILY_RATES_CZK: [i64; 4] = [400, 600, 800, 1000];
const DAMAGE_PROBABILITY: f64 = 0.15;

/// One row of `bronze_rentals_sample.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: String,
    pub tool_id: String,
    pub customer_id: String,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub daily_rate_czk: i64,
    pub damage_reported: bool,
    pub damage_cost_czk: f64,
    pub customer_rating: i64,
}

/// Synthesize rental events against an existing tool catalog.
///
/// Tools are sampled with replacement, so a popular tool may appear many
/// times and another not at all. Customer ids are synthesized independently;
/// there is no customer table to reference.
pub fn generate_rentals(
    rng: &mut impl Rng,
    base_date: NaiveDate,
    tools: &[Tool],
    count: u64,
) -> Vec<Rental> {
    let mut rows = Vec::with_capacity(count as usize);
    for index in 0..count {
        let tool = &tools[rng.random_range(0..tools.len())];
        let start = base_date - Duration::days(rng.random_range(1..120));
        let duration_days = rng.random_range(1..10);
        let damage = rng.random_bool(DAMAGE_PROBABILITY);
        rows.push(Rental {
            rental_id: format!("RENT-{index:05}"),
            tool_id: tool.tool_id.clone(),
            customer_id: format!("CUST-{:04}", rng.random_range(1..200)),
            rental_date: start,
            return_date: start + Duration::days(duration_days),
            daily_rate_czk: pick(rng, &DAILY_RATES_CZK),
            damage_reported: damage,
            damage_cost_czk: if damage {
                rng.random_range(0..3000) as f64
            } else {
                0.0
            },
            customer_rating: rng.random_range(2..6),
        });
    }
    rows
}
