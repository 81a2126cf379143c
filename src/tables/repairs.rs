use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pick;
use crate::tables::rentals::Rental;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    MotorFailure,
    SealLeak,
    PowerIssue,
    Other,
}

const FAILURE_TYPES: [FailureType; 4] = [
    FailureType::MotorFailure,
    FailureType::SealLeak,
    FailureType::PowerIssue,
    FailureType::Other,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStatus {
    InProgress,
    Completed,
    Warranty,
}

const STATUSES: [RepairStatus; 3] = [
    RepairStatus::InProgress,
    RepairStatus::Completed,
    RepairStatus::Warranty,
];

const WARRANTY_CLAIM_PROBABILITY: f64 = 0.3;

/// One row of `bronze_repairs_sample.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repair {
    pub repair_id: String,
    pub tool_id: String,
    pub rental_id: String,
    pub repair_date: NaiveDate,
    pub failure_type: FailureType,
    pub repair_cost_czk: f64,
    pub repair_hours: f64,
    pub replacement_parts_cost_czk: f64,
    pub repair_status: RepairStatus,
    pub warranty_claim: bool,
}

/// Synthesize repair events against existing rentals.
///
/// Rentals are sampled with replacement and both foreign keys are copied from
/// the sampled row. Nothing ties `warranty_claim` to `repair_status`.
pub fn generate_repairs(rng: &mut impl Rng, rentals: &[Rental], count: u64) -> Vec<Repair> {
    let mut rows = Vec::with_capacity(count as usize);
    for index in 0..count {
        let rental = &rentals[rng.random_range(0..rentals.len())];
        rows.push(Repair {
            repair_id: format!("REP-{index:05}"),
            tool_id: rental.tool_id.clone(),
            rental_id: rental.rental_id.clone(),
            repair_date: rental.return_date + Duration::days(rng.random_range(0..20)),
            failure_type: pick(rng, &FAILURE_TYPES),
            repair_cost_czk: rng.random_range(500..6000) as f64,
            repair_hours: rng.random_range(1..8) as f64,
            replacement_parts_cost_czk: rng.random_range(0..3000) as f64,
            repair_status: pick(rng, &STATUSES),
            warranty_claim: rng.random_bool(WARRANTY_CLAIM_PROBABILITY),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::tables::rentals::generate_rentals;
    use crate::tables::tools::generate_tools;

    fn fixtures() -> (ChaCha8Rng, Vec<Rental>) {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let base_date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let tools = generate_tools(&mut rng, base_date, 50);
        let rentals = generate_rentals(&mut rng, base_date, &tools, 500);
        (rng, rentals)
    }

    #[test]
    fn foreign_keys_are_copied_from_the_sampled_rental() {
        let (mut rng, rentals) = fixtures();
        for repair in generate_repairs(&mut rng, &rentals, 200) {
            let rental = rentals
                .iter()
                .find(|rental| rental.rental_id == repair.rental_id)
                .expect("rental exists");
            assert_eq!(rental.tool_id, repair.tool_id);
        }
    }

    #[test]
    fn repair_dates_follow_the_return_date() {
        let (mut rng, rentals) = fixtures();
        for repair in generate_repairs(&mut rng, &rentals, 200) {
            let rental = rentals
                .iter()
                .find(|rental| rental.rental_id == repair.rental_id)
                .expect("rental exists");
            let lag = (repair.repair_date - rental.return_date).num_days();
            assert!((0..20).contains(&lag), "repair lag {lag}");
        }
    }

    #[test]
    fn costs_stay_in_range() {
        let (mut rng, rentals) = fixtures();
        for repair in generate_repairs(&mut rng, &rentals, 200) {
            assert!((500.0..6000.0).contains(&repair.repair_cost_czk));
            assert!((1.0..8.0).contains(&repair.repair_hours));
            assert!((0.0..3000.0).contains(&repair.replacement_parts_cost_czk));
        }
    }
}
