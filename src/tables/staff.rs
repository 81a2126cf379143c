use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::{LOCATIONS, Location, pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Rental,
    Service,
    Sales,
}

impl Department {
    fn tasks(self) -> &'static str {
        match self {
            Department::Rental | Department::Service => "customer_service,maintenance",
            Department::Sales => "sales",
        }
    }
}

const EMPLOYEE_COUNT: u32 = 24;
// Clock times are opaque labels in the bronze layer; "00:00" doubles as the
// absence sentinel.
const ABSENT_TIME: &str = "00:00";
const CLOCK_IN: &str = "08:00";
const CLOCK_OUT_TIMES: [&str; 3] = ["16:30", "17:00", "18:00"];
const DEPARTMENT_WEIGHTS: [(Department, f64); 3] = [
    (Department::Rental, 0.4),
    (Department::Service, 0.4),
    (Department::Sales, 0.2),
];
const OVERTIME_WEIGHTS: [(f64, f64); 3] = [(0.0, 0.7), (1.0, 0.2), (2.0, 0.1)];
const VACATION_PROBABILITY: f64 = 0.05;
const SICK_LEAVE_PROBABILITY: f64 = 0.03;

/// One row of `bronze_staff_sample.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub location: Location,
    pub department: Department,
    pub time_in: String,
    pub time_out: String,
    pub overtime_hours: f64,
    pub is_vacation: bool,
    pub is_sick_leave: bool,
    pub tasks: String,
}

/// Synthesize the dense attendance grid: one record per day per employee over
/// the last `days` days.
///
/// Vacation and sick-leave flags are drawn independently, so both can be set
/// on the same record; either one zeroes the clock times and overtime.
pub fn generate_staff(rng: &mut impl Rng, base_date: NaiveDate, days: u64) -> Vec<AttendanceRecord> {
    let mut rows = Vec::with_capacity((days * EMPLOYEE_COUNT as u64) as usize);
    for day_offset in 0..days {
        let date = base_date - Duration::days(day_offset as i64);
        for employee in 1..=EMPLOYEE_COUNT {
            let location = pick(rng, &LOCATIONS);
            let department = DEPARTMENT_WEIGHTS
                .choose_weighted(rng, |(_, weight)| *weight)
                .map(|(department, _)| *department)
                .unwrap_or(Department::Rental);
            let is_vacation = rng.random_bool(VACATION_PROBABILITY);
            let is_sick_leave = rng.random_bool(SICK_LEAVE_PROBABILITY);
            let (time_in, time_out, overtime_hours) = if is_vacation || is_sick_leave {
                (ABSENT_TIME, ABSENT_TIME, 0.0)
            } else {
                let time_out = pick(rng, &CLOCK_OUT_TIMES);
                let overtime = OVERTIME_WEIGHTS
                    .choose_weighted(rng, |(_, weight)| *weight)
                    .map(|(hours, _)| *hours)
                    .unwrap_or(0.0);
                (CLOCK_IN, time_out, overtime)
            };
            rows.push(AttendanceRecord {
                employee_id: format!("EMP{employee:03}"),
                date,
                location,
                department,
                time_in: time_in.to_string(),
                time_out: time_out.to_string(),
                overtime_hours,
                is_vacation,
                is_sick_leave,
                tasks: department.tasks().to_string(),
            });
        }
    }
    rows
}
