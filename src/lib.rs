//! Fixture generator for a tool rental dataset.
//!
//! Produces four "bronze" CSV tables (tools, rentals, repairs, staff
//! attendance) from a single seeded random stream. Generation is strictly
//! sequential: each dependent stage samples foreign keys from the CSV its
//! parent stage actually persisted, so every reference resolves by
//! construction.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod tables;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
