pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{
    assignment::assign_students, engine::AssignmentEngine, pipeline::AssignmentPipeline,
};
pub use domain::model::{Roster, RunOutcome, SlotAssignment, Student};
pub use utils::error::{AssignerError, Result};
