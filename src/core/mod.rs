pub mod assignment;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod roster;
pub mod seed;

pub use crate::domain::model::{Roster, SlotAssignment, Student};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
