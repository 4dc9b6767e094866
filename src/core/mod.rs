pub mod engine;
pub mod mutator;
pub mod reconcile;

pub use crate::domain::model::{ActionPlan, BatchReport, MutationOutcome, SyncSummary, UserRecord};
pub use crate::domain::ports::SocialGraph;
pub use crate::utils::error::Result;
