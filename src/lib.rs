pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::github::GithubClient;
pub use config::Credentials;
pub use crate::core::{engine::SyncEngine, mutator::Mutator, reconcile::reconcile};
pub use utils::error::{Result, SyncError};
