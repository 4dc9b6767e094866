// Adapters layer: concrete implementations for external systems.

pub mod github;

pub use github::GithubClient;
