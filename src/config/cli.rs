use crate::adapters::github::DEFAULT_API_BASE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "follow-sync")]
#[command(about = "Follow your followers back and unfollow those who stopped following you")]
pub struct CliConfig {
    #[arg(long, help = "Simulate actions without changing anything")]
    pub dry_run: bool,

    #[arg(long, default_value = DEFAULT_API_BASE, help = "Base URL of the GitHub REST API")]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["follow-sync"]);
        assert!(!config.dry_run);
        assert!(!config.verbose);
        assert_eq!(config.api_base, "https://api.github.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dry_run_flag() {
        let config = CliConfig::parse_from(["follow-sync", "--dry-run"]);
        assert!(config.dry_run);
    }

    #[test]
    fn test_invalid_api_base_fails_validation() {
        let config = CliConfig::parse_from(["follow-sync", "--api-base", "ftp://example.com"]);
        assert!(config.validate().is_err());
    }
}
