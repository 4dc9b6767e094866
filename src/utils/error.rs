use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{method} {url} returned {status}: {message}")]
    ApiError {
        method: String,
        url: String,
        status: u16,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Remote,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP 狀態碼（僅限遠端回應的錯誤）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ApiError { .. } => ErrorCategory::Remote,
            Self::SerializationError(_) | Self::UrlError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Critical
            }
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::ApiError { .. } | Self::SerializationError(_) | Self::UrlError(_) => {
                ErrorSeverity::High
            }
        }
    }

    /// 行程結束碼：網路或 5xx 為 2，其他遠端錯誤為 1，設定錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ConfigError { .. } => {
                "Export GH_TOKEN with a personal access token that has the user:follow scope"
                    .to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for '{}'", field)
            }
            Self::HttpError(_) => "Check network connectivity and try again".to_string(),
            Self::ApiError { status: 401, .. } => {
                "The token was rejected; generate a new one".to_string()
            }
            Self::ApiError { status: 403, .. } => {
                "The token lacks the user:follow scope or the rate limit was hit".to_string()
            }
            Self::ApiError { status: 404, .. } => {
                "Verify the API base URL points at a GitHub-compatible API".to_string()
            }
            Self::ApiError { .. } => "Retry later; the API may be unavailable".to_string(),
            Self::SerializationError(_) | Self::UrlError(_) => {
                "The API returned an unexpected payload; verify the API base URL".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            Self::HttpError(e) => format!("Could not reach the API: {}", e),
            Self::ApiError {
                method,
                url,
                status,
                ..
            } => format!("{} {} failed with status {}", method, url, status),
            Self::SerializationError(e) => format!("Could not decode the API response: {}", e),
            Self::UrlError(e) => format!("The API returned an unusable link: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> SyncError {
        SyncError::ApiError {
            method: "GET".to_string(),
            url: "https://api.github.com/user/followers".to_string(),
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_missing_token_is_critical_config_error() {
        let err = SyncError::config("GH_TOKEN is not set");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Configuration error: GH_TOKEN is not set");
        assert!(err.recovery_suggestion().contains("GH_TOKEN"));
    }

    #[test]
    fn test_api_error_severity_by_status() {
        assert_eq!(api_error(404).severity(), ErrorSeverity::High);
        assert_eq!(api_error(502).severity(), ErrorSeverity::Medium);
        assert_eq!(api_error(404).category(), ErrorCategory::Remote);
        assert_eq!(api_error(403).status(), Some(403));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SyncError::config("GH_TOKEN is not set").exit_code(), 3);
        assert_eq!(api_error(404).exit_code(), 1);
        assert_eq!(api_error(503).exit_code(), 2);

        let bad_link = url::Url::parse("not a url").unwrap_err();
        assert_eq!(SyncError::from(bad_link).exit_code(), 1);
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let msg = api_error(404).to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("boom"));
        assert!(msg.starts_with("GET "));
    }
}
