use crate::utils::error::{Result, SyncError};
use std::fmt;

pub const TOKEN_ENV: &str = "GH_TOKEN";

#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(SyncError::config(format!("{} is empty", TOKEN_ENV)));
        }
        Ok(Self { token })
    }

    /// 從任意查詢函式取得 token，`main` 傳入 `std::env::var`，測試則傳入固定值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(TOKEN_ENV) {
            Some(token) => Self::new(token),
            None => Err(SyncError::config(format!("{} is not set", TOKEN_ENV))),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}
