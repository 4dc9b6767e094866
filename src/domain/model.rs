use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One entry of a followers/following listing. Only `login` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl UserRecord {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            id: None,
            html_url: None,
        }
    }
}

/// 比對結果：兩個集合依建構方式不會重疊
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    pub to_follow: BTreeSet<String>,
    pub to_unfollow: BTreeSet<String>,
}

impl ActionPlan {
    pub fn is_empty(&self) -> bool {
        self.to_follow.is_empty() && self.to_unfollow.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowStatus {
    Followed,
    AlreadyFollowing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Followed,
    AlreadyFollowing,
    Unfollowed,
    DryRun,
    Failed {
        status: Option<u16>,
        message: String,
    },
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Follow,
    Unfollow,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Follow => write!(f, "follow"),
            Self::Unfollow => write!(f, "unfollow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    pub login: String,
    pub outcome: MutationOutcome,
}

/// Status line printed for a single processed user.
pub fn status_line(kind: MutationKind, result: &MutationResult) -> String {
    let login = &result.login;
    match (&result.outcome, kind) {
        (MutationOutcome::DryRun, MutationKind::Follow) => {
            format!("[DRY-RUN] Would follow: {}", login)
        }
        (MutationOutcome::DryRun, MutationKind::Unfollow) => {
            format!("[DRY-RUN] Would unfollow: {}", login)
        }
        (MutationOutcome::Followed, _) => format!("✅ Followed: {}", login),
        (MutationOutcome::AlreadyFollowing, _) => format!("✅ Already following: {}", login),
        (MutationOutcome::Unfollowed, _) => format!("🔁 Unfollowed: {}", login),
        (MutationOutcome::Failed { status, message }, MutationKind::Follow) => format!(
            "❌ Failed to follow {}: {} - {}",
            login,
            display_status(*status),
            message
        ),
        (MutationOutcome::Failed { status, message }, MutationKind::Unfollow) => format!(
            "⚠️ Failed to unfollow {}: {} - {}",
            login,
            display_status(*status),
            message
        ),
    }
}

fn display_status(status: Option<u16>) -> String {
    status.map_or_else(|| "n/a".to_string(), |s| s.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub kind: MutationKind,
    pub results: Vec<MutationResult>,
}

impl BatchReport {
    pub fn new(kind: MutationKind) -> Self {
        Self {
            kind,
            results: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn logins(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.login.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub followers: usize,
    pub following: usize,
    pub follow: BatchReport,
    pub unfollow: BatchReport,
}

impl SyncSummary {
    pub fn failed(&self) -> usize {
        self.follow.failed() + self.unfollow.failed()
    }
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "followers: {}, following: {}, followed: {}/{}, unfollowed: {}/{}",
            self.followers,
            self.following,
            self.follow.succeeded(),
            self.follow.results.len(),
            self.unfollow.succeeded(),
            self.unfollow.results.len()
        )
    }
}
