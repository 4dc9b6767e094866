use crate::domain::model::{
    status_line, BatchReport, FollowStatus, MutationKind, MutationOutcome, MutationResult,
};
use crate::domain::ports::SocialGraph;
use crate::utils::error::SyncError;
use std::collections::BTreeSet;

/// Applies follow/unfollow calls one user at a time, in login order.
///
/// A failed call is recorded and the batch moves on; nothing is retried.
pub struct Mutator<'a, G: SocialGraph + ?Sized> {
    graph: &'a G,
    dry_run: bool,
}

impl<'a, G: SocialGraph + ?Sized> Mutator<'a, G> {
    pub fn new(graph: &'a G, dry_run: bool) -> Self {
        Self { graph, dry_run }
    }

    pub async fn follow_users(&self, logins: &BTreeSet<String>) -> BatchReport {
        let mut report = BatchReport::new(MutationKind::Follow);

        for login in logins {
            let outcome = if self.dry_run {
                MutationOutcome::DryRun
            } else {
                match self.graph.follow(login).await {
                    Ok(FollowStatus::Followed) => MutationOutcome::Followed,
                    Ok(FollowStatus::AlreadyFollowing) => MutationOutcome::AlreadyFollowing,
                    Err(e) => failed(e),
                }
            };
            record(&mut report, login, outcome);
        }

        report
    }

    pub async fn unfollow_users(&self, logins: &BTreeSet<String>) -> BatchReport {
        let mut report = BatchReport::new(MutationKind::Unfollow);

        for login in logins {
            let outcome = if self.dry_run {
                MutationOutcome::DryRun
            } else {
                match self.graph.unfollow(login).await {
                    Ok(()) => MutationOutcome::Unfollowed,
                    Err(e) => failed(e),
                }
            };
            record(&mut report, login, outcome);
        }

        report
    }
}

fn failed(error: SyncError) -> MutationOutcome {
    let status = error.status();
    let message = match error {
        SyncError::ApiError { message, .. } => message,
        other => other.to_string(),
    };
    MutationOutcome::Failed { status, message }
}

fn record(report: &mut BatchReport, login: &str, outcome: MutationOutcome) {
    let result = MutationResult {
        login: login.to_string(),
        outcome,
    };
    let line = status_line(report.kind, &result);

    if result.outcome.is_success() {
        tracing::debug!(login = %result.login, action = %report.kind, "{}", line);
    } else {
        tracing::warn!(login = %result.login, action = %report.kind, "{}", line);
    }
    println!("{}", line);

    report.results.push(result);
}
