use crate::core::mutator::Mutator;
use crate::core::reconcile::{logins, reconcile};
use crate::domain::model::SyncSummary;
use crate::domain::ports::SocialGraph;
use crate::utils::error::Result;
use tracing::Instrument;

pub struct SyncEngine<G: SocialGraph> {
    graph: G,
    dry_run: bool,
}

impl<G: SocialGraph> SyncEngine<G> {
    pub fn new(graph: G, dry_run: bool) -> Self {
        Self { graph, dry_run }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Fetch both lists, reconcile, then follow and unfollow.
    ///
    /// A failed list fetch aborts before any mutation is attempted.
    pub async fn run(&self) -> Result<SyncSummary> {
        let span = tracing::info_span!("sync", dry_run = self.dry_run);
        self.run_phases().instrument(span).await
    }

    async fn run_phases(&self) -> Result<SyncSummary> {
        if self.dry_run {
            tracing::info!("Dry-run mode: no follow/unfollow calls will be made");
        }

        println!("🔄 Fetching followers...");
        let followers = logins(&self.graph.followers().await?);
        tracing::info!("Fetched {} followers", followers.len());

        println!("🔄 Fetching following...");
        let following = logins(&self.graph.following().await?);
        tracing::info!("Fetched {} following", following.len());

        let plan = reconcile(&followers, &following);
        tracing::info!(
            "Plan: {} to follow, {} to unfollow",
            plan.to_follow.len(),
            plan.to_unfollow.len()
        );
        if plan.is_empty() {
            tracing::info!("Following list already matches followers");
        }

        let mutator = Mutator::new(&self.graph, self.dry_run);
        let follow = mutator.follow_users(&plan.to_follow).await;
        let unfollow = mutator.unfollow_users(&plan.to_unfollow).await;

        Ok(SyncSummary {
            followers: followers.len(),
            following: following.len(),
            follow,
            unfollow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FollowStatus, MutationOutcome, UserRecord};
    use crate::utils::error::SyncError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct FakeGraph {
        followers: Vec<&'static str>,
        following: Vec<&'static str>,
        followers_fail: bool,
        mutations: Arc<Mutex<Vec<String>>>,
    }

    impl FakeGraph {
        fn new(followers: Vec<&'static str>, following: Vec<&'static str>) -> Self {
            Self {
                followers,
                following,
                followers_fail: false,
                mutations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn mutations(&self) -> Vec<String> {
            self.mutations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SocialGraph for FakeGraph {
        async fn followers(&self) -> crate::utils::error::Result<Vec<UserRecord>> {
            if self.followers_fail {
                return Err(SyncError::ApiError {
                    method: "GET".to_string(),
                    url: "/user/followers".to_string(),
                    status: 404,
                    message: "Not Found".to_string(),
                });
            }
            Ok(self.followers.iter().map(|l| UserRecord::new(*l)).collect())
        }

        async fn following(&self) -> crate::utils::error::Result<Vec<UserRecord>> {
            Ok(self.following.iter().map(|l| UserRecord::new(*l)).collect())
        }

        async fn follow(&self, login: &str) -> crate::utils::error::Result<FollowStatus> {
            self.mutations.lock().unwrap().push(format!("follow {}", login));
            Ok(FollowStatus::Followed)
        }

        async fn unfollow(&self, login: &str) -> crate::utils::error::Result<()> {
            self.mutations.lock().unwrap().push(format!("unfollow {}", login));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_follows_and_unfollows() {
        let graph = FakeGraph::new(
            vec!["follower1", "follower2", "mutual_friend"],
            vec!["mutual_friend", "not_following_back"],
        );
        let engine = SyncEngine::new(graph, false);

        let summary = engine.run().await.unwrap();

        assert_eq!(summary.followers, 3);
        assert_eq!(summary.following, 2);
        assert_eq!(summary.follow.logins(), vec!["follower1", "follower2"]);
        assert_eq!(summary.unfollow.logins(), vec!["not_following_back"]);
        assert_eq!(
            engine.graph().mutations(),
            vec![
                "follow follower1",
                "follow follower2",
                "unfollow not_following_back"
            ]
        );
    }

    #[tokio::test]
    async fn test_dry_run_makes_no_mutations() {
        let graph = FakeGraph::new(vec!["follower1"], vec!["following1"]);
        let engine = SyncEngine::new(graph, true);

        let summary = engine.run().await.unwrap();

        assert!(engine.graph().mutations().is_empty());
        assert_eq!(summary.follow.results[0].outcome, MutationOutcome::DryRun);
        assert_eq!(summary.unfollow.results[0].outcome, MutationOutcome::DryRun);
    }

    #[tokio::test]
    async fn test_fetch_failure_halts_run() {
        let mut graph = FakeGraph::new(vec!["a"], vec!["b"]);
        graph.followers_fail = true;
        let engine = SyncEngine::new(graph, false);

        let err = engine.run().await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(engine.graph().mutations().is_empty());
    }

    #[tokio::test]
    async fn test_empty_lists() {
        let engine = SyncEngine::new(FakeGraph::new(vec![], vec![]), false);

        let summary = engine.run().await.unwrap();

        assert!(summary.follow.results.is_empty());
        assert!(summary.unfollow.results.is_empty());
        assert_eq!(summary.failed(), 0);
    }
}
