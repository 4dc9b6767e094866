use crate::domain::model::{FollowStatus, UserRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The four remote operations the sync needs from the social platform.
#[async_trait]
pub trait SocialGraph: Send + Sync {
    async fn followers(&self) -> Result<Vec<UserRecord>>;
    async fn following(&self) -> Result<Vec<UserRecord>>;
    async fn follow(&self, login: &str) -> Result<FollowStatus>;
    async fn unfollow(&self, login: &str) -> Result<()>;
}
