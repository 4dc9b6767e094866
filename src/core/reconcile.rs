use crate::domain::model::{ActionPlan, UserRecord};
use std::collections::BTreeSet;

pub fn logins(records: &[UserRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.login.clone()).collect()
}

/// `to_follow = followers - following`, `to_unfollow = following - followers`.
pub fn reconcile(followers: &BTreeSet<String>, following: &BTreeSet<String>) -> ActionPlan {
    ActionPlan {
        to_follow: followers.difference(following).cloned().collect(),
        to_unfollow: following.difference(followers).cloned().collect(),
    }
}
