//! Repository statistics record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Statistics of a single repository, combined from the REST repository
/// resource and its contributors sub-resource. Created per call, not cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStats {
    /// Contributor logins in the order the API lists them; empty when the
    /// contributors request fails
    pub contributors: Vec<User>,
    pub last_pushed_at: Option<DateTime<Utc>>,
    pub stars: u64,
}
