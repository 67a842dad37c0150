use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Branch, Owner, RepositoryName};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitHistoryVariable {
    pub owner: Owner,
    pub repo: RepositoryName,
    pub ref_name: Branch,
    pub since_date: DateTime<Utc>,
    pub after_cursor: Option<String>,
}

/// Commit-history query over a named ref, one page of up to 100 commits.
///
/// Selects both the free-text author name and the linked account login so
/// that either author-resolution strategy can be applied to the result.
pub fn commit_history_query() -> String {
    r#"
        query($owner: String!, $repo: String!, $ref_name: String!, $since_date: GitTimestamp!, $after_cursor: String) {
            repository(owner: $owner, name: $repo) {
                ref(qualifiedName: $ref_name) {
                    target {
                        ... on Commit {
                            history(since: $since_date, first: 100, after: $after_cursor) {
                                pageInfo {
                                    hasNextPage
                                    endCursor
                                }
                                edges {
                                    node {
                                        author {
                                            name
                                            user {
                                                login
                                            }
                                        }
                                        committedDate
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    "#
    .to_string()
}
