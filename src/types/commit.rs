//! Commit records and author resolution
//!
//! A commit record is the flat shape handed to analysis: who committed,
//! when, and in which repository. Records are created fresh per fetch call
//! and never persisted.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::repository::{Branch, RepositoryName};
use super::user::User;
use crate::github::graphql::graphql_types::commit::{CommitAuthor, CommitEdge};

/// Author label used when no author information can be resolved
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Ref whose history is fetched when the caller does not name one
pub fn default_ref_name() -> Branch {
    Branch::new("main")
}

/// History cutoff applied when the caller does not supply one
pub fn default_since_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
        .single()
        .expect("Failed to construct default since date")
}

/// Strategy for turning a commit's author metadata into an author label.
///
/// `LinkedLogin` resolves through the linked platform account and labels
/// commits without one as "Unknown". `CommitName` keeps the free-text
/// author name from the commit metadata, so unlinked contributors retain
/// their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorResolution {
    #[default]
    LinkedLogin,
    CommitName,
}

impl AuthorResolution {
    pub fn resolve(&self, author: Option<&CommitAuthor>) -> User {
        let resolved = match self {
            Self::LinkedLogin => author
                .and_then(|author| author.user.as_ref())
                .map(|user| user.login.clone()),
            Self::CommitName => author.and_then(|author| author.name.clone()),
        };
        User::new(resolved.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()))
    }
}

/// One normalized commit: author label, committed instant and the
/// repository the commit belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author: User,
    pub committed_at: DateTime<Utc>,
    pub repository_name: RepositoryName,
}

impl CommitRecord {
    pub fn from_edge(
        edge: CommitEdge,
        repository_name: &RepositoryName,
        resolution: AuthorResolution,
    ) -> Result<Self> {
        let committed_at = DateTime::parse_from_rfc3339(&edge.node.committed_date)
            .context("Failed to parse committedDate timestamp")?
            .with_timezone(&Utc);

        Ok(Self {
            author: resolution.resolve(edge.node.author.as_ref()),
            committed_at,
            repository_name: repository_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::graphql::graphql_types::commit::{AuthorUser, CommitNode};

    fn edge(author: Option<CommitAuthor>, committed_date: &str) -> CommitEdge {
        CommitEdge {
            node: CommitNode {
                author,
                committed_date: committed_date.to_string(),
            },
        }
    }

    fn linked_author(name: &str, login: &str) -> CommitAuthor {
        CommitAuthor {
            name: Some(name.to_string()),
            user: Some(AuthorUser {
                login: login.to_string(),
            }),
        }
    }

    fn unlinked_author(name: &str) -> CommitAuthor {
        CommitAuthor {
            name: Some(name.to_string()),
            user: None,
        }
    }

    #[test]
    fn timestamp_normalizes_to_utc_instant() {
        let record = CommitRecord::from_edge(
            edge(Some(linked_author("Alice", "alice")), "2023-05-01T12:00:00Z"),
            &RepositoryName::from("repo"),
            AuthorResolution::LinkedLogin,
        )
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).single().unwrap();
        assert_eq!(record.committed_at, expected);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let result = CommitRecord::from_edge(
            edge(None, "yesterday"),
            &RepositoryName::from("repo"),
            AuthorResolution::LinkedLogin,
        );
        assert!(result.is_err());
    }

    #[test]
    fn linked_login_resolves_through_account() {
        let author = linked_author("Alice Smith", "asmith");
        assert_eq!(
            AuthorResolution::LinkedLogin.resolve(Some(&author)),
            "asmith"
        );
    }

    #[test]
    fn linked_login_falls_back_to_unknown() {
        let author = unlinked_author("Drive-by Contributor");
        assert_eq!(
            AuthorResolution::LinkedLogin.resolve(Some(&author)),
            UNKNOWN_AUTHOR
        );
        assert_eq!(AuthorResolution::LinkedLogin.resolve(None), UNKNOWN_AUTHOR);
    }

    #[test]
    fn commit_name_keeps_unlinked_contributor_names() {
        let author = unlinked_author("Drive-by Contributor");
        assert_eq!(
            AuthorResolution::CommitName.resolve(Some(&author)),
            "Drive-by Contributor"
        );
    }

    #[test]
    fn commit_name_without_author_block_is_unknown() {
        assert_eq!(AuthorResolution::CommitName.resolve(None), UNKNOWN_AUTHOR);
    }
}
