use serde::{Deserialize, Serialize};

/// Subset of the REST repository resource used for repository statistics.
///
/// The contributors URL is taken verbatim from this response and fetched as
/// a second request; it is not reconstructed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryResource {
    pub pushed_at: Option<String>,
    pub stargazers_count: Option<u64>,
    pub contributors_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorEntry {
    pub login: String,
}
