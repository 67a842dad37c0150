use serde::{Deserialize, Serialize};

/// Envelope of the owner-type query. A null `repositoryOwner` means the
/// login resolved to neither a user nor an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerTypeResponse {
    #[serde(rename = "repositoryOwner")]
    pub repository_owner: Option<OwnerTypeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerTypeNode {
    #[serde(rename = "__typename")]
    pub typename: String,
}
