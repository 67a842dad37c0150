use serde::{Deserialize, Serialize};

use crate::types::Owner;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerTypeVariable {
    pub owner: Owner,
}

/// Owner-type lookup, a single unpaginated request returning the GraphQL
/// interface kind of the login ("User" or "Organization").
pub fn owner_type_query() -> String {
    r#"
        query($owner: String!) {
            repositoryOwner(login: $owner) {
                __typename
            }
        }
    "#
    .to_string()
}
