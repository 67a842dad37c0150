//! Repository identification types and URL parsing
//!
//! Repository-specific URL parsing logic lives here with the identifier
//! types themselves, so callers can hand the CLI anything from a bare
//! `owner/repo` pair to a full GitHub URL.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Git ref name, e.g. a branch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch(pub String);

impl Branch {
    pub fn new<T: Into<String>>(branch: T) -> Self {
        Self(branch.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

static HTTPS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?github\.com/([^/]+)/([^/]+?)(?:\.git)?(?:/.*)?/?$")
        .expect("Failed to compile HTTPS regex")
});

static SSH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"git@github\.com:([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("Failed to compile SSH regex")
});

static SIMPLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^/]+)/([^/]+)$").expect("Failed to compile simple regex"));

/// Owner (user or organization) name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Owner(pub String);

impl Owner {
    pub fn new(owner: String) -> Self {
        Self(owner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The profile URL of this owner on the platform
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.0)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Repository name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn new(repo_name: String) -> Self {
        Self(repo_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RepositoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed repository identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryId {
    pub owner: Owner,
    pub repository_name: RepositoryName,
}

impl RepositoryId {
    /// Parse a repository identifier from the accepted input formats:
    /// - "https://github.com/owner/repo" - GitHub URL
    /// - "git@github.com:owner/repo.git" - SSH format
    /// - "owner/repo" - bare pair
    pub fn parse(input: &str) -> Result<Self, String> {
        let input_str = input.trim_end_matches('/');

        if let Some(captures) = HTTPS_REGEX.captures(input_str) {
            let owner = captures.get(1).unwrap().as_str().to_string();
            let repo = captures.get(2).unwrap().as_str().to_string();
            return Ok(Self::new(owner, repo));
        }

        if let Some(captures) = SSH_REGEX.captures(input_str) {
            let owner = captures.get(1).unwrap().as_str().to_string();
            let repo = captures.get(2).unwrap().as_str().to_string();
            return Ok(Self::new(owner, repo));
        }

        if let Some(captures) = SIMPLE_REGEX.captures(input_str) {
            let owner = captures.get(1).unwrap().as_str().to_string();
            let repo = captures.get(2).unwrap().as_str().to_string();
            return Ok(Self::new(owner, repo));
        }

        Err(format!("Invalid repository format: {}", input_str))
    }

    pub fn new<T1: Into<String>, T2: Into<String>>(owner: T1, name: T2) -> Self {
        Self {
            owner: Owner::new(owner.into()),
            repository_name: RepositoryName::new(name.into()),
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn repo_name(&self) -> &RepositoryName {
        &self.repository_name
    }

    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repository_name)
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// GraphQL interface kind of a repository owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerKind {
    User,
    Organization,
    Other(String),
}

impl OwnerKind {
    pub fn from_typename(typename: &str) -> Self {
        match typename {
            "User" => Self::User,
            "Organization" => Self::Organization,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "User",
            Self::Organization => "Organization",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
