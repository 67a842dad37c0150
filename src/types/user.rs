//! User identification types
//!
//! Covers both resolved platform accounts (contributor logins) and the
//! author labels attached to commit records, which may be free-text names
//! when no account is linked.

use serde::{Deserialize, Serialize};

/// User identifier wrapper for GitHub logins and commit author labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User(String);

impl User {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for User {
    fn from(s: &str) -> Self {
        User::new(s.to_string())
    }
}

impl From<String> for User {
    fn from(s: String) -> Self {
        User::new(s)
    }
}

impl PartialEq<str> for User {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for User {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
