//! Output rendering for the CLI surface
//!
//! Commit logs keep the line shape of the original demonstration output
//! (`User: ..., Date: ...`); listings and stats render as markdown sections.

use crate::types::{CommitRecord, Owner, OwnerKind, RepositoryId, RepositoryName, RepositoryStats};

/// One line per commit record, in fetch order.
pub fn commit_log_lines(records: &[CommitRecord]) -> String {
    let mut content = String::new();
    for record in records {
        content.push_str(&format!(
            "User: {}, Date: {}\n",
            record.author, record.committed_at
        ));
    }
    content
}

/// One line per repository name, in fetch order.
pub fn repository_list_lines(names: &[RepositoryName]) -> String {
    let mut content = String::new();
    for name in names {
        content.push_str(&format!("{}\n", name));
    }
    content
}

/// Markdown body for a repository statistics record.
pub fn repository_stats_markdown(repository_id: &RepositoryId, stats: &RepositoryStats) -> String {
    let mut content = String::new();

    content.push_str("## Repository\n");
    content.push_str(&format!("{}\n", repository_id.url()));
    content.push('\n');

    content.push_str("## Stars\n");
    content.push_str(&format!("{}\n", stats.stars));
    content.push('\n');

    content.push_str("## Last Push\n");
    match stats.last_pushed_at {
        Some(instant) => content.push_str(&format!("{}\n", instant)),
        None => content.push_str("unknown\n"),
    }

    if !stats.contributors.is_empty() {
        content.push_str("\n## Contributors\n");
        for contributor in &stats.contributors {
            content.push_str(&format!("- {}\n", contributor));
        }
    }

    content
}

/// Owner-type line: the resolved kind, or a profile-URL message when the
/// owner did not resolve.
pub fn owner_type_line(owner: &Owner, kind: Option<&OwnerKind>) -> String {
    match kind {
        Some(kind) => format!("{}\n", kind),
        None => format!(
            "Could not find valid owner at {}\n",
            owner.profile_url()
        ),
    }
}
