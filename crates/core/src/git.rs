//! Branch listing and working tree queries on top of the `git` CLI.
//!
//! Query failures never reach the caller from here: they are logged and
//! treated as "nothing found" or "not dirty".

use std::process::Command;

use itertools::Itertools;
use log::{debug, warn};

use crate::error::Result;
use crate::execution::{execute_command, query_command};

/// Reflog subjects of branch switches contain this marker
const CHECKOUT_MARKER: &str = "checkout:";
/// Porcelain v1 work-tree status code of a modified file
const UNSTAGED_MODIFICATION: u8 = b'M';

/// The version-control operations the branch switcher needs.
pub trait VersionControl {
    /// Name of the checked-out branch (empty when detached).
    fn current_branch(&self) -> Result<String>;

    /// Reflog subjects, most recent first, one per line.
    fn reflog_subjects(&self) -> Result<String>;

    /// Local branch names, one per line.
    fn local_branches(&self) -> Result<String>;

    /// `status --porcelain=v1` output.
    fn status_porcelain(&self) -> Result<String>;

    /// Sets uncommitted changes aside.
    fn stash(&self) -> Result<()>;

    /// Switches to `branch`.
    fn checkout(&self, branch: &str) -> Result<()>;
}

/// [`VersionControl`] backed by the `git` executable in the current directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct Git;

impl Git {
    fn command(args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command.args(args);
        command
    }
}

impl VersionControl for Git {
    fn current_branch(&self) -> Result<String> {
        query_command(Self::command(&["branch", "--show-current"]))
            .map(|branch| branch.trim().to_string())
    }

    fn reflog_subjects(&self) -> Result<String> {
        query_command(Self::command(&["reflog", "show", "--pretty=format:%gs"]))
    }

    fn local_branches(&self) -> Result<String> {
        query_command(Self::command(&["branch", "--format=%(refname:short)"]))
    }

    fn status_porcelain(&self) -> Result<String> {
        query_command(Self::command(&["status", "--porcelain=v1"]))
    }

    fn stash(&self) -> Result<()> {
        execute_command(Self::command(&["stash"]), "stash changes")
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        execute_command(
            Self::command(&["checkout", branch]),
            &format!("checkout branch: {branch}"),
        )
    }
}

/// Branches switched to according to the reflog, most recent first.
///
/// Each branch appears once; `current` is left out and at most `limit` are kept.
#[must_use]
pub fn parse_reflog_checkouts(reflog: &str, current: &str, limit: usize) -> Vec<String> {
    reflog
        .lines()
        .filter(|subject| subject.contains(CHECKOUT_MARKER))
        .filter_map(|subject| subject.split_whitespace().last())
        .filter(|branch| *branch != current)
        .unique()
        .take(limit)
        .map(ToString::to_string)
        .collect()
}

/// Local branch names, leaving out `current`.
#[must_use]
pub fn parse_branch_list(branches: &str, current: &str) -> Vec<String> {
    branches
        .lines()
        .map(str::trim)
        .filter(|branch| !branch.is_empty() && *branch != current)
        .map(ToString::to_string)
        .collect()
}

/// Whether porcelain status output lists a modified, unstaged file.
#[must_use]
pub fn has_unstaged_changes(porcelain: &str) -> bool {
    porcelain
        .lines()
        .any(|line| line.as_bytes().get(1) == Some(&UNSTAGED_MODIFICATION))
}

/// Branches to offer: recently checked out ones, or every other local branch.
///
/// Returns an empty list if the repository cannot be queried.
pub fn recent_branches<V: VersionControl>(vcs: &V, limit: usize) -> Vec<String> {
    let current = match vcs.current_branch() {
        Ok(current) => current,
        Err(e) => {
            warn!("{e}");
            return Vec::new();
        }
    };
    debug!("Current branch: `{current}`");

    match vcs.reflog_subjects() {
        Ok(reflog) => {
            let recent = parse_reflog_checkouts(&reflog, &current, limit);
            if !recent.is_empty() {
                return recent;
            }
            debug!("No checkouts in reflog, falling back to local branches");
        }
        Err(e) => warn!("{e}"),
    }

    match vcs.local_branches() {
        Ok(branches) => parse_branch_list(&branches, &current),
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    }
}

/// Whether the working tree has modified, unstaged files. Unknown counts as clean.
pub fn is_dirty<V: VersionControl>(vcs: &V) -> bool {
    match vcs.status_porcelain() {
        Ok(status) => has_unstaged_changes(&status),
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}
