//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and environment keys.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Remote pushed to when none is configured
pub const DEFAULT_REMOTE: &str = "origin";

/// git subcommands
pub mod commands {
    pub const ADD: &str = "add";
    pub const COMMIT: &str = "commit";
    pub const PUSH: &str = "push";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Stage additions, modifications and deletions
    pub const ALL: &str = "--all";
    /// Commit message
    pub const MESSAGE: &str = "-m";
    /// Allow a commit with no staged changes
    pub const ALLOW_EMPTY: &str = "--allow-empty";
    /// rev-parse: check for a work tree
    pub const IS_INSIDE_WORK_TREE: &str = "--is-inside-work-tree";
    /// rev-parse: short branch name
    pub const ABBREV_REF: &str = "--abbrev-ref";
}

/// Special git values
pub mod special {
    /// Refspec for "the current branch"
    pub const HEAD: &str = "HEAD";
}

/// Environment variables set on the spawned git process only
pub mod env {
    pub const AUTHOR_DATE: &str = "GIT_AUTHOR_DATE";
    pub const COMMITTER_DATE: &str = "GIT_COMMITTER_DATE";
    /// Fail instead of prompting for credentials
    pub const TERMINAL_PROMPT: &str = "GIT_TERMINAL_PROMPT";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
