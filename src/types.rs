/// Core domain types for shortlink scanning: payloads, context, matches.
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The issue-reference payload attached to a styled span and handed to a
/// navigation layer. Purely syntactic: nothing here guarantees the
/// referenced item actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Issue or pull request number.
    pub number: u64,
    /// Account that owns the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl IssueRef {
    /// The canonical `owner/repo#number` form.
    pub fn path(&self) -> String {
        return format!("{}/{}#{}", self.owner, self.repo, self.number);
    }
}

/// The repository a piece of text belongs to. Bare references such as
/// `#123` resolve their owner and repo from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    owner: String,
    repo: String,
}

impl RepoContext {
    /// Build a context, validating both halves against the slug grammar:
    /// non-empty runs of letters, digits, `-`, `_`.
    ///
    /// A context the scanner's own grammar could never capture would produce
    /// payloads no navigation layer can resolve, so it is rejected up front.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyOwner` or `Error::EmptyRepo` for an empty half,
    /// `Error::InvalidOwner` or `Error::InvalidRepo` for a bad character.
    pub fn new(owner: &str, repo: &str) -> Result<Self, Error> {
        if owner.is_empty() {
            return Err(Error::EmptyOwner);
        }
        if repo.is_empty() {
            return Err(Error::EmptyRepo);
        }
        if let Some(ch) = owner.chars().find(|&c| !is_slug_char(c)) {
            return Err(Error::InvalidOwner { ch, owner: owner.to_string() });
        }
        if let Some(ch) = repo.chars().find(|&c| !is_slug_char(c)) {
            return Err(Error::InvalidRepo { ch, repo: repo.to_string() });
        }
        return Ok(Self { owner: owner.to_string(), repo: repo.to_string() });
    }

    /// Account half of the context.
    pub fn owner(&self) -> &str {
        return &self.owner;
    }

    /// Repository half of the context.
    pub fn repo(&self) -> &str {
        return &self.repo;
    }
}

/// A single shortlink found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlinkMatch {
    /// The matched text exactly as it appears in the input, e.g. `#123` or
    /// `owner/repo#123`. Always equal to the input slice at `range`.
    pub display_text: String,
    /// Owner, repo, and number the span refers to.
    pub issue: IssueRef,
    /// Half-open byte range of `display_text` within the scanned text.
    pub range: Range<usize>,
}

/// Characters allowed in an owner or repository name.
pub(crate) fn is_slug_char(c: char) -> bool {
    return c.is_alphanumeric() || c == '-' || c == '_';
}
