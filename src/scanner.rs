//! Reference scanning: find issue shortlinks in free-form text.

use crate::types::{IssueRef, RepoContext, ShortlinkMatch, is_slug_char};

/// Scan text for issue shortlinks, left to right.
///
/// Recognizes bare references (`#123`), which take owner and repo from
/// `context`, and qualified references (`owner/repo#123`), which carry
/// their own. Matches come back in textual order and never overlap;
/// characters consumed by an accepted match are not re-examined.
///
/// Anything that merely looks like a reference stays plain text: `f#123`,
/// `1#1`, and `f/#123` fail the left-boundary rule, `#123F` fails the
/// right-boundary rule, and `# 1906` has no digits on the anchor.
pub fn scan(text: &str, context: &RepoContext) -> Vec<ShortlinkMatch> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('#') {
        let anchor = cursor + offset;
        match match_reference_at_anchor(text, cursor, anchor, context) {
            Some(matched) => {
                cursor = matched.range.end;
                matches.push(matched);
            },
            None => cursor = anchor + 1,
        }
    }

    matches
}

/// Try to build a match around the `#` at byte offset `anchor`.
///
/// The digit run and its right boundary are checked first since the bare
/// and qualified forms both require them; the left side then decides which
/// form, if either, applies. The qualified attempt runs before the bare
/// one so that `owner/repo#123` is never shortened to `#123`. `floor` is
/// the end of the last accepted match: boundary checks may read below it,
/// but no new match may claim characters before it.
fn match_reference_at_anchor(
    text: &str,
    floor: usize,
    anchor: usize,
    context: &RepoContext,
) -> Option<ShortlinkMatch> {
    let digits_start = anchor + 1;
    let digits_end = digit_run_end(text, digits_start);
    if digits_end == digits_start {
        return None;
    }
    // A letter or digit directly after the run makes this a word fragment
    // like `#123F`, not a reference.
    if text[digits_end..].chars().next().is_some_and(char::is_alphanumeric) {
        return None;
    }
    // Digit runs that overflow u64 are rejected, not saturated; the whole
    // candidate stays plain text.
    let number: u64 = text[digits_start..digits_end].parse().ok()?;

    if let Some((owner_start, repo_start)) = qualified_slug_before(text, floor, anchor) {
        let issue = IssueRef {
            number,
            owner: text[owner_start..repo_start - 1].to_string(),
            repo: text[repo_start..anchor].to_string(),
        };
        return Some(reference_match(text, owner_start, digits_end, issue));
    }

    if text[..anchor].chars().next_back().is_some_and(blocks_reference_start) {
        return None;
    }
    let issue = IssueRef {
        number,
        owner: context.owner().to_string(),
        repo: context.repo().to_string(),
    };
    Some(reference_match(text, anchor, digits_end, issue))
}

/// Try to read a maximal `owner/repo` slug ending exactly at `anchor`.
/// Returns the byte offsets where the owner and repo runs begin.
///
/// Both runs must be non-empty and separated by a single `/`, and the
/// character before the owner run must satisfy the same left-boundary rule
/// as a bare anchor. `a/b/c#1` therefore matches nothing: the qualified
/// attempt sees `/` before its owner run, and the bare attempt sees the
/// letter `c` before the anchor.
///
/// A slug that would reach back past `floor` is rejected whole; characters
/// consumed by an earlier match are never claimed again.
fn qualified_slug_before(text: &str, floor: usize, anchor: usize) -> Option<(usize, usize)> {
    let repo_start = slug_run_start(text, anchor);
    if repo_start == anchor {
        return None;
    }
    if text[..repo_start].chars().next_back() != Some('/') {
        return None;
    }
    let slash = repo_start - 1;
    let owner_start = slug_run_start(text, slash);
    if owner_start == slash {
        return None;
    }
    if owner_start < floor {
        return None;
    }
    if text[..owner_start].chars().next_back().is_some_and(blocks_reference_start) {
        return None;
    }
    Some((owner_start, repo_start))
}

/// End of the maximal ASCII digit run starting at `from`.
fn digit_run_end(text: &str, from: usize) -> usize {
    text[from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| from + i)
}

/// Start of the maximal slug-character run ending at `end`.
fn slug_run_start(text: &str, end: usize) -> usize {
    let mut start = end;
    for (i, ch) in text[..end].char_indices().rev() {
        if !is_slug_char(ch) {
            break;
        }
        start = i;
    }
    start
}

/// Left-context characters that kill a candidate: a reference must not butt
/// up against a word (`f#123`, `1#1`) or a path fragment (`f/#123`).
fn blocks_reference_start(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '/'
}

fn reference_match(text: &str, start: usize, end: usize, issue: IssueRef) -> ShortlinkMatch {
    ShortlinkMatch {
        display_text: text[start..end].to_string(),
        issue,
        range: start..end,
    }
}
