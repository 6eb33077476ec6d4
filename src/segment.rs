//! Segment building: turn scan results into a round-tripping styled document.

use serde::{Deserialize, Serialize};

use crate::attributes::{self, Attributes};
use crate::scanner;
use crate::types::{RepoContext, ShortlinkMatch};

/// A contiguous span of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Unstyled text, reproduced verbatim.
    Plain {
        /// The span's text.
        text: String,
    },
    /// A styled span carrying link attributes.
    Styled {
        /// Attributes attached to the span.
        attributes: Attributes,
        /// The span's text.
        text: String,
    },
}

impl Segment {
    /// The span's text, regardless of styling.
    pub fn text(&self) -> &str {
        return match self {
            Segment::Plain { text } | Segment::Styled { text, .. } => text,
        };
    }
}

/// An ordered sequence of segments whose concatenated text equals the
/// scanned input exactly, including whitespace and newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledDocument {
    /// The ordered segments.
    pub segments: Vec<Segment>,
}

impl StyledDocument {
    /// Concatenate every segment's text in order, dropping styling.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(segment.text());
        }
        out
    }
}

/// Build a styled document from text and its scan results.
///
/// Walks the (sorted, non-overlapping) matches left to right, emitting a
/// plain segment for every non-empty gap and a styled segment for every
/// match. With no matches the whole input becomes a single plain segment;
/// empty input yields an empty document.
pub fn build(text: &str, matches: &[ShortlinkMatch]) -> StyledDocument {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for matched in matches {
        if matched.range.start > cursor {
            segments.push(Segment::Plain {
                text: text[cursor..matched.range.start].to_string(),
            });
        }
        segments.push(Segment::Styled {
            attributes: attributes::attach(matched),
            text: matched.display_text.clone(),
        });
        cursor = matched.range.end;
    }

    if cursor < text.len() {
        segments.push(Segment::Plain {
            text: text[cursor..].to_string(),
        });
    }

    StyledDocument { segments }
}

/// Scan `text` and build its styled document in one step.
pub fn annotate(text: &str, context: &RepoContext) -> StyledDocument {
    build(text, &scanner::scan(text, context))
}

/// Re-annotate an existing document, scanning only its plain segments.
///
/// Styled segments pass through untouched, whoever attached them. This is
/// the composition seam for annotators sharing the document format: each
/// one only ever subdivides plain text, so earlier styling survives.
pub fn annotate_document(document: &StyledDocument, context: &RepoContext) -> StyledDocument {
    let mut segments = Vec::new();
    for segment in &document.segments {
        match segment {
            Segment::Plain { text } => segments.extend(annotate(text, context).segments),
            styled @ Segment::Styled { .. } => segments.push(styled.clone()),
        }
    }
    StyledDocument { segments }
}
