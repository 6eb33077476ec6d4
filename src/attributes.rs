//! Style attributes attached to styled spans.

use serde::{Deserialize, Serialize};

use crate::types::{IssueRef, ShortlinkMatch};

/// Marker telling the rendering layer how to color a span. This crate never
/// names a concrete color; the renderer maps markers to its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMarker {
    /// The span is a tracker reference: render it as a tappable link.
    Link,
}

/// The fixed set of attributes a styled span can carry.
///
/// A closed struct rather than an open attribute map, so each payload keeps
/// its type. Serialized keys are namespaced (`shortlink.*`) so a document
/// annotated here can share an attribute map with unrelated annotators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Color marker for the rendering layer.
    #[serde(default, rename = "shortlink.color", skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMarker>,
    /// Issue-reference payload for the navigation layer.
    #[serde(default, rename = "shortlink.issue", skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueRef>,
}

/// Build the attribute set for a scanner match: the link color marker plus
/// the match's issue payload, verbatim.
pub fn attach(matched: &ShortlinkMatch) -> Attributes {
    return Attributes {
        color: Some(ColorMarker::Link),
        issue: Some(matched.issue.clone()),
    };
}
