//! Boundary-aware detection of issue shortlinks in free-form text.
//!
//! Scans issue bodies, comments, and commit messages for bare (`#123`) and
//! qualified (`owner/repo#123`) tracker references, then rebuilds the text
//! as a [`StyledDocument`]: an ordered run of plain and styled segments
//! whose concatenation reproduces the input exactly. Each styled segment
//! carries a [`ColorMarker`] for the rendering layer and an [`IssueRef`]
//! payload for the navigation layer; what those layers do with them is out
//! of this crate's hands.
//!
//! Everything here is a pure, synchronous text transform: no I/O, no
//! caching, no shared state, safe to call from any thread.
//!
//! ```
//! use shortlink::{RepoContext, Segment, annotate};
//!
//! let context = RepoContext::new("rnystrom", "GitHawk")?;
//! let document = annotate("Fixes #1234, see also octocat/hello-world#42.", &context);
//!
//! let links: Vec<&str> = document
//!     .segments
//!     .iter()
//!     .filter(|s| matches!(s, Segment::Styled { .. }))
//!     .map(Segment::text)
//!     .collect();
//! assert_eq!(links, ["#1234", "octocat/hello-world#42"]);
//! # Ok::<(), shortlink::Error>(())
//! ```

mod attributes;
mod error;
mod scanner;
mod segment;
mod types;

pub use attributes::{Attributes, ColorMarker, attach};
pub use error::Error;
pub use scanner::scan;
pub use segment::{Segment, StyledDocument, annotate, annotate_document, build};
pub use types::{IssueRef, RepoContext, ShortlinkMatch};
