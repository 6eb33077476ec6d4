/// Crate-level error type for context validation.
///
/// Scanning and segment building never fail: a candidate that doesn't parse
/// is ordinary plain text. The only fallible operation is constructing a
/// `RepoContext`, and each variant names exactly what was wrong with it.
#[allow(clippy::error_impl_error, reason = "conventional name for the crate's single error type")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Context owner is the empty string.
    #[error("context owner is empty")]
    EmptyOwner,

    /// Context repository is the empty string.
    #[error("context repository is empty")]
    EmptyRepo,

    /// Context owner carries a character outside letters, digits, `-`, `_`.
    #[error("invalid character `{ch}` in context owner `{owner}`")]
    InvalidOwner {
        /// The offending character.
        ch: char,
        /// The owner string as given.
        owner: String,
    },

    /// Context repository carries a character outside letters, digits, `-`, `_`.
    #[error("invalid character `{ch}` in context repository `{repo}`")]
    InvalidRepo {
        /// The offending character.
        ch: char,
        /// The repository string as given.
        repo: String,
    },
}
