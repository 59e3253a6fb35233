//! Error type shared by the view-models and the browser glue.

use thiserror::Error;

/// Errors surfaced while enhancing a page.
///
/// Every component treats these as "skip and keep going": the bootstrap logs
/// them and moves on to the next initializer.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// No global `window` (e.g. running inside a worker).
    #[error("no global window available")]
    NoWindow,
    /// The window has no attached document.
    #[error("window has no document")]
    NoDocument,
    /// A DOM call threw; the payload is the stringified JS value.
    #[error("dom operation `{op}` failed: {detail}")]
    Dom {
        /// The operation that failed, e.g. `createElement`.
        op: &'static str,
        /// Stringified JS exception.
        detail: String,
    },
    /// Reading or writing browser storage failed.
    #[error("storage `{key}` unavailable: {detail}")]
    Storage {
        /// Preference key involved.
        key: String,
        /// Underlying reason.
        detail: String,
    },
    /// The embedded configuration blob was not valid JSON.
    #[error("invalid enhancer config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type Result<T, E = ArchiveError> = std::result::Result<T, E>;
