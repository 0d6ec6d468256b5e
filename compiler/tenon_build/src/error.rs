//! Error kinds of term construction.
//!
//! Three outcomes are distinguished:
//! - [`BuildError::Semantic`]: the program is wrong; report and continue.
//! - [`BuildError::Unsupported`]: the program is fine but the front end
//!   cannot handle the construct yet.
//! - [`invariant_violation`]: an upstream pass broke the term model. Always
//!   a panic, never a user condition.

use std::fmt;

/// Recoverable failure of a construction request.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A user-facing semantic error (e.g. a name that does not denote a
    /// template).
    #[error("{message}")]
    Semantic { message: String },

    /// A syntactically valid construct this front end does not implement.
    #[error("unimplemented feature: {feature}")]
    Unsupported { feature: &'static str },
}

impl BuildError {
    pub fn semantic(message: impl Into<String>) -> Self {
        BuildError::Semantic {
            message: message.into(),
        }
    }

    pub fn unsupported(feature: &'static str) -> Self {
        tracing::debug!(feature, "unsupported construct requested");
        BuildError::Unsupported { feature }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, BuildError::Unsupported { .. })
    }
}

/// Result of a fallible construction.
pub type BuildResult<T> = Result<T, BuildError>;

/// Abort on a broken term-model invariant.
///
/// Reaching this means a caller asked for something the model rules out,
/// such as attaching a definition to a parameter.
#[cold]
#[track_caller]
pub fn invariant_violation(what: impl fmt::Display) -> ! {
    tracing::error!(%what, "internal invariant violated");
    panic!("internal invariant violated: {what}")
}
