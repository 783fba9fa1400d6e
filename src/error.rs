//! Error types shared by every area of the crate.
//!
//! The taxonomy is narrow. Bad input to an operation is an
//! [`OverscoreError::InvalidArgument`]; a failure raised by caller-supplied
//! code travels through the traversal engine and the invocation layer
//! untouched; "not found" is never an error and is expressed with [`Option`].

use thiserror::Error;

/// Errors produced by invocation, traversal and the helper modules.
///
/// # Examples
///
/// ```rust
/// use overscore::error::OverscoreError;
///
/// let error = OverscoreError::raised("iterator gave up");
/// assert_eq!(format!("{error}"), "iterator gave up");
/// ```
#[derive(Debug, Error)]
pub enum OverscoreError {
    /// An operation received an argument it cannot work with.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A failure raised by caller-supplied code (an iterator, a wrapped callable).
    #[error("{message}")]
    Raised {
        /// The message supplied by the raising code.
        message: String,
    },

    /// A callable read its receiver while no context was bound.
    #[error("{callable}: no context is bound")]
    Unbound {
        /// Diagnostic name of the callable.
        callable: String,
    },

    /// Method dispatch found no method with the requested name.
    #[error("{class} has no method `{method}`")]
    MissingMethod {
        /// Class name of the receiver.
        class: String,
        /// The requested method name.
        method: String,
    },

    /// Two values have no defined order.
    #[error("cannot compare {left} with {right}")]
    NotComparable {
        /// Type name of the left operand.
        left: &'static str,
        /// Type name of the right operand.
        right: &'static str,
    },

    /// Serializing an argument list into a memo key failed.
    #[error("failed to derive memo key: {0}")]
    MemoKey(#[from] serde_json::Error),
}

impl OverscoreError {
    /// Creates the error a caller-supplied callable returns to signal failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use overscore::error::OverscoreError;
    /// use overscore::invocation::Callable;
    ///
    /// let failing = Callable::new(|_| Err(OverscoreError::raised("boom")));
    /// assert!(failing.invoke(&[]).is_err());
    /// ```
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = OverscoreError> = std::result::Result<T, E>;
