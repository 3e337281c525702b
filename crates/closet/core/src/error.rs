//! Common error infrastructure for closet-core.
//!
//! Domain-specific errors (e.g., `AssignError`, `RefreshError`) live in the
//! composer modules alongside the transitions they validate. This module
//! provides the shared severity classification used across all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: temporary conditions the user can work around (no
///   alternative piece available, no outer pieces uploaded yet)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that indicate a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all closet-core errors.
///
/// Transition error enums implement this so the runtime can pick a logging
/// level and decide whether to surface the failure to the user.
pub trait ClosetError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for categorization in logs.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Error type for transitions that never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl ClosetError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {} // Empty match - this is never constructed
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
