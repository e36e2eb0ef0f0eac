//! Error types shared by every tablescout utility.
//!
//! Library code never terminates the process. Every failure is a typed
//! variant that propagates to the CLI entry point, which prints it with a
//! failure marker and exits non-zero.

use thiserror::Error;

use crate::identifier::IdentifierKind;

/// Main error type for tablescout operations.
///
/// # Security
/// Error messages never include credentials. Connection failures carry the
/// host and port but not the user or password.
#[derive(Debug, Error)]
pub enum TableScoutError {
    /// An identifier failed the allow-list check
    #[error("{kind} {message}")]
    Identifier {
        kind: IdentifierKind,
        message: String,
    },

    /// Operator input rejected before any network call
    #[error("{message}")]
    Validation { message: String },

    /// A resolved path would leave the report root
    #[error("Security error: {reason}")]
    Security { reason: String },

    /// Secret store lookup failed or the secret is malformed
    #[error("Failed to fetch credentials: {context}")]
    Credentials {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session establishment against the warehouse failed
    #[error("Database connection failed: {context}")]
    Connection {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Statement execution failed
    #[error("Query execution failed: {context}")]
    Query {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration or setup error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with `TableScoutError`
pub type Result<T> = std::result::Result<T, TableScoutError>;

impl TableScoutError {
    /// Creates an identifier rejection for the given kind
    pub fn identifier(kind: IdentifierKind, message: impl Into<String>) -> Self {
        Self::Identifier {
            kind,
            message: message.into(),
        }
    }

    /// Creates a validation error for bad operator input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a security error for a path that escapes the report root
    pub fn security(reason: impl Into<String>) -> Self {
        Self::Security {
            reason: reason.into(),
        }
    }

    /// Creates a credential error with optional underlying cause
    pub fn credentials(
        context: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Credentials {
            context: context.into(),
            source,
        }
    }

    /// Creates a connection error wrapping the driver failure
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a query error with a context message and no underlying cause
    pub fn query_failed(context: impl Into<String>) -> Self {
        Self::Query {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a query error from a driver failure
    pub fn query_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query {
            context: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
