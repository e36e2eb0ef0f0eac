//! Core plumbing for the tablescout warehouse exploration utilities.
//!
//! This crate provides the trust boundary every utility shares: identifier
//! sanitization, report path resolution, credential fetching, and warehouse
//! session management. The CLI crate is a thin consumer of these pieces.
//!
//! # Security Guarantees
//! - Identifiers are allow-list validated before SQL or path interpolation
//! - Sessions are read-only unless write access is explicitly requested
//! - Credentials are fetched per connection, zeroed on drop, never logged
//! - Resolved report paths are re-checked against the canonical root

pub mod error;
pub mod identifier;
pub mod logging;
pub mod report;
pub mod security;
pub mod sqlfile;
pub mod value;
pub mod warehouse;

// Re-export commonly used types
pub use error::{Result, TableScoutError};
pub use identifier::{IdentifierKind, quote_identifier, sanitize_identifier};
pub use logging::init_logging;
pub use report::ReportPaths;
pub use security::{SecretConfig, SecretsProvider, WarehouseCredentials};
pub use value::Value;
pub use warehouse::{QueryOutput, SessionMode, Warehouse};
