//! Credential handling for the warehouse trust boundary.
//!
//! # Security Guarantees
//! - Credentials are fetched fresh per connection attempt and never persisted
//! - Password material is zeroed on drop and redacted from `Debug` output
//! - The secret name is explicit configuration, not a hidden global
//!
//! # Module Structure
//! - `credentials`: secret payload deserialization and memory hygiene
//! - `secrets`: the Secrets Manager lookup itself

mod credentials;
mod secrets;

pub use credentials::{
    DEFAULT_WAREHOUSE_PORT, REQUIRED_SECRET_KEYS, WarehouseCredentials, missing_secret_keys,
};
pub use secrets::{DEFAULT_SECRET_NAME, SecretConfig, SecretsProvider};
