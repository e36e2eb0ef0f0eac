//! Warehouse credential container deserialized from the secret payload.
//!
//! # Security
//! - The password is only reachable through an accessor, never serialized
//! - Memory is cleared on drop via `zeroize`
//! - `Debug` output masks the password

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroize;

use crate::error::{Result, TableScoutError};

/// Default warehouse port when the secret omits `port`.
pub const DEFAULT_WAREHOUSE_PORT: u16 = 5439;

/// Keys the secret payload must carry.
pub const REQUIRED_SECRET_KEYS: &[&str] = &["host", "database", "user", "password"];

/// Connection parameters for one session, parsed from the secret JSON.
#[derive(Clone, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct WarehouseCredentials {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    password: String,
}

fn default_port() -> u16 {
    DEFAULT_WAREHOUSE_PORT
}

impl WarehouseCredentials {
    /// Parses the secret string fetched from the secret store.
    ///
    /// # Errors
    /// Returns a credential error when the payload is not JSON or misses a
    /// required key.
    pub fn parse(secret_string: &str) -> Result<Self> {
        serde_json::from_str(secret_string).map_err(|e| {
            TableScoutError::credentials(format!("secret payload is malformed: {e}"), None)
        })
    }

    /// The password, for session establishment only.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for WarehouseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarehouseCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"****")
            .finish()
    }
}

/// Reports which required keys a raw secret payload is missing.
///
/// Used by the connection tester to explain a malformed secret instead of
/// failing on the first deserialization error.
pub fn missing_secret_keys(payload: &serde_json::Value) -> Vec<&'static str> {
    REQUIRED_SECRET_KEYS
        .iter()
        .filter(|key| payload.get(**key).is_none())
        .copied()
        .collect()
}
