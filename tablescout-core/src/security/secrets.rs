//! Secret store lookup against AWS Secrets Manager.
//!
//! The provider fails fast: a missing, malformed, or inaccessible secret is
//! a terminal error for the invocation. There is no retry; these are
//! operator-invoked tools and the operator must fix the infrastructure.

use aws_config::BehaviorVersion;

use super::credentials::WarehouseCredentials;
use crate::error::{Result, TableScoutError};

/// Default Secrets Manager entry holding the warehouse credentials.
pub const DEFAULT_SECRET_NAME: &str = "tablescout/warehouse-creds";

/// Where to look for credentials.
#[derive(Debug, Clone)]
pub struct SecretConfig {
    pub secret_name: String,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            secret_name: DEFAULT_SECRET_NAME.to_string(),
        }
    }
}

/// Fetches warehouse credentials from Secrets Manager.
#[derive(Debug, Clone)]
pub struct SecretsProvider {
    config: SecretConfig,
}

impl SecretsProvider {
    /// Creates a provider for the configured secret.
    pub fn new(config: SecretConfig) -> Self {
        Self { config }
    }

    /// The secret name this provider reads.
    pub fn secret_name(&self) -> &str {
        &self.config.secret_name
    }

    /// Fetches the raw secret string.
    ///
    /// The connection tester uses this to inspect the payload shape itself;
    /// everything else goes through [`SecretsProvider::fetch`].
    ///
    /// # Errors
    /// Returns a credential error when the secret cannot be read or carries
    /// no string payload.
    pub async fn fetch_secret_string(&self) -> Result<String> {
        let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = aws_sdk_secretsmanager::Client::new(&aws);

        let response = client
            .get_secret_value()
            .secret_id(&self.config.secret_name)
            .send()
            .await
            .map_err(|e| {
                let context = format!("cannot read secret '{}': {e}", self.config.secret_name);
                TableScoutError::credentials(context, Some(Box::new(e)))
            })?;

        response.secret_string().map(str::to_string).ok_or_else(|| {
            TableScoutError::credentials(
                format!(
                    "secret '{}' has no string payload",
                    self.config.secret_name
                ),
                None,
            )
        })
    }

    /// Fetches and parses the warehouse credentials.
    ///
    /// # Errors
    /// Returns a credential error when the lookup fails or the payload is
    /// malformed.
    pub async fn fetch(&self) -> Result<WarehouseCredentials> {
        let secret = self.fetch_secret_string().await?;
        WarehouseCredentials::parse(&secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_secret_name() {
        let config = SecretConfig::default();
        assert_eq!(config.secret_name, DEFAULT_SECRET_NAME);
    }

    #[test]
    fn test_provider_reports_secret_name() {
        let provider = SecretsProvider::new(SecretConfig {
            secret_name: "team/override".to_string(),
        });
        assert_eq!(provider.secret_name(), "team/override");
    }
}
