//! `test`: environment checks before exploring.
//!
//! Three checks, reported individually: AWS caller identity, secret shape,
//! and a live query. The process exits zero only when all three pass.

use aws_config::BehaviorVersion;
use tablescout_core::security::missing_secret_keys;
use tablescout_core::{Result, SecretsProvider, TableScoutError, Value, Warehouse};

pub(crate) async fn run(warehouse: &Warehouse, provider: &SecretsProvider) -> Result<()> {
    println!("Testing warehouse connection setup...\n");

    let mut passed = 0usize;
    const TOTAL: usize = 3;

    if check_aws_identity().await {
        passed += 1;
    }
    println!();

    if check_secret(provider).await {
        passed += 1;
    }
    println!();

    if check_warehouse(warehouse).await {
        passed += 1;
    }
    println!();

    if passed == TOTAL {
        println!("{}", "=".repeat(50));
        println!("✓ All tests passed! Ready to explore warehouse tables");
        println!("{}", "=".repeat(50));
        Ok(())
    } else {
        Err(TableScoutError::validation(format!(
            "{} of {TOTAL} connection test(s) failed",
            TOTAL - passed
        )))
    }
}

async fn check_aws_identity() -> bool {
    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sts = aws_sdk_sts::Client::new(&aws);

    match sts.get_caller_identity().send().await {
        Ok(identity) => {
            println!("✓ AWS credentials valid");
            if let Some(account) = identity.account() {
                println!("  Account: {account}");
            }
            if let Some(arn) = identity.arn() {
                println!("  User ARN: {arn}");
            }
            true
        }
        Err(err) => {
            println!("✗ AWS credentials invalid: {err}");
            false
        }
    }
}

async fn check_secret(provider: &SecretsProvider) -> bool {
    let raw = match provider.fetch_secret_string().await {
        Ok(raw) => raw,
        Err(err) => {
            println!("✗ {err}");
            return false;
        }
    };

    let payload: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(err) => {
            println!("✗ Secret is not valid JSON: {err}");
            return false;
        }
    };

    let missing = missing_secret_keys(&payload);
    if !missing.is_empty() {
        println!("✗ Secret missing required keys: {}", missing.join(", "));
        return false;
    }

    println!("✓ Secret '{}' found", provider.secret_name());
    if let Some(host) = payload.get("host").and_then(serde_json::Value::as_str) {
        println!("  Host: {host}");
    }
    if let Some(database) = payload.get("database").and_then(serde_json::Value::as_str) {
        println!("  Database: {database}");
    }
    if let Some(user) = payload.get("user").and_then(serde_json::Value::as_str) {
        println!("  User: {user}");
    }
    true
}

async fn check_warehouse(warehouse: &Warehouse) -> bool {
    match warehouse.execute("SELECT 1 AS test", &[]).await {
        Ok(result) => {
            let first = result.rows.first().and_then(|row| row.first());
            if matches!(first, Some(Value::Int(1))) {
                println!("✓ Connected to the warehouse successfully");
                true
            } else {
                println!("✗ Connected but test query failed");
                false
            }
        }
        Err(err) => {
            println!("✗ {err}");
            false
        }
    }
}
