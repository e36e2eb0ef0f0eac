//! Warehouse session management.
//!
//! One connection per invocation, opened against credentials fetched fresh
//! from the secret store and closed on every exit path. Sessions are
//! read-only unless the caller explicitly requests write access.

use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{Column, Connection, Executor, Row};
use tracing::{debug, warn};

use crate::error::{Result, TableScoutError};
use crate::security::SecretsProvider;
use crate::value::{Value, decode_cell};

/// Session transaction mode, fixed at connection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Mutating statements are rejected at the session level.
    ReadOnly,
    /// Write access for migration and DDL application only.
    ReadWrite,
}

/// Column names plus decoded rows from one statement.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Opens sessions and runs statements against the warehouse.
#[derive(Debug, Clone)]
pub struct Warehouse {
    provider: SecretsProvider,
}

impl Warehouse {
    /// Creates a warehouse handle backed by the given credential provider.
    pub fn new(provider: SecretsProvider) -> Self {
        Self { provider }
    }

    /// Opens one session in the given mode.
    ///
    /// Fetches credentials, connects, and for [`SessionMode::ReadOnly`]
    /// immediately restricts the session to read-only transactions. This is
    /// the single safety gate keeping exploration from mutating data; the
    /// migrate and ddl paths must opt out explicitly. Statements run
    /// autocommit; no explicit transaction is ever opened.
    ///
    /// The returned connection is owned by the caller, who must close it on
    /// every exit path.
    ///
    /// # Errors
    /// Returns a credential error when the secret lookup fails and a
    /// connection error when the session cannot be established.
    pub async fn connect(&self, mode: SessionMode) -> Result<PgConnection> {
        let creds = self.provider.fetch().await?;

        let options = PgConnectOptions::new()
            .host(&creds.host)
            .port(creds.port)
            .database(&creds.database)
            .username(&creds.user)
            .password(creds.password());

        let mut conn = PgConnection::connect_with(&options).await.map_err(|e| {
            let context = format!("cannot reach {}:{}: {e}", creds.host, creds.port);
            TableScoutError::connection_failed(context, e)
        })?;
        debug!("connected to {}:{}/{}", creds.host, creds.port, creds.database);

        if mode == SessionMode::ReadOnly {
            sqlx::query("SET SESSION CHARACTERISTICS AS TRANSACTION READ ONLY")
                .execute(&mut conn)
                .await
                .map_err(|e| {
                    TableScoutError::connection_failed(
                        format!("cannot enforce read-only session: {e}"),
                        e,
                    )
                })?;
            debug!("session restricted to read-only transactions");
        }

        Ok(conn)
    }

    /// Runs one statement on a fresh read-only session.
    ///
    /// Positional parameters are for literal values only; identifiers must
    /// go through the sanitizer and be interpolated quoted. The session is
    /// closed before this returns, on success and on failure.
    ///
    /// # Errors
    /// Propagates credential, connection, and statement errors.
    pub async fn execute(&self, query: &str, params: &[&str]) -> Result<QueryOutput> {
        let mut conn = self.connect(SessionMode::ReadOnly).await?;
        let output = fetch_all(&mut conn, query, params).await;
        close(conn).await;
        output
    }
}

async fn fetch_all(conn: &mut PgConnection, query: &str, params: &[&str]) -> Result<QueryOutput> {
    let mut prepared = sqlx::query(query);
    for param in params {
        prepared = prepared.bind(*param);
    }

    let rows: Vec<PgRow> = prepared
        .fetch_all(&mut *conn)
        .await
        .map_err(TableScoutError::query_error)?;

    // An empty result still has a header; fall back to the prepared
    // statement's metadata for the column names.
    let columns: Vec<String> = match rows.first() {
        Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
        None => (&mut *conn)
            .describe(query)
            .await
            .map(|d| d.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default(),
    };

    let rows = rows
        .iter()
        .map(|row| (0..row.len()).map(|idx| decode_cell(row, idx)).collect())
        .collect();

    Ok(QueryOutput { columns, rows })
}

/// Best-effort close; a failure to hang up cannot un-deliver the result.
pub async fn close(conn: PgConnection) {
    if let Err(err) = conn.close().await {
        warn!("failed to close warehouse session: {err}");
    }
}
