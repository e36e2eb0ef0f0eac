//! `migrate`: apply a multi-statement SQL file with write access.
//!
//! Statements run in file order over one read-write session. The first
//! failure reports the statement index and an excerpt, then aborts the
//! remainder; earlier statements stay applied (autocommit semantics, no
//! rollback).

use std::fs;
use std::path::Path;

use tablescout_core::sqlfile::{excerpt, split_statements};
use tablescout_core::warehouse::close;
use tablescout_core::{Result, SessionMode, TableScoutError, Warehouse};

pub(crate) async fn run(warehouse: &Warehouse, file: &Path) -> Result<()> {
    if !file.exists() {
        return Err(TableScoutError::validation(format!(
            "File not found: {}",
            file.display()
        )));
    }
    let sql = fs::read_to_string(file)
        .map_err(|e| TableScoutError::io(format!("cannot read {}", file.display()), e))?;
    let statements = split_statements(&sql);

    println!("Applying migration: {}", file.display());

    let mut conn = warehouse.connect(SessionMode::ReadWrite).await?;
    for (index, statement) in statements.iter().enumerate() {
        let number = index + 1;
        println!("  Executing statement {number}...");
        match sqlx::raw_sql(statement).execute(&mut conn).await {
            Ok(_) => println!("  ✓ Statement {number} completed"),
            Err(err) => {
                println!("  ✗ Statement {number} failed: {err}");
                println!("    SQL: {}", excerpt(statement, 100));
                close(conn).await;
                return Err(TableScoutError::query_error(err));
            }
        }
    }
    close(conn).await;

    println!("✓ Successfully executed {}", file.display());
    Ok(())
}
