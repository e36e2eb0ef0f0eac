//! `ddl`: execute a SQL file as a single statement with write access.
//!
//! Unlike `migrate`, the file content is submitted in one piece, for
//! statements like CREATE VIEW whose bodies may contain semicolons the
//! textual splitter would mangle.

use std::fs;
use std::path::Path;

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

    println!("Executing DDL from: {}\n", file.display());
    println!("{}", "-".repeat(60));
    let preview: String = sql.chars().take(500).collect();
    if sql.chars().count() > 500 {
        println!("{preview}...");
    } else {
        println!("{preview}");
    }
    println!("{}", "-".repeat(60));
    println!();

    let mut conn = warehouse.connect(SessionMode::ReadWrite).await?;
    let result = sqlx::raw_sql(&sql).execute(&mut conn).await;
    close(conn).await;
    result.map_err(TableScoutError::query_error)?;

    println!("✓ DDL executed successfully");
    Ok(())
}
