//! `sample`: fetch N rows and append them to the report.

use tablescout_core::{
    IdentifierKind, ReportPaths, Result, TableScoutError, Warehouse, quote_identifier,
    sanitize_identifier,
};

use crate::output;

pub(crate) async fn run(
    warehouse: &Warehouse,
    reports: &ReportPaths,
    schema: &str,
    table: &str,
    limit: &str,
) -> Result<()> {
    let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
    let table = sanitize_identifier(table, IdentifierKind::Table)?;

    // Validated before any connection attempt.
    let limit: i64 = limit
        .parse()
        .map_err(|_| TableScoutError::validation("Limit must be an integer"))?;
    if limit <= 0 {
        return Err(TableScoutError::validation(
            "Limit must be a positive integer",
        ));
    }

    println!("Fetching {limit} sample rows from {schema}.{table}...");

    let query = format!(
        "SELECT * FROM {}.{} LIMIT {limit}",
        quote_identifier(schema),
        quote_identifier(table)
    );
    let result = warehouse.execute(&query, &[]).await?;

    println!("\n✓ Fetched {} rows:\n", result.rows.len());
    output::print_table(&result);

    let path = reports.exploration_file(schema, table)?;
    let mut section = format!("\n### Sample Rows ({} rows)\n\n", result.rows.len());
    section.push_str(&output::markdown_table(&result.columns, &result.rows));
    if output::append_section(&path, &section)? {
        println!("\n✓ Results appended to {}", path.display());
    }

    Ok(())
}
