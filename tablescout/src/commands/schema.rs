//! `schema`: column metadata plus a fresh exploration report.
//!
//! The only subcommand that overwrites the report file; everything else
//! appends to the file this one creates.

use std::fs;

use chrono::Local;
use tablescout_core::{
    IdentifierKind, QueryOutput, ReportPaths, Result, TableScoutError, Warehouse, quote_identifier,
    sanitize_identifier,
};
use tracing::warn;

use crate::output;

const COLUMN_METADATA_QUERY: &str = "\
    SELECT
        column_name,
        data_type,
        is_nullable,
        column_default,
        ordinal_position
    FROM information_schema.columns
    WHERE table_schema = $1 AND table_name = $2
    ORDER BY ordinal_position";

pub(crate) async fn run(
    warehouse: &Warehouse,
    reports: &ReportPaths,
    schema: &str,
    table: &str,
) -> Result<()> {
    let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
    let table = sanitize_identifier(table, IdentifierKind::Table)?;

    println!("Fetching schema for {schema}.{table}...");

    let metadata = warehouse
        .execute(COLUMN_METADATA_QUERY, &[schema, table])
        .await?;
    if metadata.rows.is_empty() {
        return Err(TableScoutError::query_failed(format!(
            "table {schema}.{table} not found or no columns accessible"
        )));
    }

    // Sample failures are non-fatal; the schema section alone is useful.
    let sample_query = format!(
        "SELECT * FROM {}.{} LIMIT 2",
        quote_identifier(schema),
        quote_identifier(table)
    );
    let samples = match warehouse.execute(&sample_query, &[]).await {
        Ok(output) => output,
        Err(err) => {
            warn!("could not fetch sample rows: {err}");
            QueryOutput::default()
        }
    };

    let path = reports.exploration_file(schema, table)?;
    let report = render_report(schema, table, &metadata, &samples);
    fs::write(&path, report)
        .map_err(|e| TableScoutError::io(format!("cannot write {}", path.display()), e))?;

    println!("✓ Schema written to: {}", path.display());
    println!("✓ Columns: {}", metadata.rows.len());
    println!("✓ Sample rows: {}", samples.rows.len());
    Ok(())
}

fn render_report(
    schema: &str,
    table: &str,
    metadata: &QueryOutput,
    samples: &QueryOutput,
) -> String {
    let mut report = String::new();
    report.push_str(&format!("# Table Exploration: {schema}.{table}\n\n"));
    report.push_str(&format!(
        "**Generated**: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("## Table Schema\n\n");
    report.push_str("| Column Name | Data Type | Nullable | Default | Position |\n");
    report.push_str("|-------------|-----------|----------|---------|----------|\n");
    for row in &metadata.rows {
        // column_name, data_type, is_nullable, column_default, ordinal_position
        report.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row[0],
            row[1],
            row[2],
            row[3].format(),
            row[4]
        ));
    }

    report.push_str(&format!("\n## Sample Rows ({} rows)\n\n", samples.rows.len()));
    if samples.rows.is_empty() {
        report.push_str("*No sample rows available*\n");
    } else {
        report.push_str(&output::markdown_table(&samples.columns, &samples.rows));
    }

    report.push_str("\n## Available Explorations\n\n");
    report.push_str(&format!(
        "1. **DISTINCT values**: `tablescout distinct {schema} {table} <column>`\n"
    ));
    report.push_str(&format!(
        "2. **Column statistics**: `tablescout stats {schema} {table} <column>`\n"
    ));
    report.push_str(&format!(
        "3. **More sample rows**: `tablescout sample {schema} {table} <limit>`\n"
    ));
    report.push_str(&format!(
        "4. **Custom query**: `tablescout query {schema} {table} \"<WHERE clause>\"`\n"
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablescout_core::Value;

    fn metadata_row(name: &str, position: i64) -> Vec<Value> {
        vec![
            Value::Text(name.to_string()),
            Value::Text("integer".to_string()),
            Value::Text("YES".to_string()),
            Value::Null,
            Value::Int(position),
        ]
    }

    #[test]
    fn test_report_has_schema_and_exploration_sections() {
        let metadata = QueryOutput {
            columns: vec![],
            rows: vec![metadata_row("id", 1), metadata_row("name", 2)],
        };
        let samples = QueryOutput::default();

        let report = render_report("public", "users", &metadata, &samples);
        assert!(report.starts_with("# Table Exploration: public.users"));
        assert!(report.contains("## Table Schema"));
        assert!(report.contains("| id | integer | YES | NULL | 1 |"));
        assert!(report.contains("## Sample Rows (0 rows)"));
        assert!(report.contains("*No sample rows available*"));
        assert!(report.contains("tablescout distinct public users <column>"));
    }

    #[test]
    fn test_report_renders_sample_rows() {
        let metadata = QueryOutput {
            columns: vec![],
            rows: vec![metadata_row("id", 1)],
        };
        let samples = QueryOutput {
            columns: vec!["id".to_string()],
            rows: vec![vec![Value::Int(7)]],
        };

        let report = render_report("public", "users", &metadata, &samples);
        assert!(report.contains("## Sample Rows (1 rows)"));
        assert!(report.contains("| 7 |"));
    }
}
