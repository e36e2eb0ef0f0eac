//! `distinct`: most frequent values of a column, with counts.

use tablescout_core::{
    IdentifierKind, ReportPaths, Result, Warehouse, quote_identifier, sanitize_identifier,
};

use crate::output;

pub(crate) async fn run(
    warehouse: &Warehouse,
    reports: &ReportPaths,
    schema: &str,
    table: &str,
    column: &str,
) -> Result<()> {
    let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
    let table = sanitize_identifier(table, IdentifierKind::Table)?;
    let column = sanitize_identifier(column, IdentifierKind::Column)?;

    println!("Fetching distinct values for {schema}.{table}.{column}...");

    let quoted_column = quote_identifier(column);
    let query = format!(
        "SELECT {quoted_column} AS value, COUNT(*) AS count \
         FROM {}.{} \
         GROUP BY {quoted_column} \
         ORDER BY count DESC \
         LIMIT 100",
        quote_identifier(schema),
        quote_identifier(table)
    );
    let result = warehouse.execute(&query, &[]).await?;

    println!(
        "\n✓ Found {} distinct values (showing top 100):\n",
        result.rows.len()
    );
    println!("{:<40} | {:>10}", "Value", "Count");
    println!("{}", "-".repeat(53));
    for row in &result.rows {
        // Width formatting needs concrete strings to pad.
        let value = row[0].to_string();
        let count = row[1].to_string();
        println!("{value:<40} | {count:>10}");
    }

    let path = reports.exploration_file(schema, table)?;
    let mut section = format!("\n### DISTINCT Values: {column}\n\n");
    section.push_str("| Value | Count |\n");
    section.push_str("|-------|-------|\n");
    for row in &result.rows {
        section.push_str(&format!("| {} | {} |\n", row[0], row[1]));
    }
    if output::append_section(&path, &section)? {
        println!("\n✓ Results appended to {}", path.display());
    }

    Ok(())
}
