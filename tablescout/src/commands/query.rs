//! `query`: SELECT * with an operator-supplied SQL fragment.
//!
//! The fragment is a deliberate trust boundary: it is the operator's own
//! WHERE/LIMIT text and is interpolated unvalidated. Schema and table still
//! pass the sanitizer.

use tablescout_core::{
    IdentifierKind, ReportPaths, Result, Warehouse, quote_identifier, sanitize_identifier,
};

use crate::output;

pub(crate) async fn run(
    warehouse: &Warehouse,
    reports: &ReportPaths,
    schema: &str,
    table: &str,
    fragment: &str,
) -> Result<()> {
    let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
    let table = sanitize_identifier(table, IdentifierKind::Table)?;

    let query = format!(
        "SELECT * FROM {}.{} {fragment}",
        quote_identifier(schema),
        quote_identifier(table)
    );

    println!("Running custom query:\n{query}\n");

    let result = warehouse.execute(&query, &[]).await?;

    println!("\n✓ Query returned {} rows:\n", result.rows.len());
    output::print_table(&result);

    let path = reports.exploration_file(schema, table)?;
    let mut section = format!("\n### Custom Query Results\n\n**Query**: `{fragment}`\n\n");
    section.push_str(&output::markdown_table(&result.columns, &result.rows));
    if output::append_section(&path, &section)? {
        println!("\n✓ Results appended to {}", path.display());
    }

    Ok(())
}
