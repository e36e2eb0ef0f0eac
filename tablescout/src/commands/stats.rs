//! `stats`: counts, nulls, distincts, and min/max for one column.

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
    column: &str,
) -> Result<()> {
    let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
    let table = sanitize_identifier(table, IdentifierKind::Table)?;
    let column = sanitize_identifier(column, IdentifierKind::Column)?;

    println!("Fetching statistics for {schema}.{table}.{column}...");

    let quoted_column = quote_identifier(column);
    let query = format!(
        "SELECT \
            COUNT(*) AS total_count, \
            COUNT({quoted_column}) AS non_null_count, \
            COUNT(*) - COUNT({quoted_column}) AS null_count, \
            COUNT(DISTINCT {quoted_column}) AS distinct_count, \
            MIN({quoted_column}) AS min_value, \
            MAX({quoted_column}) AS max_value \
         FROM {}.{}",
        quote_identifier(schema),
        quote_identifier(table)
    );
    let result = warehouse.execute(&query, &[]).await?;

    let Some(row) = result.rows.first() else {
        return Err(TableScoutError::query_failed("no statistics available"));
    };

    println!("\n✓ Statistics for {column}:\n");
    println!("Total Rows:       {}", row[0]);
    println!("Non-Null Values:  {}", row[1]);
    println!("Null Values:      {}", row[2]);
    println!("Distinct Values:  {}", row[3]);
    println!("Min Value:        {}", row[4]);
    println!("Max Value:        {}", row[5]);

    let path = reports.exploration_file(schema, table)?;
    let section = format!(
        "\n### Column Statistics: {column}\n\n\
         | Metric | Value |\n\
         |--------|-------|\n\
         | Total Rows | {} |\n\
         | Non-Null Values | {} |\n\
         | Null Values | {} |\n\
         | Distinct Values | {} |\n\
         | Min Value | {} |\n\
         | Max Value | {} |\n",
        row[0], row[1], row[2], row[3], row[4], row[5]
    );
    if output::append_section(&path, &section)? {
        println!("\n✓ Results appended to {}", path.display());
    }

    Ok(())
}
