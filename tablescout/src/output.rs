//! Console tables and Markdown report sections shared by the subcommands.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tablescout_core::{QueryOutput, Result, TableScoutError, Value};

/// Prints a `col | col` header with a dashed rule, then the formatted rows.
pub(crate) fn print_table(output: &QueryOutput) {
    let header = output.columns.join(" | ");
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for row in &output.rows {
        let cells: Vec<String> = row.iter().map(Value::format).collect();
        println!("{}", cells.join(" | "));
    }
}

/// Renders a pipe-delimited Markdown table with formatted cells.
pub(crate) fn markdown_table(columns: &[String], rows: &[Vec<Value>]) -> String {
    let mut table = String::new();
    table.push_str(&format!("| {} |\n", columns.join(" | ")));
    table.push_str(&format!("|{}|\n", vec!["---"; columns.len()].join("|")));

    for row in rows {
        let cells: Vec<String> = row.iter().map(Value::format).collect();
        table.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    table
}

/// Appends a section to an existing report, returning whether it was written.
///
/// A missing report is skipped, not an error; the console output already
/// delivered the result. Any other failure is fatal.
pub(crate) fn append_section(path: &Path, section: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().append(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(TableScoutError::io(
                format!("cannot open report {}", path.display()),
                e,
            ));
        }
    };

    file.write_all(section.as_bytes())
        .map_err(|e| TableScoutError::io(format!("cannot append to {}", path.display()), e))?;

    Ok(true)
}
