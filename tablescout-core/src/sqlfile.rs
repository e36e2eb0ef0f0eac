//! Textual splitting of multi-statement SQL files.
//!
//! Statements are split on `;`, trimmed, and dropped when no line survives
//! comment stripping. This is not a SQL parser: a semicolon inside a string
//! literal or quoted identifier mis-splits. Migration files are authored by
//! the same team, so the simple split is the accepted trade.

/// Splits file content into executable statements, in file order.
///
/// Fragments that are empty or contain only `--` line comments are dropped.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty() && has_executable_line(stmt))
        .map(ToString::to_string)
        .collect()
}

fn has_executable_line(stmt: &str) -> bool {
    stmt.lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with("--"))
}

/// First `max_chars` characters of a statement, for failure reports.
pub fn excerpt(stmt: &str, max_chars: usize) -> String {
    if stmt.chars().count() <= max_chars {
        stmt.to_string()
    } else {
        let head: String = stmt.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_two_statements_in_order() {
        let sql = "CREATE TABLE a (id INT);\nINSERT INTO a VALUES (1);";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "CREATE TABLE a (id INT)");
        assert_eq!(statements[1], "INSERT INTO a VALUES (1)");
    }

    #[test]
    fn test_drops_empty_fragments() {
        let statements = split_statements("SELECT 1;;;\n;SELECT 2;");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_drops_comment_only_fragments() {
        let sql = "-- header comment\n-- more commentary\n;SELECT 1;";
        let statements = split_statements(sql);
        assert_eq!(statements, vec!["SELECT 1"]);
    }

    #[test]
    fn test_keeps_statement_with_leading_comment() {
        let sql = "-- creates the view\nCREATE VIEW v AS SELECT 1;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("CREATE VIEW"));
    }

    #[test]
    fn test_whitespace_only_file_yields_nothing() {
        assert!(split_statements("  \n\t\n  ").is_empty());
    }

    #[test]
    fn test_excerpt_passes_short_statements_through() {
        assert_eq!(excerpt("SELECT 1", 100), "SELECT 1");
    }

    #[test]
    fn test_excerpt_truncates_long_statements() {
        let long = "x".repeat(250);
        let cut = excerpt(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }
}
