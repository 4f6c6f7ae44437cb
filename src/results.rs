use serde_json::Value;

use crate::driver::Row;

/// Renders rows the way the harness compares them: one line per row, cells
/// joined by single spaces, an empty line replaced by a tab.
pub fn format_result(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let line = row.iter().map(format_value).collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            out.push('\t');
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cells_join_with_single_spaces() {
        let rows = vec![vec![json!("default"), json!(1), json!(2.5)]];
        assert_eq!(format_result(&rows), "default 1 2.5\n");
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let rows = vec![vec![json!(true), json!(false)]];
        assert_eq!(format_result(&rows), "true false\n");
    }

    #[test]
    fn test_strings_render_without_quotes() {
        let rows = vec![vec![json!("a b"), json!("c")]];
        assert_eq!(format_result(&rows), "a b c\n");
    }

    #[test]
    fn test_null_renders_as_upper_null() {
        let rows = vec![vec![json!(null)]];
        assert_eq!(format_result(&rows), "NULL\n");
    }

    #[test]
    fn test_empty_row_becomes_tab() {
        let rows = vec![vec![json!("")], vec![]];
        assert_eq!(format_result(&rows), "\t\n\t\n");
    }

    #[test]
    fn test_no_rows_no_output() {
        assert_eq!(format_result(&[]), "");
    }
}
