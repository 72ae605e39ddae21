//! Query Result Formatting
//!
//! Converts heterogeneous result sets into the one canonical text
//! shape the protocol sends back. Three rules, applied in order:
//!
//! 1. No rows → empty string
//! 2. Exactly one row with exactly one column → the bare scalar text,
//!    no separators
//! 3. Otherwise → columns joined with `", "`, rows joined with `\n`,
//!    surrounding whitespace trimmed
//!
//! Rule 2 lets single-scalar queries (a count, a lookup) come back as
//! a plain value while anything wider reads as a table.
//!
//! Scalar rendering: integers and reals use their `to_string` form,
//! text is passed through verbatim, blobs are decoded as lossy UTF-8,
//! and NULL renders as the empty string.

use rusqlite::types::Value;

/// Formats a full result set into the canonical response text.
pub fn format_rows(rows: &[Vec<Value>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    if rows.len() == 1 && rows[0].len() == 1 {
        return scalar_text(&rows[0][0]);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    lines.join("\n").trim().to_string()
}

/// Renders a single scalar as text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(n) => n.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_empty_result_set() {
        assert_eq!(format_rows(&[]), "");
    }

    #[test]
    fn test_single_scalar_unadorned() {
        assert_eq!(format_rows(&[vec![Value::Integer(0)]]), "0");
        assert_eq!(format_rows(&[vec![text("alice")]]), "alice");
    }

    #[test]
    fn test_single_row_multiple_columns() {
        let rows = vec![vec![text("alice"), text("notes.txt")]];
        assert_eq!(format_rows(&rows), "alice, notes.txt");
    }

    #[test]
    fn test_multiple_rows_single_column() {
        // One column but several rows is still the table form
        let rows = vec![vec![text("alice")], vec![text("bob")]];
        assert_eq!(format_rows(&rows), "alice\nbob");
    }

    #[test]
    fn test_multiple_rows_and_columns() {
        let rows = vec![
            vec![text("alice"), text("notes.txt")],
            vec![text("bob"), text("draft.md")],
        ];
        assert_eq!(format_rows(&rows), "alice, notes.txt\nbob, draft.md");
    }

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(format_rows(&[vec![Value::Null]]), "");

        let rows = vec![vec![text("alice"), Value::Null]];
        assert_eq!(format_rows(&rows), "alice,");
    }

    #[test]
    fn test_numeric_scalars() {
        let rows = vec![vec![Value::Integer(-7), Value::Real(2.5)]];
        assert_eq!(format_rows(&rows), "-7, 2.5");
    }

    #[test]
    fn test_blob_lossy_decoded() {
        let rows = vec![vec![Value::Blob(b"raw".to_vec()), Value::Integer(1)]];
        assert_eq!(format_rows(&rows), "raw, 1");
    }
}
