//! Table rendering.
//!
//! Cmdlets that report `OutputShape::Table` pre-format their output
//! here: left-aligned columns padded to the widest cell, a header row,
//! and a dash separator row under each header.

/// Render rows into an aligned text table.
///
/// Column widths are the max of the header and every cell in that
/// column. Rows shorter than the header list render empty trailing
/// cells. Empty `rows` still renders the header and separator.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_row(
        &mut out,
        headers.iter().map(|h| "-".repeat(h.len())),
        &widths,
    );
    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }
    // Drop the trailing newline so callers control final spacing.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let cells: Vec<String> = cells.collect();
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            // No padding after the last column.
            out.push_str(cell);
        } else {
            let width = widths.get(i).copied().unwrap_or(cell.len());
            out.push_str(&format!("{cell:<width$}  "));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_separator_and_rows() {
        let table = render_table(
            &["Name", "Value"],
            &[
                vec!["Foo".into(), "Bar".into()],
                vec!["LongerName".into(), "x".into()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].contains("Foo"));
        assert!(lines[3].starts_with("LongerName"));
    }

    #[test]
    fn columns_are_aligned() {
        let table = render_table(
            &["A", "B"],
            &[
                vec!["xx".into(), "1".into()],
                vec!["y".into(), "2".into()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        // "B" starts at the same offset in every line.
        let col = lines[0].find('B').unwrap();
        assert_eq!(&lines[2][col..col + 1], "1");
        assert_eq!(&lines[3][col..col + 1], "2");
    }

    #[test]
    fn empty_rows_still_render_header() {
        let table = render_table(&["Status", "Name"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
