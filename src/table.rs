use std::fmt::Write as _;

use crate::schema::Align;

pub fn render_table(headers: &[String], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let column_count = headers.len();
    let mut widths = headers.iter().map(|h| display_width(h)).collect::<Vec<_>>();

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    let mut output = String::new();

    let _ = writeln!(output, "{}", format_row(headers, aligns, &widths));

    let separator = widths
        .iter()
        .map(|w| "-".repeat((*w).max(3)))
        .collect::<Vec<_>>();
    let _ = writeln!(output, "{}", separator.join("  "));

    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, aligns, &widths));
    }

    output
}

pub fn print_table(headers: &[String], aligns: &[Align], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, aligns, rows));
}

fn format_row(values: &[String], aligns: &[Align], widths: &[usize]) -> String {
    let mut cells = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        let Some(&width) = widths.get(idx) else {
            break;
        };
        let align = aligns.get(idx).copied().unwrap_or_default();
        let padding = width.saturating_sub(display_width(value));
        let cell = match align {
            Align::Left => format!("{value}{}", " ".repeat(padding)),
            Align::Right => format!("{}{value}", " ".repeat(padding)),
        };
        cells.push(cell);
    }
    let mut line = cells.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line
}

// Cell values may carry ANSI color sequences emitted by decorators; those
// contribute zero display columns.
fn display_width(value: &str) -> usize {
    let mut width = 0usize;
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
