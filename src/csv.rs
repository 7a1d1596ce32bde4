// src/csv.rs
//! Minimal CSV codec for the school tables and partition files.
//! Quote- and CRLF-tolerant on read, RFC-4180 quoting on write.
use std::io::{self, Write};
use std::mem::take;

pub const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Split CSV text into rows of fields. Blank lines are skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline, even if quotes were unterminated.
    row.push(field);
    flush_row(&mut rows, &mut row);

    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{SEP}")?; } else { first = false; }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Header row followed by every data row.
pub fn write_table<W: Write>(mut w: W, headers: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    write_row(&mut w, headers)?;
    for r in rows {
        write_row(&mut w, r)?;
    }
    Ok(())
}
