// src/store.rs
//! In-memory school table and its CSV load/save.
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::csv::{parse_rows, write_table};
use crate::error::{Error, IoContext, Result};

pub const COLORS_COLUMN: &str = "colors";

/// A header row plus string rows. Every row is padded to the header width on load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Column index by header name, case-insensitive.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    pub fn colors_column(&self) -> Option<usize> {
        self.column(COLORS_COLUMN)
    }

    /// Same headers, no rows.
    pub fn empty_like(&self) -> Self {
        Self { headers: self.headers.clone(), rows: Vec::new() }
    }

    /// Remove rows whose `colors` cell is missing or empty.
    /// A whitespace-only cell is kept: it is an empty description, not a missing one.
    /// Returns how many rows were dropped.
    pub fn drop_missing_colors(&mut self) -> usize {
        let Some(ix) = self.colors_column() else {
            let n = self.rows.len();
            self.rows.clear();
            return n;
        };
        let before = self.rows.len();
        self.rows.retain(|r| r.get(ix).is_some_and(|c| !c.is_empty()));
        before - self.rows.len()
    }

    /// Split rows by a predicate over the `colors` cell, preserving order.
    /// Returns `(matching, rest)`.
    pub fn split_by_colors<F>(&self, mut pred: F) -> (DataSet, DataSet)
    where
        F: FnMut(&str) -> bool,
    {
        let mut yes = self.empty_like();
        let mut no = self.empty_like();
        let ix = self.colors_column();
        for row in &self.rows {
            let cell = ix.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("");
            if pred(cell) { yes.rows.push(row.clone()); } else { no.rows.push(row.clone()); }
        }
        (yes, no)
    }

    pub fn load(path: &Path) -> Result<DataSet> {
        let text = fs::read_to_string(path).at(path)?;
        let mut rows = parse_rows(&text).into_iter();
        let headers = rows
            .next()
            .ok_or_else(|| Error::EmptyInput { path: path.to_path_buf() })?;

        let width = headers.len();
        let rows = rows
            .map(|mut r| {
                if r.len() < width { r.resize(width, s!()); }
                r
            })
            .collect();

        let ds = DataSet { headers, rows };
        if ds.colors_column().is_none() {
            return Err(Error::MissingColorsColumn { path: path.to_path_buf() });
        }
        Ok(ds)
    }

    /// Create/truncate `path` and write headers + rows. The parent directory must exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path).at(path)?;
        let mut out = BufWriter::new(file);
        write_table(&mut out, &self.headers, &self.rows).at(path)?;
        out.flush().at(path)
    }
}
