// src/diff.rs
//! Rows of the original table that did not make it into the accepted table.
use std::collections::HashMap;

use crate::store::DataSet;

/// Multiset row difference `original − accepted`, in `original` order.
///
/// Rows are compared by value over the columns both tables share (matched by
/// header name), so `accepted` may carry extra columns such as the key column.
/// A row present twice in `original` and once in `accepted` leaves one copy.
pub fn diff(original: &DataSet, accepted: &DataSet) -> DataSet {
    // (original index, accepted index) for every shared column
    let shared: Vec<(usize, usize)> = original
        .headers
        .iter()
        .enumerate()
        .filter_map(|(oi, h)| accepted.headers.iter().position(|a| a == h).map(|ai| (oi, ai)))
        .collect();

    let mut remaining: HashMap<Vec<String>, usize> = HashMap::new();
    for row in &accepted.rows {
        *remaining.entry(project(row, shared.iter().map(|p| p.1))).or_default() += 1;
    }

    let mut out = original.empty_like();
    for row in &original.rows {
        match remaining.get_mut(&project(row, shared.iter().map(|p| p.0))) {
            Some(n) if *n > 0 => *n -= 1,
            _ => out.rows.push(row.clone()),
        }
    }
    out
}

fn project(row: &[String], cols: impl Iterator<Item = usize>) -> Vec<String> {
    cols.map(|i| row.get(i).cloned().unwrap_or_default()).collect()
}
