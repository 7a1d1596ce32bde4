// src/report.rs
//! Plain-text rendering of a reduced distribution for terminal output.
use std::fmt::Write;

use crate::reduce::Reduction;

/// Two-column table, most common first, `Other` last with the number of combos it folds.
///
/// ```text
/// color combo   count
/// red, white       12
/// Other             5  (2 combos)
/// ```
pub fn render(r: &Reduction) -> String {
    let width = r
        .above()
        .iter()
        .map(|c| c.combo.chars().count())
        .max()
        .unwrap_or(0)
        .max("color combo".len());
    let digits = r.above().iter().map(|c| c.count.to_string().len()).max().unwrap_or(1).max(5);

    let mut out = s!();
    let _ = writeln!(out, "{:<width$}  {:>digits$}", "color combo", "count");
    for c in r.kept() {
        let _ = writeln!(out, "{:<width$}  {:>digits$}", c.combo, c.count);
    }
    let other = r.other();
    let noun = if r.folded() == 1 { "combo" } else { "combos" };
    let _ = writeln!(
        out,
        "{:<width$}  {:>digits$}  ({} {noun} below {})",
        other.combo,
        other.count,
        r.folded(),
        r.threshold(),
    );
    out
}
