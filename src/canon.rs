// src/canon.rs
//! Canonical key assignment.
use crate::core::tokens::{selected, tokenize};
use crate::store::DataSet;

/// Header of the column appended by `with_keys`.
pub const KEY_COLUMN: &str = "color_key";

/// Joiner between the (at most two) tokens of a key.
pub const KEY_SEP: &str = ", ";

/// Purely syntactic: does not consult the vocabulary.
/// `None` when the description has no tokens.
///
/// `"Red, White, Blue"` → `Some("red, white")`
pub fn assign(raw: &str) -> Option<String> {
    let tokens = tokenize(raw);
    let picked = selected(&tokens);
    if picked.is_empty() { None } else { Some(picked.join(KEY_SEP)) }
}

/// `assign` for a cell that may be absent.
pub fn assign_cell(raw: Option<&str>) -> Option<String> {
    raw.and_then(assign)
}

/// Copy of `accepted` with `KEY_COLUMN` appended. Rows without a key get an empty cell.
pub fn with_keys(accepted: &DataSet) -> DataSet {
    let ix = accepted.colors_column();
    let mut headers = accepted.headers.clone();
    headers.push(s!(KEY_COLUMN));

    let rows = accepted
        .rows
        .iter()
        .map(|r| {
            let key = assign_cell(ix.and_then(|i| r.get(i)).map(String::as_str));
            let mut out = r.clone();
            out.push(key.unwrap_or_default());
            out
        })
        .collect();

    DataSet::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Vocabulary;

    #[test]
    fn keys_are_lowercase_and_ordered() {
        assert_eq!(assign("Red, White").as_deref(), Some("red, white"));
        assert_eq!(assign("White & Red").as_deref(), Some("white, red"));
        assert_eq!(assign("Red, White, Blue").as_deref(), Some("red, white"));
        assert_eq!(assign("  NAVY ").as_deref(), Some("navy"));
    }

    #[test]
    fn no_tokens_no_key() {
        assert_eq!(assign(",&,"), None);
        assert_eq!(assign_cell(None), None);
    }

    #[test]
    fn accepted_descriptions_get_vocabulary_keys() {
        let v = Vocabulary::default();
        for raw in ["Royal Blue & White", "Old Gold, Black, Red", "scarlet,gray", "Teal"] {
            assert!(v.accepts(raw), "{raw}");
            let key = assign(raw).unwrap();
            assert!(key.split(KEY_SEP).all(|t| v.contains(t)), "{key}");
        }
    }

    #[test]
    fn key_column_is_appended() {
        let ds = DataSet::new(
            vec![s!("school_name"), s!("colors")],
            vec![vec![s!("A"), s!("Maroon & Gold")], vec![s!("B"), s!(" , ")]],
        );
        let keyed = with_keys(&ds);
        assert_eq!(keyed.headers.last().map(String::as_str), Some(KEY_COLUMN));
        assert_eq!(keyed.rows[0][2], "maroon, gold");
        assert_eq!(keyed.rows[1][2], "");
    }
}
