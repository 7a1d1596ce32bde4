// src/core/sanitize.rs

/// File-stem form of a canonical key:
/// space → `_`, `&` → `and`, commas dropped, `/` → `_`.
/// Not invertible; `partition::parse_file_name` only recovers a space-joined approximation.
pub fn partition_stem(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            ' ' | '/' => out.push('_'),
            '&' => out.push_str("and"),
            ',' => {}
            c => out.push(c),
        }
    }
    out
}

/// `{stem}_{count}.csv`
pub fn partition_file_name(key: &str, count: usize) -> String {
    format!("{}_{count}.csv", partition_stem(key))
}
