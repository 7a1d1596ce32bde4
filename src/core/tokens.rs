// src/core/tokens.rs
//! Shared normalization for raw `colors` strings.

/// Characters that separate colors in a raw description.
pub const SEPARATORS: [char; 2] = [',', '&'];

/// How many leading tokens are judged and kept.
pub const WINDOW: usize = 2;

/// Split on `,`/`&`, trim, drop empties, lowercase.
///
/// `"Navy & Old Gold, White"` → `["navy", "old gold", "white"]`
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(SEPARATORS)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// First `WINDOW` tokens when there are more than that, otherwise all of them.
pub fn selected(tokens: &[String]) -> &[String] {
    &tokens[..tokens.len().min(WINDOW)]
}
