// src/core/mod.rs

pub mod sanitize;
pub mod tokens;

pub use tokens::{selected, tokenize};
