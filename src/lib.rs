// src/lib.rs
//! Canonicalize free-text team colors, group schools by color pair,
//! and reduce the groups to a "most common + Other" distribution.

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod canon;
pub mod csv;
pub mod diff;
pub mod error;
pub mod file;
pub mod logging;
pub mod partition;
pub mod progress;
pub mod reduce;
pub mod report;
pub mod runner;
pub mod store;
pub mod vocab;

pub use error::{Error, Result};
pub use partition::ComboCount;
pub use reduce::Reduction;
pub use store::DataSet;
pub use vocab::Vocabulary;
