// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "data/school_data.csv";

// Output
pub const DEFAULT_DIFF_OUT: &str = "data/school_data_diff.csv";
pub const DEFAULT_GROUPS_DIR: &str = "data/grouped_data3";

// Reduction
pub const DEFAULT_THRESHOLD: usize = 10;
