// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::*;
use crate::config::options::{CatalogSource, PipelineOptions};
use crate::progress::Progress;
use crate::vocab::Vocabulary;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Catalog {
    /// Counts from partition file names
    Filenames,
    /// Counts and exact keys from manifest.json
    Manifest,
}

#[derive(Debug, Parser)]
#[command(name = "colorsort")]
#[command(about = "Group schools by team colors and summarize the most common color pairs")]
pub struct Cli {
    /// School table (CSV with a `colors` column)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where rows with unrecognized colors are written
    #[arg(long, default_value = DEFAULT_DIFF_OUT)]
    diff_out: PathBuf,

    /// Directory for the per-color-pair CSV files
    #[arg(long, default_value = DEFAULT_GROUPS_DIR)]
    groups_dir: PathBuf,

    /// Color pairs with fewer rows are folded into "Other"
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Color vocabulary file, one name per line (default: built-in list)
    #[arg(long)]
    vocab: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Catalog::Filenames)]
    catalog: Catalog,

    /// Keep partition files from a previous run
    #[arg(long)]
    no_prune: bool,

    /// Append debug log lines to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            input: self.input.clone(),
            diff_out: self.diff_out.clone(),
            groups_dir: self.groups_dir.clone(),
            threshold: self.threshold,
            catalog: match self.catalog {
                Catalog::Filenames => CatalogSource::FileNames,
                Catalog::Manifest => CatalogSource::Manifest,
            },
            prune: !self.no_prune,
        }
    }
}

/// Prints stage names to stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, stages: usize) { self.total = stages; }
    fn stage(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
        crate::logging::init(path, level).wrap_err("opening log file")?;
    }

    let vocab = match &cli.vocab {
        Some(p) => Vocabulary::load(p).wrap_err("loading color vocabulary")?,
        None => Vocabulary::default(),
    };

    let opts = cli.options();
    crate::file::prepare_outputs(&opts).wrap_err("preparing output directories")?;

    let mut progress = StderrProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, &vocab, Some(&mut progress))?;

    println!("Number of unique colors: {}", summary.unique_keys);
    println!("Number of total rows: {}", summary.accepted);
    println!(
        "Rejected {} rows -> {}",
        summary.rejected,
        summary.diff_path.display()
    );
    println!("Grouped CSV files saved to {}", opts.groups_dir.display());
    println!();
    print!("{}", crate::report::render(&summary.reduction));
    Ok(())
}
