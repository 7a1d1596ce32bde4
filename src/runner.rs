// src/runner.rs
//! One batch run: raw table in, reduced distribution out.
//!
//! ```text
//! load → drop missing colors → split by vocabulary ─┬─ rejected → diff CSV
//!                                                   └─ accepted → keys → partitions
//!                                                        → catalog → reduce
//! ```
use std::path::PathBuf;

use crate::canon::with_keys;
use crate::config::options::{CatalogSource, PipelineOptions};
use crate::diff::diff;
use crate::error::Result;
use crate::partition::{self, ComboCount, PartitionPlan};
use crate::progress::Progress;
use crate::reduce::{Reduction, reduce};
use crate::store::DataSet;
use crate::vocab::Vocabulary;

const STAGES: [&str; 6] = ["load", "match", "diff", "partition", "catalog", "reduce"];

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Rows in the input file.
    pub input_rows: usize,
    /// Rows removed for a missing/blank `colors` cell.
    pub missing_colors: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Accepted rows whose description had no tokens, so no key.
    pub unkeyed: usize,
    pub unique_keys: usize,
    pub diff_path: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub reduction: Reduction,
}

fn stage(progress: &mut Option<&mut dyn Progress>, name: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage(name);
    }
    log::info!("stage: {name}");
}

/// Run the whole pipeline. Output directories must already exist
/// (see `file::prepare_outputs`).
pub fn run(
    opts: &PipelineOptions,
    vocab: &Vocabulary,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES.len());
    }

    stage(&mut progress, STAGES[0]);
    let mut original = DataSet::load(&opts.input)?;
    let input_rows = original.len();
    let missing_colors = original.drop_missing_colors();
    log::info!("{input_rows} rows loaded from {}; {missing_colors} without colors", opts.input.display());

    stage(&mut progress, STAGES[1]);
    let (accepted, _) = original.split_by_colors(|c| vocab.accepts(c));
    log::info!("{} of {} rows accepted", accepted.len(), original.len());

    stage(&mut progress, STAGES[2]);
    let rejected = diff(&original, &accepted);
    rejected.save(&opts.diff_out)?;

    stage(&mut progress, STAGES[3]);
    // Plan first: a collision must fail before the previous run is pruned.
    let plan = PartitionPlan::new(&with_keys(&accepted))?;
    let report = plan.commit(&opts.groups_dir, opts.prune)?;

    stage(&mut progress, STAGES[4]);
    let catalog: Vec<ComboCount> = match opts.catalog {
        CatalogSource::FileNames => partition::read_catalog(&opts.groups_dir)?,
        CatalogSource::Manifest => partition::read_manifest(&opts.groups_dir)?.catalog(),
    };

    stage(&mut progress, STAGES[5]);
    let reduction = reduce(catalog, opts.threshold);

    if let Some(p) = progress.as_deref_mut() {
        p.wrote(&opts.diff_out);
        for f in &report.files {
            p.wrote(f);
        }
        p.finish();
    }

    Ok(RunSummary {
        input_rows,
        missing_colors,
        accepted: accepted.len(),
        rejected: rejected.len(),
        unkeyed: report.skipped,
        unique_keys: report.manifest.partitions.len(),
        diff_path: opts.diff_out.clone(),
        files_written: report.files,
        reduction,
    })
}
