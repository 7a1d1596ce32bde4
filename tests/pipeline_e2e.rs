// tests/pipeline_e2e.rs
//
// Full run over a small school table on disk.
//
use std::fs;
use std::path::Path;

use colorsort::config::options::{CatalogSource, PipelineOptions};
use colorsort::file::prepare_outputs;
use colorsort::partition::MANIFEST_FILE;
use colorsort::progress::{NullProgress, Progress};
use colorsort::reduce::OTHER;
use colorsort::runner::run;
use colorsort::{ComboCount, DataSet, Error, Vocabulary};

const SCHOOLS: &str = "\
school_name,address,mascot,colors
Adams High,1 Main St,Eagles,\"Red, White\"
Baker High,2 Oak Ave,Bears,Red & White
Clark High,3 Elm Rd,Cougars,\"Red, White, Blue\"
Davis High,4 Pine Ln,Dragons,\"Navy, Gold\"
Evans High,5 Birch Ct,Eels,\"Navy, Gold\"
Ford High,6 Cedar Dr,Falcons,\"Black, Gold\"
Grant High,7 Ash Way,Giants,\"Purple, Sunset Orange\"
Hayes High,8 Fir St,Hawks,
Irving High,9 Palm Rd,Ibis,Teal
Irving High,9 Palm Rd,Ibis,Teal
Jones High,10 Oak Ave,Jays,\"Sky, Red\"
";

fn setup(dir: &Path) -> PipelineOptions {
    let opts = PipelineOptions::rooted_at(dir);
    fs::write(&opts.input, SCHOOLS).unwrap();
    prepare_outputs(&opts).unwrap();
    opts
}

#[derive(Default)]
struct Recorder {
    stages: Vec<String>,
    files: usize,
    finished: bool,
}

impl Progress for Recorder {
    fn stage(&mut self, name: &str) { self.stages.push(name.to_string()); }
    fn wrote(&mut self, _path: &Path) { self.files += 1; }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn end_to_end_counts() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = setup(tmp.path());
    opts.threshold = 3;

    let mut rec = Recorder::default();
    let s = run(&opts, &Vocabulary::default(), Some(&mut rec)).unwrap();

    assert_eq!(s.input_rows, 11);
    assert_eq!(s.missing_colors, 1);
    assert_eq!(s.accepted, 8);
    assert_eq!(s.rejected, 2);
    assert_eq!(s.unique_keys, 4);
    assert_eq!(s.unkeyed, 0);

    let r = &s.reduction;
    assert_eq!(r.kept(), [ComboCount::new("red white", 3)]);
    assert_eq!(
        r.below(),
        [
            ComboCount::new("navy gold", 2),
            ComboCount::new("teal", 2),
            ComboCount::new("black gold", 1),
        ]
    );
    assert_eq!(r.other(), &ComboCount::new(OTHER, 5));
    assert_eq!(r.total(), s.accepted);

    assert_eq!(rec.stages.len(), 6);
    assert_eq!(rec.files, 1 + s.files_written.len());
    assert!(rec.finished);
}

#[test]
fn rejected_rows_land_in_diff_file() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    run(&opts, &Vocabulary::default(), None).unwrap();

    let diff = DataSet::load(&opts.diff_out).unwrap();
    assert_eq!(diff.headers, vec!["school_name", "address", "mascot", "colors"]);
    let names: Vec<_> = diff.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, ["Grant High", "Jones High"]);
}

#[test]
fn manifest_catalog_has_exact_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = setup(tmp.path());
    opts.catalog = CatalogSource::Manifest;
    opts.threshold = 2;

    let s = run(&opts, &Vocabulary::default(), None).unwrap();
    let kept: Vec<_> = s.reduction.kept().iter().map(|c| c.combo.as_str()).collect();
    assert_eq!(kept, ["red, white", "navy, gold", "teal"]);
    assert_eq!(s.reduction.other().count, 1);
}

#[test]
fn custom_vocabulary_changes_acceptance() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    let vocab = Vocabulary::new(["Sky", "Red", "Teal"]);

    let s = run(&opts, &vocab, None).unwrap();
    // "Red, White, Blue" fails on "white"; "Sky, Red" and both Teal rows pass
    assert_eq!(s.accepted, 3);
    assert_eq!(s.rejected, 7);
}

#[test]
fn rerun_replaces_previous_partitions() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    run(&opts, &Vocabulary::default(), None).unwrap();

    // Drop one Red/White school; its partition file name changes from _3 to _2.
    let fewer = SCHOOLS.replace("Baker High,2 Oak Ave,Bears,Red & White\n", "");
    fs::write(&opts.input, fewer).unwrap();
    let s = run(&opts, &Vocabulary::default(), None).unwrap();

    assert!(!opts.groups_dir.join("red_white_3.csv").exists());
    assert!(opts.groups_dir.join("red_white_2.csv").is_file());
    assert_eq!(s.reduction.total(), s.accepted);
}

#[test]
fn missing_colors_column_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    fs::write(&opts.input, "school_name,mascot\nA,B\n").unwrap();
    let err = run(&opts, &Vocabulary::default(), None).unwrap_err();
    assert!(matches!(err, Error::MissingColorsColumn { .. }), "{err}");
}

#[test]
fn missing_groups_dir_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    fs::remove_dir(&opts.groups_dir).unwrap();
    let err = run(&opts, &Vocabulary::default(), None).unwrap_err();
    assert!(matches!(err, Error::MissingDirectory { .. }), "{err}");
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn collision_keeps_previous_partitions() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    let vocab = Vocabulary::new(["Red", "White", "Red White"]);
    fs::write(&opts.input, "school_name,colors\nAdams,\"Red, White\"\n").unwrap();
    run(&opts, &vocab, Some(&mut NullProgress)).unwrap();
    let before = file_names(&opts.groups_dir);
    assert_eq!(before, [MANIFEST_FILE, "red_white_1.csv"]);

    // "red white" and "red, white" share the stem "red_white"
    fs::write(&opts.input, "school_name,colors\nAdams,\"Red, White\"\nBaker,Red White\n").unwrap();
    let err = run(&opts, &vocab, Some(&mut NullProgress)).unwrap_err();
    assert!(matches!(err, Error::StemCollision { .. }), "{err}");

    assert_eq!(file_names(&opts.groups_dir), before);
}

#[test]
fn whitespace_only_colors_are_unkeyed_not_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(tmp.path());
    fs::write(&opts.input, "school_name,colors\nAdams,Red\nBaker,\"  \"\nClark,\n").unwrap();

    let s = run(&opts, &Vocabulary::default(), Some(&mut NullProgress)).unwrap();
    assert_eq!(s.missing_colors, 1);
    assert_eq!(s.accepted, 2);
    assert_eq!(s.unkeyed, 1);
    assert_eq!(s.unique_keys, 1);
}
