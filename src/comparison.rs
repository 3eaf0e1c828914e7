/*!
# Comparison pipeline
Ties the parsers, the normalizer, the mismatch solver, and the grouper together.
Inputs are fully loaded before anything is compared, and any failure aborts the whole comparison.

## Example usage
```rust
use snp_matcher::comparison::compare_samples;
use snp_matcher::data_types::reference_panel::{PanelEntry, ReferencePanel};
use snp_matcher::mismatch_solver::MismatchConfig;
use snp_matcher::parsing::sample_table::parse_sample_table;

let panel = ReferencePanel::new(vec![
    PanelEntry::new("rs1".to_string(), "A"),
    PanelEntry::new("rs2".to_string(), "C"),
]);
let tables = vec![
    ("s0".to_string(), parse_sample_table("x -> T (het) y rs1 z".as_bytes()).unwrap()),
    ("s1".to_string(), parse_sample_table("no calls".as_bytes()).unwrap()),
    ("s2".to_string(), parse_sample_table("x -> T (het) y rs1 z".as_bytes()).unwrap()),
];

let report = compare_samples(panel, tables, MismatchConfig::default()).unwrap();
assert_eq!(report.mismatches().get(0, 1), 2);
assert_eq!(report.mismatches().get(0, 2), 0);
assert_eq!(report.groups()[0].members(), &[0, 2]);
```
*/
use anyhow::Context;
use indicatif::ParallelProgressIterator;
use log::{debug, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::data_types::comparison_report::ComparisonReport;
use crate::data_types::normalized_call::Sample;
use crate::data_types::reference_panel::ReferencePanel;
use crate::data_types::sample_calls::SampleCalls;
use crate::grouping::group_samples;
use crate::mismatch_solver::{compute_mismatch_matrix, MismatchConfig};
use crate::normalizer::{build_sample, unpaneled_accessions};
use crate::parsing::reference_panel::load_reference_panel;
use crate::parsing::sample_table::{load_sample_table, sample_name_from_path};
use crate::util::progress_bar::get_progress_style;

/// Loads every input file and runs the full comparison.
/// # Arguments
/// * `panel_fn` - the reference panel TSV
/// * `sample_fns` - one instrument export per sample, in report order
/// * `config` - mismatch computation settings
/// # Errors
/// * if any input file is missing or malformed
/// * if the samples cannot be compared
pub fn run_comparison(panel_fn: &Path, sample_fns: &[PathBuf], config: MismatchConfig) -> anyhow::Result<ComparisonReport> {
    info!("Loading reference panel...");
    let panel = load_reference_panel(panel_fn)
        .with_context(|| format!("Error while loading reference panel {panel_fn:?}:"))?;
    info!("Loaded {} reference loci.", panel.len());

    info!("Parsing {} sample tables...", sample_fns.len());
    let tables = load_sample_tables(sample_fns)?;

    compare_samples(panel, tables, config)
}

/// Parses all sample tables in parallel; the output keeps the input order.
/// # Errors
/// * if any of the tables fails to load
pub fn load_sample_tables(sample_fns: &[PathBuf]) -> anyhow::Result<Vec<(String, SampleCalls)>> {
    let style = get_progress_style();
    sample_fns.par_iter()
        .map(|filename| {
            let calls = load_sample_table(filename)
                .with_context(|| format!("Error while parsing sample table {filename:?}:"))?;
            Ok((sample_name_from_path(filename), calls))
        })
        .progress_with_style(style)
        .collect()
}

/// Runs the comparison on already parsed tables.
/// # Arguments
/// * `panel` - the reference panel every table is aligned to
/// * `tables` - (sample name, parsed calls) in report order
/// * `config` - mismatch computation settings
/// # Errors
/// * if the mismatch matrix or the groups cannot be built
pub fn compare_samples(panel: ReferencePanel, tables: Vec<(String, SampleCalls)>, config: MismatchConfig) -> anyhow::Result<ComparisonReport> {
    let panel_lookup = panel.to_lookup();
    let samples: Vec<Sample> = tables.into_iter()
        .map(|(name, calls)| {
            let unpaneled = unpaneled_accessions(&calls, &panel_lookup);
            if !unpaneled.is_empty() {
                debug!("\t{name}: ignoring {} call(s) outside the panel: {}", unpaneled.len(), unpaneled.join(", "));
            }
            build_sample(name, &calls, &panel)
        })
        .collect();
    for sample in samples.iter() {
        info!("\t{}: {} variant loci", sample.name(), sample.num_variants());
    }

    info!("Computing mismatch matrix...");
    let mismatches = compute_mismatch_matrix(&samples, config)
        .context("Error while computing mismatch matrix:")?;

    info!("Grouping samples...");
    let groups = group_samples(&samples, &mismatches)
        .context("Error while grouping samples:")?;
    info!("Found {} distinct group(s) across {} samples.", groups.len(), samples.len());

    Ok(ComparisonReport::new(panel, samples, mismatches, groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::normalized_call::CallClass;
    use std::fs::File;
    use std::io::Write;

    fn write_file(path: &Path, content: &str) {
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_run_comparison() {
        let folder = tempfile::tempdir().unwrap();
        let panel_fn = folder.path().join("panel.tsv");
        write_file(&panel_fn, "rs1\tA\nrs2\tGG\nrs3\tACG\n");

        let sample_fns: Vec<PathBuf> = ["alpha.txt", "beta.txt", "gamma.txt"].iter()
            .map(|n| folder.path().join(n))
            .collect();
        write_file(&sample_fns[0], "header\nc.1 -> T (het) ex1 rs1 30x\n");
        write_file(&sample_fns[1], "header\nc.1 -> T (homo) ex1 rs1 30x\nc.2 -> C (hom) ex2 rs2 12x\n");
        write_file(&sample_fns[2], "other header\nc.1 -> T (het) ex1 rs1 31x\n");

        let report = run_comparison(&panel_fn, &sample_fns, MismatchConfig::default()).unwrap();
        assert_eq!(report.panel().len(), 3);
        let names: Vec<&str> = report.samples().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);

        let beta = &report.samples()[1];
        assert_eq!(beta.calls()[0].class(), CallClass::Homozygous);
        assert_eq!(beta.calls()[1].allele(), "C");
        assert_eq!(beta.calls()[2].allele(), "-");

        // rs1 zygosity differs (1) and rs2 allele differs (2)
        assert_eq!(report.mismatches().get(0, 1), 3);
        assert_eq!(report.mismatches().get(1, 2), 3);
        assert_eq!(report.mismatches().get(0, 2), 0);

        let groups: Vec<Vec<usize>> = report.groups().iter().map(|g| g.members().to_vec()).collect();
        assert_eq!(groups, vec![vec![0, 2], vec![1]]);

        let grouped: Vec<(usize, &str)> = report.grouped_samples().map(|(g, s)| (g, s.name())).collect();
        assert_eq!(grouped, vec![(0, "alpha"), (0, "gamma"), (1, "beta")]);
    }

    #[test]
    fn test_missing_inputs() {
        let folder = tempfile::tempdir().unwrap();
        let panel_fn = folder.path().join("panel.tsv");
        let sample_fn = folder.path().join("sample.txt");

        // missing panel
        assert!(run_comparison(&panel_fn, &[sample_fn.clone()], MismatchConfig::default()).is_err());

        // missing sample
        write_file(&panel_fn, "rs1\tA\n");
        assert!(run_comparison(&panel_fn, &[sample_fn.clone()], MismatchConfig::default()).is_err());

        // malformed panel
        write_file(&sample_fn, "nothing\n");
        write_file(&panel_fn, "rs1\n");
        assert!(run_comparison(&panel_fn, &[sample_fn], MismatchConfig::default()).is_err());
    }
}
