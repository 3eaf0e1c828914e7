/*!
# Writers module
Contains the logic for writing the comparison report to disk.
All outputs share a folder and a file prefix.
*/
/// Per-sample calls at every panel locus
pub mod calls_table;
/// Group membership of each sample
pub mod group_table;
/// Sample-by-sample mismatch distances
pub mod mismatch_table;

use anyhow::Context;
use log::info;
use std::path::{Path, PathBuf};

use crate::data_types::comparison_report::ComparisonReport;
use crate::util::json_io::save_json;
use crate::writers::calls_table::write_calls_table;
use crate::writers::group_table::write_group_table;
use crate::writers::mismatch_table::write_mismatch_table;

/// The set of output files generated for one report
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputPaths {
    pub calls: PathBuf,
    pub mismatches: PathBuf,
    pub groups: PathBuf,
    pub json: PathBuf
}

impl OutputPaths {
    /// Builds all output paths inside `folder` using `prefix`
    pub fn new(folder: &Path, prefix: &str) -> Self {
        Self {
            calls: folder.join(format!("{prefix}.calls.tsv")),
            mismatches: folder.join(format!("{prefix}.mismatches.tsv")),
            groups: folder.join(format!("{prefix}.groups.tsv")),
            json: folder.join(format!("{prefix}.report.json"))
        }
    }
}

/// Writes every output file for a finished comparison
/// # Arguments
/// * `report` - the comparison results
/// * `paths` - where each output goes
/// # Errors
/// * if any of the outputs fail to write
pub fn write_report_outputs(report: &ComparisonReport, paths: &OutputPaths) -> anyhow::Result<()> {
    info!("Saving sample calls to {:?}...", paths.calls);
    write_calls_table(report, &paths.calls)
        .with_context(|| format!("Error while writing {:?}:", paths.calls))?;

    info!("Saving mismatch matrix to {:?}...", paths.mismatches);
    write_mismatch_table(report, &paths.mismatches)
        .with_context(|| format!("Error while writing {:?}:", paths.mismatches))?;

    info!("Saving sample groups to {:?}...", paths.groups);
    write_group_table(report, &paths.groups)
        .with_context(|| format!("Error while writing {:?}:", paths.groups))?;

    info!("Saving full report to {:?}...", paths.json);
    save_json(report, &paths.json)?;
    Ok(())
}
