
use serde::Serialize;
use std::path::Path;

use crate::data_types::comparison_report::ComparisonReport;
use crate::util::table_io::open_table_writer;

/// Contains all the data written to each row of the group file
#[derive(Serialize)]
struct GroupRow<'a> {
    /// Index of the group, in first-occurrence order
    group: usize,
    /// Position of the sample within its group
    member_index: usize,
    /// Index of the sample in the input order
    sample_index: usize,
    /// Sample label
    sample: &'a str,
    /// True for the sample that opened the group
    is_seed: bool,
    /// Number of panel loci that differ from the reference
    variant_loci: usize
}

/// Writes one row per sample describing the group it belongs to
/// # Arguments
/// * `report` - the comparison results
/// * `filename` - the output path (tsv/csv)
/// # Errors
/// * if the file cannot be created or written
pub fn write_group_table(report: &ComparisonReport, filename: &Path) -> csv::Result<()> {
    let mut csv_writer = open_table_writer(filename)?;

    for (g_index, group) in report.groups().iter().enumerate() {
        for (member_index, &sample_index) in group.members().iter().enumerate() {
            let sample = &report.samples()[sample_index];
            let row = GroupRow {
                group: g_index,
                member_index,
                sample_index,
                sample: sample.name(),
                is_seed: member_index == 0,
                variant_loci: sample.num_variants()
            };
            csv_writer.serialize(&row)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
