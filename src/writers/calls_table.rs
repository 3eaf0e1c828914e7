
use std::path::Path;

use crate::data_types::comparison_report::ComparisonReport;
use crate::util::table_io::open_table_writer;

/// Label in the first column of the reference allele row
pub const REFERENCE_ROW_LABEL: &str = "#reference";

/// Writes one row per sample with its call at every panel locus.
/// Rows are in group order, and each cell is formatted as `allele:class`.
/// The header row holds the accessions and is followed by a row with the reference alleles.
/// # Arguments
/// * `report` - the comparison results
/// * `filename` - the output path (tsv/csv)
/// # Errors
/// * if the file cannot be created or written
pub fn write_calls_table(report: &ComparisonReport, filename: &Path) -> csv::Result<()> {
    let mut csv_writer = open_table_writer(filename)?;

    let mut header = vec!["group".to_string(), "sample".to_string()];
    header.extend(report.panel().iter().map(|(accession, _)| accession.to_string()));
    csv_writer.write_record(&header)?;

    let mut reference_row = vec![String::new(), REFERENCE_ROW_LABEL.to_string()];
    reference_row.extend(report.panel().iter().map(|(_, allele)| allele.to_string()));
    csv_writer.write_record(&reference_row)?;

    for (g_index, sample) in report.grouped_samples() {
        let mut row = vec![g_index.to_string(), sample.name().to_string()];
        row.extend(sample.calls().iter().map(|c| format!("{}:{}", c.allele(), c.class().as_ref())));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
