
use std::path::Path;

use crate::data_types::comparison_report::ComparisonReport;
use crate::util::table_io::open_table_writer;

/// Placeholder for the self-comparison cells, which are never computed
pub const DIAGONAL_PLACEHOLDER: &str = "--";

/// Writes the sample-by-sample mismatch matrix with sample names as row and column labels.
/// Samples are in input order.
/// # Arguments
/// * `report` - the comparison results
/// * `filename` - the output path (tsv/csv)
/// # Errors
/// * if the file cannot be created or written
pub fn write_mismatch_table(report: &ComparisonReport, filename: &Path) -> csv::Result<()> {
    let mut csv_writer = open_table_writer(filename)?;

    let mut header = vec!["sample".to_string()];
    header.extend(report.samples().iter().map(|s| s.name().to_string()));
    csv_writer.write_record(&header)?;

    for (i, (sample, distances)) in report.samples().iter().zip(report.mismatches().rows()).enumerate() {
        let mut row = vec![sample.name().to_string()];
        row.extend(distances.iter().enumerate().map(|(j, d)| {
            if i == j {
                DIAGONAL_PLACEHOLDER.to_string()
            } else {
                d.to_string()
            }
        }));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
