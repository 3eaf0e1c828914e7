
use std::path::Path;

/// Picks the delimiter for a table output: `,` for `.csv` paths, a tab otherwise
pub fn table_delimiter(filename: &Path) -> u8 {
    let is_csv: bool = filename.extension().unwrap_or_default() == "csv";
    if is_csv { b',' } else { b'\t' }
}

/// Opens a table writer with the delimiter matching the file extension
/// # Errors
/// * if the file cannot be created
pub fn open_table_writer(filename: &Path) -> csv::Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .delimiter(table_delimiter(filename))
        .from_path(filename)
}
