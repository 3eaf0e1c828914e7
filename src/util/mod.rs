
/// Helper functions for writing JSON via serde
pub mod json_io;
/// Helper functions for generating the progress bars
pub mod progress_bar;
/// Helpers for choosing table delimiters from file names
pub mod table_io;
