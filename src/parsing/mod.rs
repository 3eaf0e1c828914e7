/*!
# Parsing module
Contains the logic for parsing input files into meaningful structs / data.
*/
/// Loads the reference panel TSV
pub mod reference_panel;
/// Tokenizer for free-text instrument exports
pub mod sample_table;
