
/// Command line interface functionality
pub mod cli;
/// Runs the full comparison from input files to a report
pub mod comparison;
/// Contains various shared data types
pub mod data_types;
/// Partitions samples into groups of identical calls
pub mod grouping;
/// Computes the pairwise sample mismatch matrix
pub mod mismatch_solver;
/// Aligns parsed calls to the reference panel
pub mod normalizer;
/// Tooling for parsing input files into meaningful structs / data
pub mod parsing;
/// Various utility functions that tend to be very generic
pub mod util;
/// All output writers
pub mod writers;
