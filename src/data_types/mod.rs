
/// Contains the bundled outputs of a full comparison run
pub mod comparison_report;
/// Dense sample-by-sample mismatch distances
pub mod mismatch_matrix;
/// Reference-aligned calls and the samples built from them
pub mod normalized_call;
/// Reference panel loci and their expected alleles
pub mod reference_panel;
/// Groups of samples that are indistinguishable on the panel
pub mod sample_group;
/// Raw calls as parsed from an instrument export
pub mod sample_calls;
