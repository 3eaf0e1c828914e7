
use indexmap::IndexMap;

use crate::data_types::normalized_call::{CallClass, NormalizedCall, Sample};
use crate::data_types::reference_panel::ReferencePanel;
use crate::data_types::sample_calls::SampleCalls;

/// Aligns a sample's calls to the reference panel.
/// The output has exactly one call per panel entry, in panel order.
/// Loci that were not called get the reference allele.
/// # Arguments
/// * `calls` - the parsed calls for one sample
/// * `panel` - the reference panel to align against
pub fn normalize_calls(calls: &SampleCalls, panel: &ReferencePanel) -> Vec<NormalizedCall> {
    panel.iter()
        .map(|(accession, reference_allele)| {
            match calls.get(accession) {
                Some(call) => {
                    let class = if call.zygosity().is_heterozygous() {
                        CallClass::Heterozygous
                    } else {
                        CallClass::Homozygous
                    };
                    NormalizedCall::new(call.allele().to_string(), class)
                },
                None => NormalizedCall::new(reference_allele.to_string(), CallClass::Reference)
            }
        })
        .collect()
}

/// Builds a named sample from parsed calls
/// # Arguments
/// * `name` - the sample label
/// * `calls` - the parsed calls for this sample
/// * `panel` - the reference panel to align against
pub fn build_sample(name: String, calls: &SampleCalls, panel: &ReferencePanel) -> Sample {
    Sample::new(name, normalize_calls(calls, panel))
}

/// Finds the called accessions that are not in the panel; these calls never reach the normalized output.
/// The result is sorted so that logs are stable between runs.
/// # Arguments
/// * `calls` - the parsed calls for one sample
/// * `panel_lookup` - accession lookup built with `ReferencePanel::to_lookup`
pub fn unpaneled_accessions<'a>(calls: &'a SampleCalls, panel_lookup: &IndexMap<String, String>) -> Vec<&'a str> {
    let mut missing: Vec<&str> = calls.accessions()
        .filter(|a| !panel_lookup.contains_key(*a))
        .collect();
    missing.sort_unstable();
    missing
}
