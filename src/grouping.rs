
use anyhow::ensure;
use log::debug;

use crate::data_types::mismatch_matrix::MismatchMatrix;
use crate::data_types::normalized_call::Sample;
use crate::data_types::sample_group::SampleGroup;

/// Partitions samples into groups of zero mismatch distance.
/// Samples are visited in order; each unassigned sample seeds a new group that collects every other unassigned sample at distance 0 from the seed.
/// Assignment is tracked by index, so samples with identical content are still kept apart unless the matrix says they match.
/// # Arguments
/// * `samples` - all samples, in report order
/// * `matrix` - the mismatch matrix for `samples`
/// # Errors
/// * if the matrix size does not match the number of samples
pub fn group_samples(samples: &[Sample], matrix: &MismatchMatrix) -> anyhow::Result<Vec<SampleGroup>> {
    ensure!(
        matrix.size() == samples.len(),
        "mismatch matrix is {0}x{0}, but there are {1} samples", matrix.size(), samples.len()
    );

    let num_samples = samples.len();
    let mut assigned = vec![false; num_samples];
    let mut groups = vec![];
    for seed in 0..num_samples {
        if assigned[seed] {
            continue;
        }

        let mut group = SampleGroup::new(seed);
        let distances = matrix.row(seed);
        for (j, &distance) in distances.iter().enumerate() {
            if j != seed && distance == 0 && !assigned[j] {
                group.push(j);
            }
        }

        for &member in group.members() {
            assigned[member] = true;
        }

        if group.has_matches() {
            let names: Vec<&str> = group.members().iter()
                .map(|&m| samples[m].name())
                .collect();
            debug!("Identical samples: {names:?}");
        }
        groups.push(group);
    }

    Ok(groups)
}
