
use serde::Serialize;

use crate::data_types::mismatch_matrix::MismatchMatrix;
use crate::data_types::normalized_call::Sample;
use crate::data_types::reference_panel::ReferencePanel;
use crate::data_types::sample_group::SampleGroup;

/// Everything a report renderer needs from one comparison run
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport {
    /// The reference panel, in canonical locus order
    panel: ReferencePanel,
    /// All samples, in input order
    samples: Vec<Sample>,
    /// Pairwise sample distances, indexed like `samples`
    mismatches: MismatchMatrix,
    /// Samples grouped by zero distance, members are indices into `samples`
    groups: Vec<SampleGroup>
}

impl ComparisonReport {
    pub fn new(panel: ReferencePanel, samples: Vec<Sample>, mismatches: MismatchMatrix, groups: Vec<SampleGroup>) -> Self {
        Self {
            panel, samples, mismatches, groups
        }
    }

    pub fn panel(&self) -> &ReferencePanel {
        &self.panel
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn mismatches(&self) -> &MismatchMatrix {
        &self.mismatches
    }

    pub fn groups(&self) -> &[SampleGroup] {
        &self.groups
    }

    /// Iterates over the samples in group order, tagged with their group index
    pub fn grouped_samples(&self) -> impl Iterator<Item = (usize, &Sample)> {
        self.groups.iter().enumerate()
            .flat_map(move |(g_index, group)| {
                group.members().iter()
                    .map(move |&s_index| (g_index, &self.samples[s_index]))
            })
    }
}
