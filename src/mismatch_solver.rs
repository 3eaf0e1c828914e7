/*!
# Mismatch solver
Computes the pairwise mismatch distances between samples.
At each locus, a differing allele costs 2 (one per strand) and a matching allele with a different classification costs 1.

## Example usage
```rust
use snp_matcher::data_types::normalized_call::{CallClass, NormalizedCall, Sample};
use snp_matcher::mismatch_solver::{compute_mismatch_matrix, MismatchConfig};

let reference = NormalizedCall::new("A".to_string(), CallClass::Reference);
let het = NormalizedCall::new("A".to_string(), CallClass::Heterozygous);
let alt = NormalizedCall::new("G".to_string(), CallClass::Homozygous);
let samples = vec![
    Sample::new("s0".to_string(), vec![reference.clone(), reference.clone()]),
    Sample::new("s1".to_string(), vec![het, alt]),
];

let matrix = compute_mismatch_matrix(&samples, MismatchConfig::default()).unwrap();
assert_eq!(matrix.get(0, 1), 3);
assert_eq!(matrix.get(1, 0), 3);
assert_eq!(matrix.get(0, 0), 0);
```
*/
use derive_builder::Builder;
use log::{debug, warn};
use rayon::prelude::*;

use crate::data_types::mismatch_matrix::MismatchMatrix;
use crate::data_types::normalized_call::{NormalizedCall, Sample};

/// Penalty for loci where the displayed alleles differ
pub const ALLELE_MISMATCH_PENALTY: u64 = 2;
/// Penalty for loci with the same allele but a different classification
pub const CLASS_MISMATCH_PENALTY: u64 = 1;

#[derive(thiserror::Error, Debug)]
pub enum MismatchError {
    #[error("sample {sample:?} has {found} calls, expected {expected}; samples must be built from the same reference panel")]
    ShapeMismatch { sample: String, expected: usize, found: usize }
}

/// Controls how the mismatch matrix is computed
#[derive(Builder, Clone, Copy, Default)]
#[builder(default)]
pub struct MismatchConfig {
    /// if true, samples with different call counts are compared over their shared prefix instead of failing
    allow_truncation: bool
}

impl MismatchConfig {
    pub fn allow_truncation(&self) -> bool {
        self.allow_truncation
    }
}

/// Computes the mismatch distance between two call sequences.
/// Sequences are compared positionally; if lengths differ, the extra calls are not scored.
/// # Arguments
/// * `a` - the first call sequence
/// * `b` - the second call sequence
pub fn call_distance(a: &[NormalizedCall], b: &[NormalizedCall]) -> u64 {
    a.iter().zip(b.iter())
        .map(|(call_a, call_b)| {
            if call_a.allele() != call_b.allele() {
                ALLELE_MISMATCH_PENALTY
            } else if call_a.class() != call_b.class() {
                CLASS_MISMATCH_PENALTY
            } else {
                0
            }
        })
        .sum()
}

/// Convenience wrapper around `call_distance` for two samples
pub fn sample_distance(a: &Sample, b: &Sample) -> u64 {
    call_distance(a.calls(), b.calls())
}

/// Computes the full NxN mismatch matrix.
/// Every off-diagonal cell is computed on its own, the diagonal is left at 0.
/// # Arguments
/// * `samples` - all samples, which should share a reference panel
/// * `config` - controls the handling of unequal sample lengths
/// # Errors
/// * if the samples have different numbers of calls and truncation is not allowed
pub fn compute_mismatch_matrix(samples: &[Sample], config: MismatchConfig) -> Result<MismatchMatrix, MismatchError> {
    check_shapes(samples, config)?;

    let num_samples = samples.len();
    let values: Vec<u64> = (0..num_samples * num_samples)
        .into_par_iter()
        .map(|cell| {
            let (i, j) = (cell / num_samples, cell % num_samples);
            if i == j {
                0
            } else {
                sample_distance(&samples[i], &samples[j])
            }
        })
        .collect();

    debug!("Computed {} off-diagonal mismatch cells", num_samples * num_samples.saturating_sub(1));
    Ok(MismatchMatrix::from_row_major(num_samples, values))
}

/// Verifies that all samples have as many calls as the first one
fn check_shapes(samples: &[Sample], config: MismatchConfig) -> Result<(), MismatchError> {
    let Some(first) = samples.first() else {
        return Ok(());
    };

    let expected = first.len();
    for sample in samples.iter().skip(1) {
        if sample.len() != expected {
            if config.allow_truncation() {
                warn!("Sample {:?} has {} calls, expected {expected}; comparing the shared prefix only", sample.name(), sample.len());
            } else {
                return Err(MismatchError::ShapeMismatch {
                    sample: sample.name().to_string(),
                    expected,
                    found: sample.len()
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::normalized_call::CallClass;

    fn sample(name: &str, calls: &[(&str, CallClass)]) -> Sample {
        Sample::new(
            name.to_string(),
            calls.iter()
                .map(|&(allele, class)| NormalizedCall::new(allele.to_string(), class))
                .collect()
        )
    }

    fn test_samples() -> Vec<Sample> {
        vec![
            sample("s0", &[("A", CallClass::Reference), ("T", CallClass::Heterozygous), ("G", CallClass::Reference)]),
            sample("s1", &[("A", CallClass::Reference), ("T", CallClass::Heterozygous), ("G", CallClass::Reference)]),
            sample("s2", &[("A", CallClass::Reference), ("C", CallClass::Heterozygous), ("G", CallClass::Reference)]),
            sample("s3", &[("A", CallClass::Homozygous), ("T", CallClass::Homozygous), ("g", CallClass::Reference)]),
        ]
    }

    #[test]
    fn test_call_distance() {
        let samples = test_samples();
        assert_eq!(sample_distance(&samples[0], &samples[1]), 0);
        assert_eq!(sample_distance(&samples[0], &samples[2]), 2);
        // class mismatch, class mismatch, case-sensitive allele mismatch
        assert_eq!(sample_distance(&samples[0], &samples[3]), 1 + 1 + 2);
        // allele mismatch outranks the class mismatch at the same locus
        assert_eq!(sample_distance(&samples[2], &samples[3]), 1 + 2 + 2);
    }

    #[test]
    fn test_reflexive_and_symmetric() {
        let samples = test_samples();
        for a in samples.iter() {
            assert_eq!(sample_distance(a, a), 0);
            for b in samples.iter() {
                assert_eq!(sample_distance(a, b), sample_distance(b, a));
            }
        }
    }

    #[test]
    fn test_matrix() {
        let samples = test_samples();
        let matrix = compute_mismatch_matrix(&samples, MismatchConfig::default()).unwrap();
        assert_eq!(matrix, MismatchMatrix::from_rows(&[
            vec![0, 0, 2, 4],
            vec![0, 0, 2, 4],
            vec![2, 2, 0, 5],
            vec![4, 4, 5, 0],
        ]));
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_identical_and_single_difference() {
        let samples = vec![
            sample("a", &[("A", CallClass::Reference), ("C", CallClass::Reference)]),
            sample("b", &[("A", CallClass::Reference), ("C", CallClass::Reference)]),
            sample("c", &[("A", CallClass::Reference), ("T", CallClass::Homozygous)]),
        ];
        let matrix = compute_mismatch_matrix(&samples, MismatchConfig::default()).unwrap();
        assert_eq!(matrix.get(0, 1), 0);
        assert_eq!(matrix.get(2, 0), 2);
        assert_eq!(matrix.get(2, 1), 2);
    }

    #[test]
    fn test_shape_mismatch() {
        let samples = vec![
            sample("a", &[("A", CallClass::Reference), ("C", CallClass::Reference)]),
            sample("b", &[("A", CallClass::Reference)]),
        ];
        let result = compute_mismatch_matrix(&samples, MismatchConfig::default());
        match result {
            Err(MismatchError::ShapeMismatch { sample, expected, found }) => {
                assert_eq!(sample, "b");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            },
            other => panic!("expected ShapeMismatch, got {other:?}")
        }

        // the legacy behavior only compares the shared prefix
        let config = MismatchConfigBuilder::default()
            .allow_truncation(true)
            .build().unwrap();
        let matrix = compute_mismatch_matrix(&samples, config).unwrap();
        assert_eq!(matrix.get(0, 1), 0);
        assert_eq!(matrix.get(1, 0), 0);
    }

    #[test]
    fn test_trivial_inputs() {
        let matrix = compute_mismatch_matrix(&[], MismatchConfig::default()).unwrap();
        assert_eq!(matrix.size(), 0);

        let single = vec![sample("a", &[("A", CallClass::Reference)])];
        let matrix = compute_mismatch_matrix(&single, MismatchConfig::default()).unwrap();
        assert_eq!(matrix, MismatchMatrix::zeros(1));
    }
}
