
use serde::Serialize;

/// A set of samples with zero mismatch distance to the seed sample.
/// Members are sample indices; the seed is always the first member.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleGroup {
    members: Vec<usize>
}

impl SampleGroup {
    /// Opens a new group containing only the seed
    pub fn new(seed: usize) -> Self {
        Self {
            members: vec![seed]
        }
    }

    /// Appends a matching sample to the group
    pub fn push(&mut self, index: usize) {
        self.members.push(index);
    }

    pub fn seed(&self) -> usize {
        self.members[0]
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false, a group has at least its seed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True if the group contains more than just the seed
    pub fn has_matches(&self) -> bool {
        self.members.len() > 1
    }
}
