
use serde::Serialize;
use strum_macros::AsRefStr;

/// Classification of a call relative to the reference panel
#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum CallClass {
    /// Not called as a variant, shows the reference allele
    #[strum(serialize = "ref")]
    #[serde(rename = "ref")]
    Reference,
    /// Called as a heterozygous variant
    #[strum(serialize = "het")]
    #[serde(rename = "het")]
    Heterozygous,
    /// Called as a homozygous variant
    #[strum(serialize = "homo")]
    #[serde(rename = "homo")]
    Homozygous
}

/// The per-locus outcome for one sample, used for all comparisons
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NormalizedCall {
    /// The displayed allele, either the called allele or the reference allele
    allele: String,
    /// What kind of call this is
    class: CallClass
}

impl NormalizedCall {
    pub fn new(allele: String, class: CallClass) -> Self {
        Self {
            allele,
            class
        }
    }

    pub fn allele(&self) -> &str {
        &self.allele
    }

    pub fn class(&self) -> CallClass {
        self.class
    }

    /// Returns true if this call does not match the reference
    pub fn is_variant(&self) -> bool {
        self.class != CallClass::Reference
    }
}

/// A named sample with calls that are aligned to the reference panel it was built from
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Sample {
    /// Sample label, typically the file stem of the source table
    name: String,
    /// One call per panel locus, in panel order
    calls: Vec<NormalizedCall>
}

impl Sample {
    pub fn new(name: String, calls: Vec<NormalizedCall>) -> Self {
        Self {
            name,
            calls
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calls(&self) -> &[NormalizedCall] {
        &self.calls
    }

    /// Number of loci, which matches the length of the source panel
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of loci that differ from the reference
    pub fn num_variants(&self) -> usize {
        self.calls.iter()
            .filter(|c| c.is_variant())
            .count()
    }
}
