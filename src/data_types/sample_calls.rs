
use rustc_hash::FxHashMap as HashMap;
use strum_macros::{AsRefStr, EnumString};

/// The zygosity tag exactly as it was written by the instrument
#[derive(AsRefStr, Clone, Copy, Debug, EnumString, Eq, Hash, PartialEq)]
pub enum ZygosityTag {
    #[strum(serialize = "het")]
    Het,
    #[strum(serialize = "homo")]
    Homo,
    #[strum(serialize = "hom")]
    Hom
}

impl ZygosityTag {
    /// Only the literal `het` tag is heterozygous, anything else is treated as homozygous
    pub fn is_heterozygous(&self) -> bool {
        matches!(self, ZygosityTag::Het)
    }
}

/// A variant call for one locus in one sample
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    /// The called allele, one or more of `TAGC`
    allele: String,
    /// The raw zygosity tag
    zygosity: ZygosityTag
}

impl Call {
    pub fn new(allele: String, zygosity: ZygosityTag) -> Self {
        Self {
            allele,
            zygosity
        }
    }

    pub fn allele(&self) -> &str {
        &self.allele
    }

    pub fn zygosity(&self) -> ZygosityTag {
        self.zygosity
    }
}

/// All variant calls parsed from one sample table, keyed by accession.
/// Loci without an entry match the reference.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleCalls {
    /// Accession to call lookup
    calls: HashMap<String, Call>,
    /// Number of lines that were accepted as call records, including overwritten ones
    matched_lines: usize
}

impl SampleCalls {
    /// Adds a call; if the accession was already called, the new call replaces the old one.
    /// Returns the replaced call if there was one.
    pub fn insert(&mut self, accession: String, call: Call) -> Option<Call> {
        self.matched_lines += 1;
        self.calls.insert(accession, call)
    }

    pub fn get(&self, accession: &str) -> Option<&Call> {
        self.calls.get(accession)
    }

    /// Iterates over the called accessions, in no particular order
    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.calls.keys().map(|a| a.as_str())
    }

    /// Number of distinct accessions with a call
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn matched_lines(&self) -> usize {
        self.matched_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tag_parse() {
        assert_eq!(ZygosityTag::from_str("het").unwrap(), ZygosityTag::Het);
        assert_eq!(ZygosityTag::from_str("homo").unwrap(), ZygosityTag::Homo);
        assert_eq!(ZygosityTag::from_str("hom").unwrap(), ZygosityTag::Hom);
        assert!(ZygosityTag::from_str("HET").is_err());
        assert_eq!(ZygosityTag::Hom.as_ref(), "hom");

        assert!(ZygosityTag::Het.is_heterozygous());
        assert!(!ZygosityTag::Homo.is_heterozygous());
        assert!(!ZygosityTag::Hom.is_heterozygous());
    }

    #[test]
    fn test_later_call_wins() {
        let mut calls = SampleCalls::default();
        assert!(calls.insert("rs1".to_string(), Call::new("T".to_string(), ZygosityTag::Het)).is_none());
        let replaced = calls.insert("rs1".to_string(), Call::new("G".to_string(), ZygosityTag::Hom));
        assert_eq!(replaced, Some(Call::new("T".to_string(), ZygosityTag::Het)));

        assert_eq!(calls.len(), 1);
        assert_eq!(calls.matched_lines(), 2);
        assert_eq!(calls.get("rs1").unwrap().allele(), "G");
        assert_eq!(calls.get("rs1").unwrap().zygosity(), ZygosityTag::Hom);
    }
}
