
use indexmap::IndexMap;
use serde::Serialize;

/// Marker used for reference alleles that are too long to be compared
pub const UNRESOLVED_ALLELE: &str = "-";
/// Reference alleles longer than this many characters are collapsed to the unresolved marker
pub const MAX_REFERENCE_ALLELE_LEN: usize = 2;

/// A single locus in the reference panel
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PanelEntry {
    /// The locus accession, e.g. "rs1234"
    accession: String,
    /// The expected allele at this locus, already normalized
    reference_allele: String
}

impl PanelEntry {
    /// Creates a new entry, collapsing any reference allele longer than two characters to `-`.
    /// # Arguments
    /// * `accession` - the locus accession
    /// * `raw_allele` - the reference allele as found in the input
    pub fn new(accession: String, raw_allele: &str) -> Self {
        let reference_allele = if raw_allele.chars().count() > MAX_REFERENCE_ALLELE_LEN {
            UNRESOLVED_ALLELE.to_string()
        } else {
            raw_allele.to_string()
        };
        Self {
            accession,
            reference_allele
        }
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    /// Returns true if the reference allele was collapsed to the unresolved marker
    pub fn is_unresolved(&self) -> bool {
        self.reference_allele == UNRESOLVED_ALLELE
    }
}

/// The ordered list of loci that every sample gets compared against.
/// The order of the entries is the canonical locus order for all downstream tables.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferencePanel {
    entries: Vec<PanelEntry>
}

impl ReferencePanel {
    /// Wraps a pre-built list of entries, duplicates are kept as-is
    pub fn new(entries: Vec<PanelEntry>) -> Self {
        Self {
            entries
        }
    }

    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (accession, reference allele) pairs in panel order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter()
            .map(|e| (e.accession(), e.reference_allele()))
    }

    /// Converts the panel into a lookup table; duplicated accessions keep their first position but the last allele.
    pub fn to_lookup(&self) -> IndexMap<String, String> {
        self.iter()
            .map(|(a, r)| (a.to_string(), r.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allele_collapse() {
        let single = PanelEntry::new("rs1".to_string(), "A");
        assert_eq!(single.reference_allele(), "A");
        assert!(!single.is_unresolved());

        let double = PanelEntry::new("rs2".to_string(), "GG");
        assert_eq!(double.reference_allele(), "GG");

        let triple = PanelEntry::new("rs3".to_string(), "ACG");
        assert_eq!(triple.reference_allele(), UNRESOLVED_ALLELE);
        assert!(triple.is_unresolved());
    }

    #[test]
    fn test_duplicate_lookup() {
        let panel = ReferencePanel::new(vec![
            PanelEntry::new("rs1".to_string(), "A"),
            PanelEntry::new("rs2".to_string(), "C"),
            PanelEntry::new("rs1".to_string(), "T"),
        ]);

        // both copies are kept in the panel itself
        assert_eq!(panel.len(), 3);

        let lookup = panel.to_lookup();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("rs1").map(|s| s.as_str()), Some("T"));
        assert_eq!(lookup.get("rs2").map(|s| s.as_str()), Some("C"));
        assert!(!lookup.contains_key("rs3"));
        assert_eq!(lookup.get_index(0), Some((&"rs1".to_string(), &"T".to_string())));
    }
}
