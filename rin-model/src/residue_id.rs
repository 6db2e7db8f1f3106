use std::fmt;

/// Identifies a residue by (chain, sequence number, residue name). Displays as
/// `"{chain}:{seq}:_:{name}"`, which also serves as the canonical string used to key graph
/// nodes and aggregator pair buckets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResidueId {
    pub chain_id: String,
    pub seq: i32,
    pub name: String,
}

impl ResidueId {
    pub fn new(chain_id: impl Into<String>, seq: i32, name: impl Into<String>) -> ResidueId {
        ResidueId {
            chain_id: chain_id.into(),
            seq,
            name: name.into(),
        }
    }

    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:_:{}", self.chain_id, self.seq, self.name)
    }
}

impl PartialOrd for ResidueId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResidueId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_key().cmp(&other.to_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_canonical_format() {
        let id = ResidueId::new("A", 12, "HIS");
        assert_eq!(id.to_string(), "A:12:_:HIS");
    }

    #[test]
    fn ordering_is_lexicographic_on_the_canonical_string() {
        let a = ResidueId::new("A", 1, "ALA");
        let b = ResidueId::new("A", 2, "ALA");
        assert!(a < b);
    }
}
