/// A residue's secondary-structure assignment, resolved once at construction time from optional
/// helix/sheet annotations and never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub enum SecondaryStructure {
    None,
    Loop,
    Helix { serial: i32, start_seq: i32 },
    Sheet { id: String, start_seq: i32 },
}

impl SecondaryStructure {
    /// The one-word label a graph node reports for this tag.
    pub fn label(&self) -> String {
        match self {
            SecondaryStructure::None => "None".to_string(),
            SecondaryStructure::Loop => "LOOP".to_string(),
            SecondaryStructure::Helix { .. } => "HELIX".to_string(),
            SecondaryStructure::Sheet { .. } => "SHEET".to_string(),
        }
    }
}

/// A closed residue-sequence-number interval on one chain annotated as part of a helix.
#[derive(Clone, Debug, PartialEq)]
pub struct HelixInterval {
    pub chain_id: String,
    pub serial: i32,
    pub start_seq: i32,
    pub end_seq: i32,
}

/// A closed residue-sequence-number interval on one chain annotated as part of a sheet strand.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetInterval {
    pub chain_id: String,
    pub sheet_id: String,
    pub start_seq: i32,
    pub end_seq: i32,
}

/// Resolves the secondary-structure tag of `(chain_id, seq)`: a matching helix wins
/// first, then a matching sheet strand, then `Loop` if any annotation exists in the model at
/// all (even on another chain/residue), else `None`.
pub fn resolve_secondary_structure(
    chain_id: &str,
    seq: i32,
    helices: &[HelixInterval],
    sheets: &[SheetInterval],
    any_annotations_present: bool,
) -> SecondaryStructure {
    if let Some(h) = helices
        .iter()
        .find(|h| h.chain_id == chain_id && seq >= h.start_seq && seq <= h.end_seq)
    {
        return SecondaryStructure::Helix {
            serial: h.serial,
            start_seq: h.start_seq,
        };
    }
    if let Some(s) = sheets
        .iter()
        .find(|s| s.chain_id == chain_id && seq >= s.start_seq && seq <= s.end_seq)
    {
        return SecondaryStructure::Sheet {
            id: s.sheet_id.clone(),
            start_seq: s.start_seq,
        };
    }
    if any_annotations_present {
        SecondaryStructure::Loop
    } else {
        SecondaryStructure::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_inside_a_helix_interval_is_tagged_helix() {
        let helices = vec![HelixInterval { chain_id: "A".into(), serial: 1, start_seq: 10, end_seq: 20 }];
        let tag = resolve_secondary_structure("A", 15, &helices, &[], true);
        assert_eq!(tag, SecondaryStructure::Helix { serial: 1, start_seq: 10 });
    }

    #[test]
    fn residue_outside_any_interval_falls_back_to_loop_when_annotations_exist() {
        let helices = vec![HelixInterval { chain_id: "A".into(), serial: 1, start_seq: 10, end_seq: 20 }];
        let tag = resolve_secondary_structure("A", 5, &helices, &[], true);
        assert_eq!(tag, SecondaryStructure::Loop);
    }

    #[test]
    fn no_annotations_at_all_yields_none() {
        let tag = resolve_secondary_structure("A", 5, &[], &[], false);
        assert_eq!(tag, SecondaryStructure::None);
    }
}
