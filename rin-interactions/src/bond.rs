use std::cmp::Ordering;

use rin_model::{Edge, ResidueId};

/// The kind of a noncovalent (or covalent, for SS) interaction. Mirrors the seven sub-lists a
/// pair-bond bucket keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BondKind {
    Ss,
    VdW,
    Ionic,
    Hydrogen,
    PiPi,
    PiCation,
    Generic,
}

/// Which carbon a contact-map ("generic") edge was found between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenericLabel {
    Ca,
    Cb,
    Closest,
}

impl GenericLabel {
    fn as_str(&self) -> &'static str {
        match self {
            GenericLabel::Ca => "CA",
            GenericLabel::Cb => "CB",
            GenericLabel::Closest => "CLOSEST",
        }
    }
}

/// Tags an edge's main-chain/side-chain classification for the `{MC|SC}_{MC|SC}` orientation
/// label.
fn mc_sc(is_main_chain: bool) -> &'static str {
    if is_main_chain {
        "MC"
    } else {
        "SC"
    }
}

/// A single candidate interaction between two residues, in the shape §3/§9's tagged-variant
/// redesign calls for: one enum, one small set of accessors, no virtual dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Bond {
    Ss {
        a: ResidueId,
        b: ResidueId,
        length: f64,
    },
    VdW {
        a: ResidueId,
        b: ResidueId,
        atom_a: String,
        atom_b: String,
        main_chain_a: bool,
        main_chain_b: bool,
        length: f64,
        energy: f64,
    },
    Ionic {
        positive: ResidueId,
        negative: ResidueId,
        positive_atoms: String,
        negative_atoms: String,
        length: f64,
        energy: f64,
    },
    Hydrogen {
        acceptor: ResidueId,
        donor: ResidueId,
        acceptor_atom: String,
        hydrogen_atom: String,
        donor_atom: String,
        main_chain_acceptor: bool,
        main_chain_donor: bool,
        length: f64,
        energy: f64,
        angle_adh: f64,
        angle_ahd: f64,
    },
    PiPi {
        a: ResidueId,
        b: ResidueId,
        ring_a: String,
        ring_b: String,
        length: f64,
        energy: f64,
        angle_nn: f64,
    },
    PiCation {
        ring_residue: ResidueId,
        cation_residue: ResidueId,
        ring_atoms: String,
        cation_atom: String,
        length: f64,
        energy: f64,
        angle_theta: f64,
    },
    Generic {
        a: ResidueId,
        b: ResidueId,
        atom_a: String,
        atom_b: String,
        label: GenericLabel,
        length: f64,
    },
}

impl Bond {
    pub fn kind(&self) -> BondKind {
        match self {
            Bond::Ss { .. } => BondKind::Ss,
            Bond::VdW { .. } => BondKind::VdW,
            Bond::Ionic { .. } => BondKind::Ionic,
            Bond::Hydrogen { .. } => BondKind::Hydrogen,
            Bond::PiPi { .. } => BondKind::PiPi,
            Bond::PiCation { .. } => BondKind::PiCation,
            Bond::Generic { .. } => BondKind::Generic,
        }
    }

    /// The two residues this bond connects, in the order meaningful to its kind (not
    /// necessarily canonical/sorted order — callers needing the canonical pair key sort these).
    pub fn residue_ids(&self) -> (ResidueId, ResidueId) {
        match self {
            Bond::Ss { a, b, .. } => (a.clone(), b.clone()),
            Bond::VdW { a, b, .. } => (a.clone(), b.clone()),
            Bond::Ionic { positive, negative, .. } => (positive.clone(), negative.clone()),
            Bond::Hydrogen { acceptor, donor, .. } => (acceptor.clone(), donor.clone()),
            Bond::PiPi { a, b, .. } => (a.clone(), b.clone()),
            Bond::PiCation { ring_residue, cation_residue, .. } => {
                (ring_residue.clone(), cation_residue.clone())
            }
            Bond::Generic { a, b, .. } => (a.clone(), b.clone()),
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Bond::Ss { length, .. }
            | Bond::VdW { length, .. }
            | Bond::Ionic { length, .. }
            | Bond::Hydrogen { length, .. }
            | Bond::PiPi { length, .. }
            | Bond::PiCation { length, .. }
            | Bond::Generic { length, .. } => *length,
        }
    }

    pub fn energy(&self) -> Option<f64> {
        match self {
            Bond::Ss { .. } => Some(167.0),
            Bond::VdW { energy, .. }
            | Bond::Ionic { energy, .. }
            | Bond::Hydrogen { energy, .. }
            | Bond::PiPi { energy, .. }
            | Bond::PiCation { energy, .. } => Some(*energy),
            Bond::Generic { .. } => None,
        }
    }

    fn interaction_label(&self) -> String {
        match self {
            Bond::Ss { .. } => "SSBOND:SC_SC".to_string(),
            Bond::VdW { main_chain_a, main_chain_b, .. } => {
                format!("VDW:{}_{}", mc_sc(*main_chain_a), mc_sc(*main_chain_b))
            }
            Bond::Ionic { .. } => "IONIC:SC_SC".to_string(),
            Bond::Hydrogen { main_chain_acceptor, main_chain_donor, .. } => {
                format!("HBOND:{}_{}", mc_sc(*main_chain_acceptor), mc_sc(*main_chain_donor))
            }
            Bond::PiPi { .. } => "PIPISTACK:SC_SC".to_string(),
            Bond::PiCation { .. } => "PICATION:SC_SC".to_string(),
            Bond::Generic { label, .. } => format!("GENERIC:{}", label.as_str()),
        }
    }

    /// Converts this bond into the residue-independent [`Edge`] value the graph stores.
    pub fn to_edge(&self) -> Edge {
        let (source_id, target_id) = self.residue_ids();
        let interaction_label = self.interaction_label();
        match self {
            Bond::Ss { length, .. } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: self.energy(),
                interaction_label,
                source_atom: "SG".into(),
                target_atom: "SG".into(),
                angle: None,
                donor: None,
                cation: None,
                positive: None,
                orientation: Some("SC_SC".into()),
            },
            Bond::VdW { atom_a, atom_b, main_chain_a, main_chain_b, length, .. } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: self.energy(),
                interaction_label,
                source_atom: atom_a.clone(),
                target_atom: atom_b.clone(),
                angle: None,
                donor: None,
                cation: None,
                positive: None,
                orientation: Some(format!("{}_{}", mc_sc(*main_chain_a), mc_sc(*main_chain_b))),
            },
            Bond::Ionic { positive, positive_atoms, negative_atoms, length, .. } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: self.energy(),
                interaction_label,
                source_atom: negative_atoms.clone(),
                target_atom: positive_atoms.clone(),
                angle: None,
                donor: None,
                cation: None,
                positive: Some(positive.to_string()),
                orientation: Some("SC_SC".into()),
            },
            Bond::Hydrogen {
                donor,
                acceptor_atom,
                donor_atom,
                main_chain_acceptor,
                main_chain_donor,
                length,
                angle_adh,
                ..
            } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: self.energy(),
                interaction_label,
                source_atom: acceptor_atom.clone(),
                target_atom: donor_atom.clone(),
                angle: Some(*angle_adh),
                donor: Some(donor.to_string()),
                cation: None,
                positive: None,
                orientation: Some(format!(
                    "{}_{}",
                    mc_sc(*main_chain_acceptor),
                    mc_sc(*main_chain_donor)
                )),
            },
            Bond::PiPi { ring_a, ring_b, length, angle_nn, .. } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: self.energy(),
                interaction_label,
                source_atom: ring_a.clone(),
                target_atom: ring_b.clone(),
                angle: Some(*angle_nn),
                donor: None,
                cation: None,
                positive: None,
                orientation: Some("SC_SC".into()),
            },
            Bond::PiCation { cation_residue, ring_atoms, cation_atom, length, angle_theta, .. } => {
                Edge {
                    source_id,
                    target_id,
                    length: *length,
                    energy: self.energy(),
                    interaction_label,
                    source_atom: ring_atoms.clone(),
                    target_atom: cation_atom.clone(),
                    angle: Some(*angle_theta),
                    donor: None,
                    cation: Some(cation_residue.to_string()),
                    positive: None,
                    orientation: Some("SC_SC".into()),
                }
            }
            Bond::Generic { atom_a, atom_b, length, .. } => Edge {
                source_id,
                target_id,
                length: *length,
                energy: None,
                interaction_label,
                source_atom: atom_a.clone(),
                target_atom: atom_b.clone(),
                angle: None,
                donor: None,
                cation: None,
                positive: None,
                orientation: None,
            },
        }
    }
}

/// `a < b` iff `a.energy < b.energy`, tie-broken by `a.length < b.length`. Bonds without an
/// energy (`Generic`) compare by length alone.
pub fn bond_cmp(a: &Bond, b: &Bond) -> Ordering {
    match (a.energy(), b.energy()) {
        (Some(ea), Some(eb)) => ea
            .partial_cmp(&eb)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.length().partial_cmp(&b.length()).unwrap_or(Ordering::Equal)),
        _ => a.length().partial_cmp(&b.length()).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(seq: i32, name: &str) -> ResidueId {
        ResidueId::new("A", seq, name)
    }

    #[test]
    fn bond_ordering_prefers_lower_energy_then_shorter_length() {
        let lo = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(5, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 4.0,
            energy: -1.0,
        };
        let hi = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(5, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 3.0,
            energy: -0.5,
        };
        assert_eq!(bond_cmp(&lo, &hi), Ordering::Less);
    }

    #[test]
    fn generic_bonds_compare_by_length_only() {
        let near = Bond::Generic {
            a: rid(1, "ALA"),
            b: rid(5, "GLY"),
            atom_a: "CA".into(),
            atom_b: "CA".into(),
            label: GenericLabel::Ca,
            length: 3.0,
        };
        let far = Bond::Generic {
            a: rid(1, "ALA"),
            b: rid(5, "GLY"),
            atom_a: "CA".into(),
            atom_b: "CA".into(),
            label: GenericLabel::Ca,
            length: 6.0,
        };
        assert_eq!(bond_cmp(&near, &far), Ordering::Less);
    }

    #[test]
    fn ss_bond_has_the_fixed_energy_constant_and_sg_atom_labels() {
        let ss = Bond::Ss { a: rid(1, "CYS"), b: rid(20, "CYS"), length: 2.05 };
        assert_eq!(ss.energy(), Some(167.0));
        let edge = ss.to_edge();
        assert_eq!(edge.source_atom, "SG");
        assert_eq!(edge.interaction_label, "SSBOND:SC_SC");
    }

    #[test]
    fn vdw_label_uses_main_chain_side_chain_per_atom() {
        let bond = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(5, "GLY"),
            atom_a: "C".into(),
            atom_b: "CA".into(),
            main_chain_a: true,
            main_chain_b: false,
            length: 3.5,
            energy: -0.1,
        };
        assert_eq!(bond.to_edge().interaction_label, "VDW:MC_SC");
    }
}
