use std::collections::{HashMap, HashSet};

use crate::bond::{bond_cmp, Bond};

/// Greedy valence-constrained selection of hydrogen bonds. Bonds of every other kind
/// pass through unchanged, and the input's relative order across kinds is preserved in the
/// output.
pub fn apply_hbond_realism(bonds: Vec<Bond>) -> Vec<Bond> {
    let mut hydrogen_indices: Vec<usize> = bonds
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, Bond::Hydrogen { .. }))
        .map(|(i, _)| i)
        .collect();
    hydrogen_indices.sort_by(|&i, &j| bond_cmp(&bonds[i], &bonds[j]));

    let mut donor_count: HashMap<String, u8> = HashMap::new();
    let mut hydrogen_count: HashMap<String, u8> = HashMap::new();
    let mut acceptor_count: HashMap<String, u8> = HashMap::new();
    let mut admitted: HashSet<usize> = HashSet::new();

    for i in hydrogen_indices {
        let Bond::Hydrogen { acceptor, donor, acceptor_atom, hydrogen_atom, donor_atom, .. } = &bonds[i] else {
            unreachable!()
        };
        let donor_key = format!("{donor}:{donor_atom}");
        let hydrogen_key = format!("{donor}:{hydrogen_atom}");
        let acceptor_key = format!("{acceptor}:{acceptor_atom}");

        let donor_capacity = rin_chem::hydrogen_donor_capacity(&donor.name, donor_atom);
        let acceptor_capacity = rin_chem::hydrogen_acceptor_capacity(&acceptor.name, acceptor_atom);

        let dc = *donor_count.get(&donor_key).unwrap_or(&0);
        let hc = *hydrogen_count.get(&hydrogen_key).unwrap_or(&0);
        let ac = *acceptor_count.get(&acceptor_key).unwrap_or(&0);

        if dc < donor_capacity && hc < 1 && ac < acceptor_capacity {
            donor_count.insert(donor_key, dc + 1);
            hydrogen_count.insert(hydrogen_key, hc + 1);
            acceptor_count.insert(acceptor_key, ac + 1);
            admitted.insert(i);
        }
    }

    bonds
        .into_iter()
        .enumerate()
        .filter(|(i, b)| match b {
            Bond::Hydrogen { .. } => admitted.contains(i),
            _ => true,
        })
        .map(|(_, b)| b)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rin_model::ResidueId;

    fn rid(seq: i32, name: &str) -> ResidueId {
        ResidueId::new("A", seq, name)
    }

    fn hbond(donor_atom: &str, hydrogen_atom: &str, acceptor_atom: &str, energy: f64) -> Bond {
        Bond::Hydrogen {
            acceptor: rid(20, "ASN"),
            donor: rid(1, "ASN"),
            acceptor_atom: acceptor_atom.into(),
            hydrogen_atom: hydrogen_atom.into(),
            donor_atom: donor_atom.into(),
            main_chain_acceptor: false,
            main_chain_donor: false,
            length: 3.0,
            energy,
            angle_adh: 10.0,
            angle_ahd: 170.0,
        }
    }

    #[test]
    fn empty_input_is_identity() {
        assert!(apply_hbond_realism(Vec::new()).is_empty());
    }

    #[test]
    fn non_hydrogen_bonds_pass_through_unchanged() {
        let vdw = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(20, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 3.5,
            energy: -0.2,
        };
        let out = apply_hbond_realism(vec![vdw.clone()]);
        assert_eq!(out, vec![vdw]);
    }

    #[test]
    fn third_hydrogen_on_a_nd2_donor_is_rejected_by_its_capacity_of_two() {
        // ASN ND2 donates up to 2; three candidate bonds via three distinct hydrogens compete.
        let bonds = vec![
            hbond("ND2", "HD21", "OD1", -1.0),
            hbond("ND2", "HD22", "OD1", -0.9),
            hbond("ND2", "HD23", "OE1", -0.8),
        ];
        let out = apply_hbond_realism(bonds);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn a_single_hydrogen_can_only_satisfy_one_bond() {
        let bonds = vec![hbond("ND2", "HD21", "OD1", -1.0), hbond("ND2", "HD21", "OE1", -0.9)];
        let out = apply_hbond_realism(bonds);
        assert_eq!(out.len(), 1);
        let Bond::Hydrogen { energy, .. } = &out[0] else { panic!() };
        assert!((*energy - (-1.0)).abs() < 1e-9);
    }
}
