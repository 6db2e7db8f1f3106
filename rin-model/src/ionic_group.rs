use rin_chem::IonicSign;
use rin_geom::Vec3;

use crate::atom::Atom;
use crate::error::ModelError;

/// A charged atom cluster on a residue's side chain (positive: HIS, ARG, LYS; negative: GLU,
/// ASP).
#[derive(Clone, Debug, PartialEq)]
pub struct IonicGroup {
    pub residue_name: String,
    pub sign: IonicSign,
    atoms: Vec<Atom>,
    centroid: Vec3,
    effective_charge: f64,
}

/// True iff `atoms`' names are exactly the `expected` set, order-independent.
fn names_match(expected: &[&str], atoms: &[Atom]) -> bool {
    if expected.len() != atoms.len() {
        return false;
    }
    let mut expected_sorted: Vec<&str> = expected.to_vec();
    expected_sorted.sort_unstable();
    let mut found_sorted: Vec<&str> = atoms.iter().map(|a| a.name.as_str()).collect();
    found_sorted.sort_unstable();
    expected_sorted == found_sorted
}

impl IonicGroup {
    pub fn new(
        residue_id: &str,
        residue_name: &str,
        sign: IonicSign,
        atoms: Vec<Atom>,
    ) -> Result<IonicGroup, ModelError> {
        let expected = rin_chem::ionic_group_atom_names(residue_name, sign).unwrap_or(&[]);
        if atoms.is_empty() || !names_match(expected, &atoms) {
            let group = match sign {
                IonicSign::Positive => "positive ionic",
                IonicSign::Negative => "negative ionic",
            };
            return Err(ModelError::IllformedGroup {
                residue_id: residue_id.to_string(),
                group,
                expected: expected.to_vec(),
                found: atoms.iter().map(|a| a.name.clone()).collect(),
            });
        }
        let effective_charge = rin_chem::ionic_effective_charge(residue_name)
            .ok_or_else(|| ModelError::UnsupportedResidue(residue_name.to_string()))?;
        let centroid = Vec3::weighted_centroid(
            &atoms.iter().map(|a| (a.position, a.mass())).collect::<Vec<_>>(),
        );
        Ok(IonicGroup {
            residue_name: residue_name.to_string(),
            sign,
            atoms,
            centroid,
            effective_charge,
        })
    }

    /// Builds an ionic group from whatever atoms are present, skipping the exact-atom-set check
    /// [`IonicGroup::new`] enforces. Returns `None` only when the bucket is empty. Used by
    /// `KeepAll`, where a mismatched atom set is kept as-is rather than rejected.
    pub fn new_unchecked(residue_name: &str, sign: IonicSign, atoms: Vec<Atom>) -> Option<IonicGroup> {
        if atoms.is_empty() {
            return None;
        }
        let effective_charge = rin_chem::ionic_effective_charge(residue_name).unwrap_or(0.0);
        let centroid = Vec3::weighted_centroid(
            &atoms.iter().map(|a| (a.position, a.mass())).collect::<Vec<_>>(),
        );
        Some(IonicGroup {
            residue_name: residue_name.to_string(),
            sign,
            atoms,
            centroid,
            effective_charge,
        })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn position(&self) -> Vec3 {
        self.centroid
    }

    pub fn charge(&self) -> i8 {
        match self.sign {
            IonicSign::Positive => 1,
            IonicSign::Negative => -1,
        }
    }

    pub fn effective_charge(&self) -> f64 {
        self.effective_charge
    }

    /// Alphabetically sorted, colon-joined atom names, as used in bond/edge atom fields.
    pub fn composite_name(&self) -> String {
        let mut names: Vec<&str> = self.atoms.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names.join(":")
    }
}
