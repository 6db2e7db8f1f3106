use log::warn;
use rin_chem::{IonicSign, RingKind};
use rin_geom::Vec3;

use crate::atom::Atom;
use crate::error::ModelError;
use crate::ionic_group::IonicGroup;
use crate::residue_id::ResidueId;
use crate::ring::Ring;
use crate::secondary_structure::SecondaryStructure;

/// How a residue handles a ring or ionic-group atom-set mismatch found during construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllformedPolicy {
    /// Abort the whole build with the triggering [`ModelError`].
    Fail,
    /// Drop this residue entirely; the caller continues with the rest of the model.
    SkipRes,
    /// Warn and drop only the offending group; the residue is otherwise kept.
    KeepRes,
    /// Keep whatever atoms were found, mismatched or not. User responsibility.
    KeepAll,
}

impl Default for IllformedPolicy {
    fn default() -> Self {
        IllformedPolicy::SkipRes
    }
}

/// One residue: its atoms plus the chemical substructures (rings, ionic groups) the schema
/// finds among them.
#[derive(Clone, Debug, PartialEq)]
pub struct Residue {
    pub id: ResidueId,
    pub protein_name: String,
    atoms: Vec<Atom>,
    alpha: Option<Atom>,
    beta: Option<Atom>,
    primary_ring: Option<Ring>,
    secondary_ring: Option<Ring>,
    positive_group: Option<IonicGroup>,
    negative_group: Option<IonicGroup>,
    centroid: Vec3,
    pub secondary_structure: SecondaryStructure,
}

impl Residue {
    /// Builds a residue from its atom records. Returns `Ok(None)` when `illformed_policy` is
    /// `SkipRes` and a group mismatch occurred (the caller drops this residue and continues);
    /// returns `Err` only under `Fail`.
    pub fn build(
        id: ResidueId,
        protein_name: impl Into<String>,
        atoms: Vec<Atom>,
        secondary_structure: SecondaryStructure,
        illformed_policy: IllformedPolicy,
    ) -> Result<Option<Residue>, ModelError> {
        let res_name = id.name.clone();
        let alpha = atoms.iter().find(|a| a.name == "CA").cloned();
        let beta = atoms.iter().find(|a| a.name == "CB").cloned();

        let primary_expected = rin_chem::ring_atom_names(&res_name, RingKind::Primary);
        let secondary_expected = rin_chem::ring_atom_names(&res_name, RingKind::Secondary);
        let positive_expected = rin_chem::ionic_group_atom_names(&res_name, IonicSign::Positive);
        let negative_expected = rin_chem::ionic_group_atom_names(&res_name, IonicSign::Negative);

        let mut primary_bucket = Vec::new();
        let mut secondary_bucket = Vec::new();
        let mut positive_bucket = Vec::new();
        let mut negative_bucket = Vec::new();
        for atom in &atoms {
            if primary_expected.map_or(false, |names| names.contains(&atom.name.as_str())) {
                primary_bucket.push(atom.clone());
            }
            if secondary_expected.map_or(false, |names| names.contains(&atom.name.as_str())) {
                secondary_bucket.push(atom.clone());
            }
            if positive_expected.map_or(false, |names| names.contains(&atom.name.as_str())) {
                positive_bucket.push(atom.clone());
            }
            if negative_expected.map_or(false, |names| names.contains(&atom.name.as_str())) {
                negative_bucket.push(atom.clone());
            }
        }

        let centroid = Vec3::weighted_centroid(
            &atoms.iter().map(|a| (a.position, a.mass())).collect::<Vec<_>>(),
        );

        macro_rules! build_group {
            ($bucket:expr, $ctor:expr, $unchecked:expr) => {
                if $bucket.is_empty() {
                    None
                } else {
                    let kept_atoms = $bucket.clone();
                    match $ctor($bucket) {
                        Ok(g) => Some(g),
                        Err(e) => match illformed_policy {
                            IllformedPolicy::Fail => return Err(e),
                            IllformedPolicy::SkipRes => return Ok(None),
                            IllformedPolicy::KeepRes => {
                                warn!("{id}: {e}");
                                None
                            }
                            IllformedPolicy::KeepAll => $unchecked(kept_atoms),
                        },
                    }
                }
            };
        }

        let id_str = id.to_string();
        let primary_ring = build_group!(
            primary_bucket,
            |b| Ring::new(&id_str, &res_name, RingKind::Primary, b),
            |b| Ring::new_unchecked(&res_name, RingKind::Primary, b)
        );
        let secondary_ring = build_group!(
            secondary_bucket,
            |b| Ring::new(&id_str, &res_name, RingKind::Secondary, b),
            |b| Ring::new_unchecked(&res_name, RingKind::Secondary, b)
        );
        let positive_group = build_group!(
            positive_bucket,
            |b| IonicGroup::new(&id_str, &res_name, IonicSign::Positive, b),
            |b| IonicGroup::new_unchecked(&res_name, IonicSign::Positive, b)
        );
        let negative_group = build_group!(
            negative_bucket,
            |b| IonicGroup::new(&id_str, &res_name, IonicSign::Negative, b),
            |b| IonicGroup::new_unchecked(&res_name, IonicSign::Negative, b)
        );

        Ok(Some(Residue {
            id,
            protein_name: protein_name.into(),
            atoms,
            alpha,
            beta,
            primary_ring,
            secondary_ring,
            positive_group,
            negative_group,
            centroid,
            secondary_structure,
        }))
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn alpha(&self) -> Option<&Atom> {
        self.alpha.as_ref()
    }

    pub fn beta(&self) -> Option<&Atom> {
        self.beta.as_ref()
    }

    pub fn primary_ring(&self) -> Option<&Ring> {
        self.primary_ring.as_ref()
    }

    pub fn secondary_ring(&self) -> Option<&Ring> {
        self.secondary_ring.as_ref()
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.primary_ring.iter().chain(self.secondary_ring.iter())
    }

    pub fn positive_group(&self) -> Option<&IonicGroup> {
        self.positive_group.as_ref()
    }

    pub fn negative_group(&self) -> Option<&IonicGroup> {
        self.negative_group.as_ref()
    }

    pub fn position(&self) -> Vec3 {
        self.centroid
    }
}

/// `satisfies_minimum_separation`: two residues interact only if they're distinct and, when on
/// the same chain, at least `seq_sep` apart in sequence number.
pub fn satisfies_minimum_separation(a: &ResidueId, b: &ResidueId, seq_sep: i32) -> bool {
    a != b && (a.chain_id != b.chain_id || (a.seq - b.seq).abs() >= seq_sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, element: &str, pos: Vec3, res_name: &str) -> Atom {
        Atom::new(name, element, pos, res_name)
    }

    #[test]
    fn lys_residue_gets_a_positive_group_and_no_rings() {
        let atoms = vec![
            atom("N", "N", Vec3::new(0.0, 0.0, 0.0), "LYS"),
            atom("CA", "C", Vec3::new(1.0, 0.0, 0.0), "LYS"),
            atom("CB", "C", Vec3::new(2.0, 0.0, 0.0), "LYS"),
            atom("NZ", "N", Vec3::new(3.0, 0.0, 0.0), "LYS"),
        ];
        let id = ResidueId::new("A", 1, "LYS");
        let residue = Residue::build(
            id,
            "test",
            atoms,
            SecondaryStructure::None,
            IllformedPolicy::SkipRes,
        )
        .unwrap()
        .unwrap();
        assert!(residue.positive_group().is_some());
        assert!(residue.negative_group().is_none());
        assert!(residue.primary_ring().is_none());
        assert!(residue.alpha().is_some());
        assert!(residue.beta().is_some());
    }

    #[test]
    fn incomplete_his_ring_is_skipped_under_skip_res_policy() {
        let atoms = vec![
            atom("CG", "C", Vec3::zero(), "HIS"),
            atom("ND1", "N", Vec3::zero(), "HIS"),
        ];
        let id = ResidueId::new("A", 1, "HIS");
        let result = Residue::build(
            id,
            "test",
            atoms,
            SecondaryStructure::None,
            IllformedPolicy::SkipRes,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn incomplete_his_ring_fails_hard_under_fail_policy() {
        let atoms = vec![
            atom("CG", "C", Vec3::zero(), "HIS"),
            atom("ND1", "N", Vec3::zero(), "HIS"),
        ];
        let id = ResidueId::new("A", 1, "HIS");
        let result = Residue::build(id, "test", atoms, SecondaryStructure::None, IllformedPolicy::Fail);
        assert!(result.is_err());
    }

    #[test]
    fn incomplete_his_ring_is_kept_as_is_under_keep_all_policy() {
        let atoms = vec![
            atom("CG", "C", Vec3::zero(), "HIS"),
            atom("ND1", "N", Vec3::new(1.0, 0.0, 0.0), "HIS"),
            atom("CE1", "C", Vec3::new(0.0, 1.0, 0.0), "HIS"),
        ];
        let id = ResidueId::new("A", 1, "HIS");
        let residue = Residue::build(id, "test", atoms, SecondaryStructure::None, IllformedPolicy::KeepAll)
            .unwrap()
            .unwrap();
        let ring = residue.primary_ring().unwrap();
        assert_eq!(ring.atoms().len(), 3);
    }

    #[test]
    fn sequence_separation_rejects_close_residues_on_the_same_chain() {
        let a = ResidueId::new("A", 10, "ALA");
        let b = ResidueId::new("A", 11, "GLY");
        let c = ResidueId::new("A", 13, "GLY");
        let d = ResidueId::new("B", 10, "GLY");
        assert!(!satisfies_minimum_separation(&a, &b, 3));
        assert!(satisfies_minimum_separation(&a, &c, 3));
        assert!(satisfies_minimum_separation(&a, &d, 3));
    }
}
