use rin_chem::RingKind;
use rin_geom::Vec3;

use crate::atom::Atom;
use crate::error::ModelError;

/// An aromatic ring on a HIS, PHE, TYR or TRP side chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub residue_name: String,
    pub kind: RingKind,
    atoms: Vec<Atom>,
    centroid: Vec3,
    normal: Vec3,
    mean_radius: f64,
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

impl Ring {
    /// Builds a ring from exactly the atoms the chemistry schema expects for
    /// `(residue_name, kind)`, in the schema's connectivity order. Fails with
    /// [`ModelError::IllformedGroup`] if fewer than three atoms are given or the set doesn't
    /// match the schema exactly.
    pub fn new(residue_id: &str, residue_name: &str, kind: RingKind, atoms: Vec<Atom>) -> Result<Ring, ModelError> {
        let expected = rin_chem::ring_atom_names(residue_name, kind).unwrap_or(&[]);
        if atoms.len() < 3 || !names_match(expected, &atoms) {
            return Err(ModelError::IllformedGroup {
                residue_id: residue_id.to_string(),
                group: "ring",
                expected: expected.to_vec(),
                found: atoms.iter().map(|a| a.name.clone()).collect(),
            });
        }
        let centroid = Vec3::weighted_centroid(
            &atoms.iter().map(|a| (a.position, a.mass())).collect::<Vec<_>>(),
        );
        let v1 = Vec3::sub(&atoms[0].position, &atoms[1].position);
        let v2 = Vec3::sub(&atoms[2].position, &atoms[1].position);
        let normal = Vec3::cross(&v1, &v2);
        let mean_radius = atoms.iter().map(|a| a.position.distance_to(&centroid)).sum::<f64>()
            / atoms.len() as f64;
        Ok(Ring {
            residue_name: residue_name.to_string(),
            kind,
            atoms,
            centroid,
            normal,
            mean_radius,
        })
    }

    /// Builds a ring from whatever atoms are present, skipping the exact-atom-set check [`Ring::new`]
    /// enforces. Still needs at least 3 atoms to define a normal; returns `None` rather than
    /// panicking when fewer are given. Used by `KeepAll`, where a mismatched atom set is kept
    /// as-is rather than rejected.
    pub fn new_unchecked(residue_name: &str, kind: RingKind, atoms: Vec<Atom>) -> Option<Ring> {
        if atoms.len() < 3 {
            return None;
        }
        let centroid = Vec3::weighted_centroid(
            &atoms.iter().map(|a| (a.position, a.mass())).collect::<Vec<_>>(),
        );
        let v1 = Vec3::sub(&atoms[0].position, &atoms[1].position);
        let v2 = Vec3::sub(&atoms[2].position, &atoms[1].position);
        let normal = Vec3::cross(&v1, &v2);
        let mean_radius = atoms.iter().map(|a| a.position.distance_to(&centroid)).sum::<f64>()
            / atoms.len() as f64;
        Some(Ring {
            residue_name: residue_name.to_string(),
            kind,
            atoms,
            centroid,
            normal,
            mean_radius,
        })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn position(&self) -> Vec3 {
        self.centroid
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    pub fn is_pication_candidate(&self) -> bool {
        rin_chem::is_pication_ring(&self.residue_name, self.kind)
    }

    /// Alphabetically sorted, colon-joined atom names — the composite label used in bond/edge
    /// atom fields (e.g. `"CD2:CE1:CG:ND1:NE2"`).
    pub fn composite_name(&self) -> String {
        let mut names: Vec<&str> = self.atoms.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names.join(":")
    }

    /// Shortest pairwise atom-to-atom distance between two rings.
    pub fn closest_atom_distance(&self, other: &Ring) -> f64 {
        let mut best = f64::MAX;
        for a in &self.atoms {
            for b in &other.atoms {
                let d = a.position.distance_to(&b.position);
                if d < best {
                    best = d;
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(name, "C", Vec3::new(x, y, z), "PHE")
    }

    #[test]
    fn ring_requires_the_exact_expected_atom_set() {
        let atoms = vec![atom("CG", 0.0, 0.0, 0.0), atom("CD1", 1.0, 0.0, 0.0)];
        let err = Ring::new("A:1:_:PHE", "PHE", RingKind::Primary, atoms).unwrap_err();
        assert!(matches!(err, ModelError::IllformedGroup { .. }));
    }

    #[test]
    fn planar_hexagon_has_a_well_defined_normal_and_mean_radius() {
        let names = rin_chem::ring_atom_names("PHE", RingKind::Primary).unwrap();
        let atoms: Vec<Atom> = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let theta = std::f64::consts::TAU * (i as f64) / 6.0;
                atom(n, theta.cos(), theta.sin(), 0.0)
            })
            .collect();
        let ring = Ring::new("A:1:_:PHE", "PHE", RingKind::Primary, atoms).unwrap();
        assert!((ring.mean_radius() - 1.0).abs() < 1e-9);
        assert!(ring.normal().z.abs() > 0.0);
        assert!(ring.is_pication_candidate());
    }

    #[test]
    fn composite_name_is_alphabetically_sorted() {
        let names = rin_chem::ring_atom_names("HIS", RingKind::Primary).unwrap();
        let atoms: Vec<Atom> = names.iter().map(|n| atom(n, 0.0, 0.0, 0.0)).collect();
        let ring = Ring::new("A:1:_:HIS", "HIS", RingKind::Primary, atoms).unwrap();
        assert_eq!(ring.composite_name(), "CD2:CE1:CG:ND1:NE2");
    }
}
