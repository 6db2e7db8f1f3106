//! Per-interaction-type geometric/chemical tests and energy formulas. Each function
//! takes the owning residues (for their ids and the minimum-separation gate) plus the already
//! range-queried substructures, and returns the [`Bond`] it accepts, or `None`/an empty `Vec`.

use rin_geom::{angle, d_angle, Vec3};
use rin_model::{satisfies_minimum_separation, Atom, IonicGroup, Residue, ResidueId, Ring};

use crate::bond::{Bond, GenericLabel};
use crate::params::Params;

/// `(donor_element, donor_formal_charge, acceptor_element, acceptor_formal_charge) -> (sigma,
/// epsilon)`, used by the hydrogen-bond energy formula.
const HBOND_SIGMA_EPSILON: &[((&str, i8, &str, i8), (f64, f64))] = &[
    (("N", 0, "N", 0), (1.99, -3.00)),
    (("N", 0, "O", 0), (1.89, -3.50)),
    (("O", 0, "N", 0), (1.89, -4.00)),
    (("O", 0, "O", 0), (1.79, -4.25)),
    (("N", 1, "N", 0), (1.99, -4.50)),
    (("N", 1, "O", 0), (1.89, -5.25)),
    (("N", 0, "O", -1), (1.89, -5.25)),
    (("N", 1, "O", -1), (1.89, -7.00)),
    (("O", 0, "O", -1), (1.79, -6.375)),
];

fn hbond_sigma_epsilon(donor_elem: &str, donor_chg: i8, acc_elem: &str, acc_chg: i8) -> (f64, f64) {
    HBOND_SIGMA_EPSILON
        .iter()
        .find(|((de, dc, ae, ac), _)| *de == donor_elem && *dc == donor_chg && *ae == acc_elem && *ac == acc_chg)
        .map(|(_, se)| *se)
        .unwrap_or((1.79, -4.25))
}

/// A negative ionic group (`neg`) against a positive one (`pos`) within range.
pub fn ionic(neg_res: &Residue, neg: &IonicGroup, pos_res: &Residue, pos: &IonicGroup, params: &Params) -> Option<Bond> {
    if !satisfies_minimum_separation(&neg_res.id, &pos_res.id, params.sequence_separation) {
        return None;
    }
    let length = neg.position().distance_to(&pos.position());
    if length > params.query_dist_ionic {
        return None;
    }
    let energy = params.ion_ion_k * pos.effective_charge() * neg.effective_charge() / length;
    Some(Bond::Ionic {
        positive: pos_res.id.clone(),
        negative: neg_res.id.clone(),
        positive_atoms: pos.composite_name(),
        negative_atoms: neg.composite_name(),
        length,
        energy,
    })
}

/// One hydrogen bond per hydrogen attached to `donor` that satisfies the ADH angle test.
pub fn hydrogen(
    acceptor_res: &Residue,
    acceptor: &Atom,
    donor_res: &Residue,
    donor: &Atom,
    params: &Params,
) -> Vec<Bond> {
    if !satisfies_minimum_separation(&acceptor_res.id, &donor_res.id, params.sequence_separation) {
        return Vec::new();
    }
    let d_da = donor.position.distance_to(&acceptor.position);
    if d_da > params.query_dist_hbond {
        return Vec::new();
    }

    let donor_charge: i8 = if donor.in_positive_ionic_group() { 1 } else { 0 };
    let acceptor_charge: i8 = if acceptor.in_negative_ionic_group() { -1 } else { 0 };
    let (sigma, epsilon) =
        hbond_sigma_epsilon(&donor.element, donor_charge, &acceptor.element, acceptor_charge);

    let mut bonds = Vec::new();
    for hydrogen_atom in donor_res.atoms().iter().filter(|a| a.is_hydrogen && a.attaches_to(&donor.name)) {
        let v_da = Vec3::sub(&acceptor.position, &donor.position);
        let v_dh = Vec3::sub(&hydrogen_atom.position, &donor.position);
        let angle_adh = angle(&v_da, &v_dh);
        if angle_adh > params.hbond_angle {
            continue;
        }
        let v_ha = Vec3::sub(&acceptor.position, &hydrogen_atom.position);
        let v_hd = Vec3::sub(&donor.position, &hydrogen_atom.position);
        let angle_ahd = angle(&v_ha, &v_hd);
        let d_ha = hydrogen_atom.position.distance_to(&acceptor.position);
        let energy = 4.0 * epsilon * ((sigma / d_ha).powi(12) - (sigma / d_ha).powi(10));

        bonds.push(Bond::Hydrogen {
            acceptor: acceptor_res.id.clone(),
            donor: donor_res.id.clone(),
            acceptor_atom: acceptor.name.clone(),
            hydrogen_atom: hydrogen_atom.name.clone(),
            donor_atom: donor.name.clone(),
            main_chain_acceptor: acceptor.is_main_chain(),
            main_chain_donor: donor.is_main_chain(),
            length: d_da,
            energy,
            angle_adh,
            angle_ahd,
        });
    }
    bonds
}

/// A van der Waals contact between two atoms, both registered in the OPLS table.
pub fn vdw(res_a: &Residue, atom_a: &Atom, res_b: &Residue, atom_b: &Atom, params: &Params) -> Option<Bond> {
    if !satisfies_minimum_separation(&res_a.id, &res_b.id, params.sequence_separation) {
        return None;
    }
    let pa = atom_a.vdw_params()?;
    let pb = atom_b.vdw_params()?;
    let length = atom_a.position.distance_to(&atom_b.position);
    let gap = length - (atom_a.vdw_radius() + atom_b.vdw_radius());
    if gap > params.surface_dist_vdw {
        return None;
    }
    let sigma = (pa.sigma * pb.sigma).sqrt();
    let epsilon = (pa.epsilon * pb.epsilon).sqrt();
    let energy = 4.0 * epsilon * ((sigma / length).powi(12) - (sigma / length).powi(6));
    Some(Bond::VdW {
        a: res_a.id.clone(),
        b: res_b.id.clone(),
        atom_a: atom_a.name.clone(),
        atom_b: atom_b.name.clone(),
        main_chain_a: atom_a.is_main_chain(),
        main_chain_b: atom_b.is_main_chain(),
        length,
        energy,
    })
}

/// π–π stacking between two aromatic rings.
pub fn pipi(res_a: &Residue, ring_a: &Ring, res_b: &Residue, ring_b: &Ring, params: &Params) -> Option<Bond> {
    if !satisfies_minimum_separation(&res_a.id, &res_b.id, params.sequence_separation) {
        return None;
    }
    let a_to_b = Vec3::sub(&ring_a.position(), &ring_b.position());
    let b_to_a = Vec3::sub(&ring_b.position(), &ring_a.position());
    let nc1 = d_angle(&ring_a.normal(), &a_to_b);
    let nc2 = d_angle(&ring_b.normal(), &b_to_a);
    let nn = d_angle(&ring_a.normal(), &ring_b.normal());
    let mn = ring_a.closest_atom_distance(ring_b);

    if nn > params.pipistack_normal_normal_angle_range {
        return None;
    }
    if nc1 > params.pipistack_normal_centre_angle_range && nc2 > params.pipistack_normal_centre_angle_range {
        return None;
    }
    if mn > params.max_pipi_atom_atom_distance {
        return None;
    }

    let length = ring_a.position().distance_to(&ring_b.position());
    let energy = params.pipi_a + params.pipi_b * nn + params.pipi_c * nn * (1.0 / (nn + 10.0)).cos();
    Some(Bond::PiPi {
        a: res_a.id.clone(),
        b: res_b.id.clone(),
        ring_a: ring_a.composite_name(),
        ring_b: ring_b.composite_name(),
        length,
        energy,
        angle_nn: nn,
    })
}

/// π–cation between a ring and a cation-bearing atom.
pub fn pication(
    ring_res: &Residue,
    ring: &Ring,
    cation_res: &Residue,
    cation: &Atom,
    params: &Params,
) -> Option<Bond> {
    if !satisfies_minimum_separation(&ring_res.id, &cation_res.id, params.sequence_separation) {
        return None;
    }
    if !ring.is_pication_candidate() {
        return None;
    }
    let diff = Vec3::sub(&ring.position(), &cation.position);
    let theta = 90.0 - d_angle(&ring.normal(), &diff);
    if theta < params.pication_angle {
        return None;
    }
    let kappa = rin_chem::cation_kappa(&cation_res.id.name)?;
    let alpha = rin_chem::ring_alpha(&ring.residue_name)?;
    let length = ring.position().distance_to(&cation.position);
    let energy = -(kappa * alpha) / length.powi(4);
    Some(Bond::PiCation {
        ring_residue: ring_res.id.clone(),
        cation_residue: cation_res.id.clone(),
        ring_atoms: ring.composite_name(),
        cation_atom: cation.name.clone(),
        length,
        energy,
        angle_theta: theta,
    })
}

/// A contact-map ("generic") edge between two α- or β-carbons.
pub fn generic(
    res_a: &Residue,
    atom_a: &Atom,
    res_b: &Residue,
    atom_b: &Atom,
    label: GenericLabel,
    params: &Params,
) -> Option<Bond> {
    if !satisfies_minimum_separation(&res_a.id, &res_b.id, params.sequence_separation) {
        return None;
    }
    let length = atom_a.position.distance_to(&atom_b.position);
    Some(Bond::Generic {
        a: res_a.id.clone(),
        b: res_b.id.clone(),
        atom_a: atom_a.name.clone(),
        atom_b: atom_b.name.clone(),
        label,
        length,
    })
}

/// A parsed disulfide bridge, taken verbatim from the model's connection records.
pub fn disulfide(a: &ResidueId, b: &ResidueId, length: f64) -> Bond {
    Bond::Ss { a: a.clone(), b: b.clone(), length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rin_model::{IllformedPolicy, SecondaryStructure};

    fn residue(chain: &str, seq: i32, name: &str, atoms: Vec<Atom>) -> Residue {
        Residue::build(
            ResidueId::new(chain, seq, name),
            "test",
            atoms,
            SecondaryStructure::None,
            IllformedPolicy::SkipRes,
        )
        .unwrap()
        .unwrap()
    }

    fn atom(name: &str, element: &str, pos: Vec3, res_name: &str) -> Atom {
        Atom::new(name, element, pos, res_name)
    }

    #[test]
    fn ionic_predicate_rejects_residues_too_close_in_sequence() {
        let lys = residue("A", 1, "LYS", vec![atom("NZ", "N", Vec3::new(0.0, 0.0, 0.0), "LYS")]);
        let glu = residue(
            "A",
            2,
            "GLU",
            vec![
                atom("CD", "C", Vec3::new(1.0, 0.0, 0.0), "GLU"),
                atom("OE1", "O", Vec3::new(1.2, 0.0, 0.0), "GLU"),
                atom("OE2", "O", Vec3::new(1.4, 0.0, 0.0), "GLU"),
            ],
        );
        let params = Params::default();
        let bond = ionic(&glu, glu.negative_group().unwrap(), &lys, lys.positive_group().unwrap(), &params);
        assert!(bond.is_none());
    }

    #[test]
    fn ionic_predicate_accepts_a_well_separated_opposite_charge_pair() {
        let lys = residue("A", 1, "LYS", vec![atom("NZ", "N", Vec3::new(0.0, 0.0, 0.0), "LYS")]);
        let glu = residue(
            "A",
            20,
            "GLU",
            vec![
                atom("CD", "C", Vec3::new(2.0, 0.0, 0.0), "GLU"),
                atom("OE1", "O", Vec3::new(2.2, 0.0, 0.0), "GLU"),
                atom("OE2", "O", Vec3::new(1.8, 0.0, 0.0), "GLU"),
            ],
        );
        let params = Params::default();
        let bond = ionic(&glu, glu.negative_group().unwrap(), &lys, lys.positive_group().unwrap(), &params)
            .unwrap();
        assert!(bond.energy().unwrap() > 0.0);
    }

    #[test]
    fn hydrogen_predicate_rejects_a_donor_with_no_attached_hydrogen() {
        let donor_res = residue("A", 1, "SER", vec![atom("OG", "O", Vec3::new(0.0, 0.0, 0.0), "SER")]);
        let acceptor_res = residue(
            "A",
            20,
            "ASP",
            vec![
                atom("CG", "C", Vec3::new(3.0, 0.0, 0.0), "ASP"),
                atom("OD1", "O", Vec3::new(3.2, 0.0, 0.0), "ASP"),
                atom("OD2", "O", Vec3::new(2.8, 0.0, 0.0), "ASP"),
            ],
        );
        let donor = donor_res.atoms().iter().find(|a| a.name == "OG").unwrap();
        let acceptor = acceptor_res.atoms().iter().find(|a| a.name == "OD1").unwrap();
        let bonds = hydrogen(&acceptor_res, acceptor, &donor_res, donor, &Params::default());
        assert!(bonds.is_empty());
    }

    #[test]
    fn vdw_predicate_accepts_atoms_within_the_surface_gap() {
        let a_res = residue("A", 1, "ALA", vec![atom("CB", "C", Vec3::new(0.0, 0.0, 0.0), "ALA")]);
        let b_res = residue("A", 20, "GLY", vec![atom("CA", "C", Vec3::new(3.8, 0.0, 0.0), "GLY")]);
        let a = &a_res.atoms()[0];
        let b = &b_res.atoms()[0];
        let bond = vdw(&a_res, a, &b_res, b, &Params::default());
        assert!(bond.is_some());
    }

    #[test]
    fn generic_predicate_just_measures_distance() {
        let a_res = residue("A", 1, "ALA", vec![atom("CA", "C", Vec3::new(0.0, 0.0, 0.0), "ALA")]);
        let b_res = residue("A", 20, "GLY", vec![atom("CA", "C", Vec3::new(5.0, 0.0, 0.0), "GLY")]);
        let a = &a_res.atoms()[0];
        let b = &b_res.atoms()[0];
        let bond = generic(&a_res, a, &b_res, b, GenericLabel::Ca, &Params::default()).unwrap();
        assert!((bond.length() - 5.0).abs() < 1e-9);
    }
}
