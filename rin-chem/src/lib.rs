//! Static chemistry schema: the residue- and atom-name tables that tell the rest of the engine
//! which atoms form rings, which form ionic groups, which can donate or accept a hydrogen bond,
//! and what an atom's OPLS van der Waals parameters are.
//!
//! Every table here is keyed by `(residue_name, atom_name)` or `(residue_name, atom_name,
//! element)`, specialized to the twenty standard amino acids plus the two protonation variants
//! (`AIB`, `HIP`) the OPLS table carries entries for.

/// A ring system a residue's side chain may contribute to a pi-stacking or pi-cation interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingKind {
    /// The sole ring of HIS, PHE or TYR, or the six-membered ring of TRP.
    Primary,
    /// TRP's second (five-membered) ring. Never a pi-cation candidate.
    Secondary,
}

/// The sign of a residue's ionizable side-chain group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IonicSign {
    Positive,
    Negative,
}

/// Atom names making up each ring a residue can contribute, in the order a polygon should be
/// wound (consecutive atoms are bonded).
pub fn ring_atom_names(res_name: &str, kind: RingKind) -> Option<&'static [&'static str]> {
    match (res_name, kind) {
        ("HIS", RingKind::Primary) => Some(&["CG", "ND1", "CD2", "CE1", "NE2"]),
        ("PHE", RingKind::Primary) => Some(&["CG", "CD1", "CD2", "CE1", "CE2", "CZ"]),
        ("TYR", RingKind::Primary) => Some(&["CG", "CD1", "CD2", "CE1", "CE2", "CZ"]),
        ("TRP", RingKind::Primary) => Some(&["CD2", "CE2", "CE3", "CZ2", "CZ3", "CH2"]),
        ("TRP", RingKind::Secondary) => Some(&["CG", "CD1", "NE1", "CE2", "CD2"]),
        _ => None,
    }
}

/// Whether a ring of `kind` on `res_name` is a candidate pi-cation partner (the six-membered
/// aromatic ring only; TRP's pyrrole ring is excluded).
pub fn is_pication_ring(res_name: &str, kind: RingKind) -> bool {
    match res_name {
        "PHE" | "TYR" => kind == RingKind::Primary,
        "TRP" => kind == RingKind::Primary,
        _ => false,
    }
}

/// Atom names of a residue's positive or negative ionizable group, if it has one of that sign.
pub fn ionic_group_atom_names(res_name: &str, sign: IonicSign) -> Option<&'static [&'static str]> {
    match (res_name, sign) {
        ("ARG", IonicSign::Positive) => Some(&["CZ", "NH1", "NH2"]),
        ("LYS", IonicSign::Positive) => Some(&["NZ"]),
        ("HIS", IonicSign::Positive) => Some(&["CG", "ND1", "CD2", "CE1", "NE2"]),
        ("ASP", IonicSign::Negative) => Some(&["CG", "OD1", "OD2"]),
        ("GLU", IonicSign::Negative) => Some(&["CD", "OE1", "OE2"]),
        _ => None,
    }
}

/// Effective point charge assigned to a residue's ionic group centroid, used in the Coulomb
/// (ionic bond) energy term. Unsigned; [`IonicSign`] supplies the sign.
pub fn ionic_effective_charge(res_name: &str) -> Option<f64> {
    match res_name {
        "LYS" => Some(0.640),
        "ARG" => Some(0.260),
        "HIS" => Some(0.380),
        "ASP" => Some(0.380),
        "GLU" => Some(0.635),
        _ => None,
    }
}

/// The single atom on a residue that plays the role of "cation" in a pi-cation interaction.
pub fn cation_atom_name(res_name: &str) -> Option<&'static str> {
    match res_name {
        "LYS" => Some("NZ"),
        "ARG" => Some("NH2"),
        "HIS" => Some("ND1"),
        _ => None,
    }
}

/// Pi-cation `kappa` constant, keyed by the cation-bearing residue, used as
/// `energy = -(kappa * alpha) / distance^4`.
pub fn cation_kappa(cation_res_name: &str) -> Option<f64> {
    match cation_res_name {
        "LYS" => Some(1.00),
        "HIS" => Some(1.00),
        "ARG" => Some(0.25),
        _ => None,
    }
}

/// Pi-cation `alpha` constant, keyed by the aromatic ring's residue.
pub fn ring_alpha(ring_res_name: &str) -> Option<f64> {
    match ring_res_name {
        "PHE" => Some(190.0),
        "TYR" => Some(190.0),
        "TRP" => Some(150.0),
        _ => None,
    }
}

/// True for a backbone atom (`C`, `O`, `N`, `H`, `HA`) — used for the main-chain/side-chain
/// orientation label on a van der Waals edge.
pub fn is_main_chain(atom_name: &str) -> bool {
    matches!(atom_name, "C" | "O" | "N" | "H" | "HA")
}

/// True if `(res_name, atom_name)` can donate a hydrogen bond.
pub fn is_hydrogen_donor(res_name: &str, atom_name: &str) -> bool {
    matches!(
        (res_name, atom_name),
        ("ARG", "NH1") | ("ARG", "NH2") | ("ARG", "NE")
            | ("ASN", "ND2")
            | ("GLN", "NE2")
            | ("HIS", "NE2") | ("HIS", "ND1")
            | ("LYS", "NZ")
            | ("SER", "OG")
            | ("THR", "OG1")
            | ("TRP", "NE1")
            | ("TYR", "OH")
            | ("CYS", "SG")
    ) || atom_name == "N"
}

/// How many hydrogens `(res_name, atom_name)` can simultaneously donate, or 0 if it isn't a donor.
pub fn hydrogen_donor_capacity(res_name: &str, atom_name: &str) -> u8 {
    if !is_hydrogen_donor(res_name, atom_name) {
        return 0;
    }
    match (res_name, atom_name) {
        ("ARG", "NH1") | ("ARG", "NH2") => 2,
        ("ASN", "ND2") => 2,
        ("GLN", "NE2") => 2,
        ("LYS", "NZ") => 3,
        _ => 1,
    }
}

/// True if `(res_name, atom_name)` can accept a hydrogen bond. Backbone carbonyl carbon (`C`)
/// counts as an acceptor here, matching how the original force field scores it even though no
/// lone pair sits directly on carbon.
pub fn is_hydrogen_acceptor(res_name: &str, atom_name: &str) -> bool {
    matches!(
        (res_name, atom_name),
        ("ASN", "OD1")
            | ("ASP", "OD1") | ("ASP", "OD2")
            | ("GLN", "OE1")
            | ("GLU", "OE1") | ("GLU", "OE2")
            | ("HIS", "ND1") | ("HIS", "NE2")
            | ("SER", "OG")
            | ("THR", "OG1")
            | ("TYR", "OH")
            | ("MET", "SD")
    ) || matches!(atom_name, "C" | "O")
}

/// How many hydrogens `(res_name, atom_name)` can simultaneously accept, or 0 if it isn't an
/// acceptor.
pub fn hydrogen_acceptor_capacity(res_name: &str, atom_name: &str) -> u8 {
    if !is_hydrogen_acceptor(res_name, atom_name) {
        return 0;
    }
    match (res_name, atom_name) {
        ("ASN", "OD1")
        | ("ASP", "OD1") | ("ASP", "OD2")
        | ("GLN", "OE1")
        | ("GLU", "OE1") | ("GLU", "OE2")
        | ("SER", "OG")
        | ("THR", "OG1") => 2,
        _ => 1,
    }
}

/// Default atomic mass in daltons, used for mass-weighted centroids. Falls back to `None` for an
/// element this engine never expects to see (e.g. a ligand halogen).
pub fn element_mass(element: &str) -> Option<f64> {
    match element {
        "H" => Some(1.008),
        "C" => Some(12.011),
        "N" => Some(14.007),
        "O" => Some(15.994),
        "S" => Some(32.065),
        _ => None,
    }
}

/// Van der Waals radius in angstrom, used for the VdW interaction's surface-distance test.
pub fn element_vdw_radius(element: &str) -> Option<f64> {
    match element {
        "S" => Some(1.89),
        "C" => Some(1.77),
        "O" => Some(1.55),
        "N" => Some(1.60),
        _ => None,
    }
}

/// One row of the OPLS-derived van der Waals parameter table: partial charge, Lennard-Jones
/// sigma (angstrom) and epsilon (kcal/mol).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OplsParams {
    pub q: f64,
    pub sigma: f64,
    pub epsilon: f64,
}

/// The 66-row OPLS table, indexed exactly as the original force-field table: index 0 is an
/// unused placeholder row, valid rows run 1..=65. Rows with `sigma == 0.0` have no defined
/// Lennard-Jones term (they're pure-charge entries, e.g. backbone amide hydrogens) and are never
/// returned as a van der Waals candidate.
const OPLS_TABLE: [OplsParams; 66] = [
    OplsParams { q: 0.000, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.500, sigma: 3.750, epsilon: 0.105 },
    OplsParams { q: -0.500, sigma: 2.960, epsilon: 0.210 },
    OplsParams { q: -0.570, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.370, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.200, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: 0.200, sigma: 3.800, epsilon: 0.080 },
    OplsParams { q: 0.000, sigma: 3.910, epsilon: 0.160 },
    OplsParams { q: 0.000, sigma: 3.850, epsilon: 0.080 },
    OplsParams { q: 0.000, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: 0.000, sigma: 3.905, epsilon: 0.175 },
    OplsParams { q: 0.000, sigma: 3.750, epsilon: 0.110 },
    OplsParams { q: -0.850, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.425, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.285, sigma: 3.800, epsilon: 0.080 },
    OplsParams { q: 0.285, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: -0.100, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: 0.700, sigma: 3.750, epsilon: 0.105 },
    OplsParams { q: -0.800, sigma: 2.960, epsilon: 0.210 },
    OplsParams { q: 0.310, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: -0.300, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.330, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.265, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: -0.700, sigma: 3.070, epsilon: 0.170 },
    OplsParams { q: 0.435, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.265, sigma: 3.850, epsilon: 0.080 },
    OplsParams { q: 0.265, sigma: 3.750, epsilon: 0.110 },
    OplsParams { q: 0.310, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: 0.100, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: 0.310, sigma: 3.800, epsilon: 0.080 },
    OplsParams { q: 0.100, sigma: 3.800, epsilon: 0.080 },
    OplsParams { q: 0.180, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: -0.450, sigma: 3.550, epsilon: 0.250 },
    OplsParams { q: 0.270, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.235, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: -0.470, sigma: 3.550, epsilon: 0.250 },
    OplsParams { q: 0.235, sigma: 3.800, epsilon: 0.170 },
    OplsParams { q: 0.300, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: -0.300, sigma: 3.550, epsilon: 0.250 },
    OplsParams { q: 0.200, sigma: 3.800, epsilon: 0.170 },
    OplsParams { q: -0.570, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.420, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: -0.490, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.410, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: 0.100, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: 0.130, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: -0.540, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.460, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.500, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: 0.330, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: -0.055, sigma: 3.750, epsilon: 0.145 },
    OplsParams { q: -0.800, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.460, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.640, sigma: 2.250, epsilon: 0.050 },
    OplsParams { q: -0.700, sigma: 3.250, epsilon: 0.170 },
    OplsParams { q: 0.440, sigma: 0.000, epsilon: 0.000 },
    OplsParams { q: 0.310, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: 0.070, sigma: 3.905, epsilon: 0.118 },
    OplsParams { q: 0.550, sigma: 3.750, epsilon: 0.105 },
    OplsParams { q: -0.450, sigma: 2.960, epsilon: 0.210 },
    OplsParams { q: 0.250, sigma: 3.800, epsilon: 0.080 },
    OplsParams { q: 0.250, sigma: 3.800, epsilon: 0.118 },
    OplsParams { q: -0.400, sigma: 3.000, epsilon: 0.170 },
    OplsParams { q: 0.250, sigma: 3.800, epsilon: 0.170 },
    OplsParams { q: 0.200, sigma: 3.800, epsilon: 0.050 },
    OplsParams { q: 0.000, sigma: 3.960, epsilon: 0.145 },
];

/// Resolves `(res_name, atom_name, element)` to its row in [`OPLS_TABLE`], following the same
/// per-residue decision tree as the original force-field assignment code. Returns `None` for any
/// combination the table doesn't cover (ligands, waters, unrecognized atom names).
pub fn vdw_table_index(res_name: &str, atom_name: &str, element: &str) -> Option<usize> {
    // Atoms shared by (almost) every residue's backbone are resolved first, by element.
    let by_backbone_element = || -> Option<usize> {
        match atom_name {
            "N" => Some(3),
            "C" => Some(1),
            "O" => Some(2),
            _ => None,
        }
    };

    let idx = match (res_name, atom_name) {
        ("GLY", "CA") => Some(5),
        ("GLY", _) => by_backbone_element(),

        ("PRO", "CA") => Some(14),
        ("PRO", "CB") | ("PRO", "CG") => Some(9),
        ("PRO", "CD") => Some(15),
        ("PRO", _) => by_backbone_element(),

        ("ALA", "CA") => Some(6),
        ("ALA", "CB") => Some(7),
        ("ALA", _) => by_backbone_element(),

        ("AIB", "CA") => Some(64),
        ("AIB", "CB") => Some(65),
        ("AIB", _) => by_backbone_element(),

        ("ILE", "CB") => Some(8),
        ("ILE", "CG") => Some(7),
        ("ILE", "CD") => Some(10),

        ("SER", "CB") => Some(22),
        ("SER", "OG") => Some(23),

        ("THR", "CB") => Some(25),
        ("THR", "OG1") => Some(23),
        ("THR", "CG") => Some(7),

        ("TYR", "CB") => Some(9),
        ("TYR", "CG") | ("TYR", "CD1") | ("TYR", "CD2") | ("TYR", "CE1") | ("TYR", "CE2") => Some(11),
        ("TYR", "CZ") => Some(26),
        ("TYR", "OH") => Some(23),

        ("ASN", "CB") => Some(9),
        ("ASN", "CG") => Some(1),
        ("ASN", "OD1") => Some(2),
        ("ASN", "ND2") => Some(12),

        ("ASP", "CB") => Some(16),
        ("ASP", "CG") => Some(17),
        ("ASP", "OD1") | ("ASP", "OD2") => Some(18),

        ("HIS", "CB") => Some(9),
        ("HIS", "CG") => Some(45),
        ("HIS", "ND1") => Some(40),
        ("HIS", "CD2") => Some(44),
        ("HIS", "CE1") => Some(43),
        ("HIS", "NE2") => Some(42),

        ("TRP", "CB") => Some(9),
        ("TRP", "CG") => Some(50),
        ("TRP", "CD1") => Some(45),
        ("TRP", "CD2") => Some(50),
        ("TRP", "NE1") => Some(40),
        ("TRP", "CE2") => Some(45),
        ("TRP", "CE3") | ("TRP", "CZ2") | ("TRP", "CZ3") | ("TRP", "CH2") => Some(11),

        ("LYS", "CB") | ("LYS", "CG") | ("LYS", "CD") => Some(9),
        ("LYS", "CE") => Some(19),
        ("LYS", "NZ") => Some(20),

        ("VAL", "CB") => Some(8),
        ("VAL", "CG1") | ("VAL", "CG2") => Some(7),

        ("LEU", "CB") => Some(9),
        ("LEU", "CG") => Some(8),
        ("LEU", "CD1") | ("LEU", "CD2") => Some(7),

        ("PHE", "CB") => Some(9),
        ("PHE", "CG") | ("PHE", "CD1") | ("PHE", "CD2") | ("PHE", "CE1") | ("PHE", "CE2") | ("PHE", "CZ") => Some(11),

        ("CYS", "CB") => Some(9),
        ("CYS", "SG") => Some(11),

        ("MET", "CB") => Some(9),
        ("MET", "CG") => Some(34),
        ("MET", "SD") => Some(35),
        ("MET", "CE") => Some(36),

        ("HIP", "CB") => Some(9),
        ("HIP", "CG") => Some(49),
        ("HIP", "ND1") => Some(46),
        ("HIP", "CD2") => Some(49),
        ("HIP", "CE1") => Some(48),
        ("HIP", "NE2") => Some(46),

        ("GLN", "CB") | ("GLN", "CG") => Some(9),
        ("GLN", "CD") => Some(1),
        ("GLN", "OE1") => Some(2),
        ("GLN", "NE2") => Some(12),
        ("GLN", "1HE2") | ("GLN", "2HE2") => Some(13),

        ("GLU", "CB") => Some(9),
        ("GLU", "CG") => Some(16),
        ("GLU", "CD") => Some(17),
        ("GLU", "OE1") | ("GLU", "OE2") => Some(18),

        ("ARG", "CB") => Some(9),
        ("ARG", "CG") => Some(57),
        ("ARG", "CD") => Some(56),
        ("ARG", "NE") => Some(54),
        ("ARG", "CZ") => Some(53),
        ("ARG", "NH1") | ("ARG", "NH2") => Some(51),

        _ => None,
    };

    idx.or_else(|| {
        // Every residue's backbone N/C/O falls back to the shared element-keyed rows, and
        // hydrogens never carry a Lennard-Jones term of their own.
        if matches!(atom_name, "N" | "C" | "O") {
            by_backbone_element()
        } else if element == "H" {
            None
        } else {
            None
        }
    })
}

/// Looks up the full [`OplsParams`] row for `(res_name, atom_name, element)`, if any.
pub fn vdw_params(res_name: &str, atom_name: &str, element: &str) -> Option<OplsParams> {
    vdw_table_index(res_name, atom_name, element).map(|i| OPLS_TABLE[i])
}
