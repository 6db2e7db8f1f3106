use rin_chem::OplsParams;
use rin_geom::Vec3;

/// An input atom record, as handed to residue construction. Carries the residue metadata an
/// atom needs for its derived predicates without holding a reference back to its residue.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub name: String,
    pub element: String,
    pub position: Vec3,
    pub formal_charge: i8,
    pub temp_factor: f64,
    pub serial: i32,
    pub is_hydrogen: bool,
    pub residue_name: String,
}

impl Atom {
    pub fn new(
        name: impl Into<String>,
        element: impl Into<String>,
        position: Vec3,
        residue_name: impl Into<String>,
    ) -> Atom {
        let name = name.into();
        let element = element.into();
        let is_hydrogen = element == "H" || name.starts_with('H');
        Atom {
            name,
            element,
            position,
            formal_charge: 0,
            temp_factor: 0.0,
            serial: 0,
            is_hydrogen,
            residue_name: residue_name.into(),
        }
    }

    pub fn is_donor(&self) -> bool {
        rin_chem::is_hydrogen_donor(&self.residue_name, &self.name)
    }

    pub fn donor_capacity(&self) -> u8 {
        rin_chem::hydrogen_donor_capacity(&self.residue_name, &self.name)
    }

    pub fn is_acceptor(&self) -> bool {
        rin_chem::is_hydrogen_acceptor(&self.residue_name, &self.name)
    }

    pub fn acceptor_capacity(&self) -> u8 {
        rin_chem::hydrogen_acceptor_capacity(&self.residue_name, &self.name)
    }

    pub fn is_cation(&self) -> bool {
        rin_chem::cation_atom_name(&self.residue_name) == Some(self.name.as_str())
    }

    pub fn in_positive_ionic_group(&self) -> bool {
        rin_chem::ionic_group_atom_names(&self.residue_name, rin_chem::IonicSign::Positive)
            .map(|names| names.contains(&self.name.as_str()))
            .unwrap_or(false)
    }

    pub fn in_negative_ionic_group(&self) -> bool {
        rin_chem::ionic_group_atom_names(&self.residue_name, rin_chem::IonicSign::Negative)
            .map(|names| names.contains(&self.name.as_str()))
            .unwrap_or(false)
    }

    pub fn vdw_params(&self) -> Option<OplsParams> {
        rin_chem::vdw_params(&self.residue_name, &self.name, &self.element)
    }

    pub fn is_vdw_candidate(&self) -> bool {
        self.vdw_params().is_some()
    }

    pub fn is_main_chain(&self) -> bool {
        rin_chem::is_main_chain(&self.name)
    }

    pub fn mass(&self) -> f64 {
        rin_chem::element_mass(&self.element).unwrap_or(12.011)
    }

    pub fn vdw_radius(&self) -> f64 {
        rin_chem::element_vdw_radius(&self.element).unwrap_or(1.77)
    }

    /// True if this hydrogen is attached to `donor_name` on the same residue. A hydrogen's core
    /// (its name with a leading positional digit and the leading "H" stripped) either matches
    /// the donor's own suffix directly (`"HE2"` core `"E2"` matches donor `"NE2"`), or matches it
    /// after stripping one trailing multiplicity digit (`"HZ1"` core `"Z1"` -> `"Z"` matches
    /// donor `"NZ"`; `"HH21"` core `"H21"` -> `"H2"` matches donor `"NH2"`).
    pub fn attaches_to(&self, donor_name: &str) -> bool {
        if !self.is_hydrogen || donor_name.len() < 2 {
            return false;
        }
        let suffix = &donor_name[1..];
        let core = self
            .name
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .trim_start_matches('H');
        if core == suffix {
            return true;
        }
        if let Some(without_trailing_digit) = core.strip_suffix(|c: char| c.is_ascii_digit()) {
            return without_trailing_digit == suffix;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, element: &str, res_name: &str) -> Atom {
        Atom::new(name, element, Vec3::zero(), res_name)
    }

    #[test]
    fn backbone_nitrogen_is_a_donor_and_carbon_is_an_acceptor() {
        let n = atom("N", "N", "ALA");
        let c = atom("C", "C", "ALA");
        assert!(n.is_donor());
        assert!(c.is_acceptor());
    }

    #[test]
    fn lys_nz_is_a_cation_and_in_the_positive_ionic_group() {
        let nz = atom("NZ", "N", "LYS");
        assert!(nz.is_cation());
        assert!(nz.in_positive_ionic_group());
        assert!(!nz.in_negative_ionic_group());
    }

    #[test]
    fn hydrogen_attaches_to_its_heavy_atom_by_suffix() {
        let h = atom("HE2", "H", "HIS");
        assert!(h.attaches_to("NE2"));
        assert!(!h.attaches_to("ND1"));
    }

    #[test]
    fn vdw_candidacy_follows_the_opls_table() {
        let ca = atom("CA", "C", "ALA");
        let unknown = atom("ZZ9", "C", "ALA");
        assert!(ca.is_vdw_candidate());
        assert!(!unknown.is_vdw_candidate());
    }
}
