use thiserror::Error;

/// Failure modes that can arise while building the residue value model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("residue {residue_id} has an ill-formed {group} group: expected atoms {expected:?}, found {found:?}")]
    IllformedGroup {
        residue_id: String,
        group: &'static str,
        expected: Vec<&'static str>,
        found: Vec<String>,
    },

    #[error("residue {0} is outside the fixed set of residues with a defined ionic effective charge")]
    UnsupportedResidue(String),
}
