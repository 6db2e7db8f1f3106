use thiserror::Error;

use rin_model::ModelError;

/// Failure modes surfaced while reading ATOM/HETATM/HELIX/SHEET/SSBOND lines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdbLineError {
    #[error("line {line_number} is shorter than the {record} record requires")]
    LineTooShort { line_number: usize, record: &'static str },

    #[error("line {line_number}: could not parse {field} of the {record} record")]
    MalformedField { line_number: usize, record: &'static str, field: &'static str },

    #[error("no ATOM/HETATM records found in the input")]
    EmptyStructure,

    #[error("residue model error: {0}")]
    Model(#[from] ModelError),
}
