//! A small, explicitly ancillary structure-file reader: ATOM/HETATM, HELIX, SHEET and SSBOND
//! record lines only, column-sliced by their fixed PDB layout. Builds exactly the external model
//! the interaction engine consumes and nothing else — no CIF, no remediation, no
//! alternate-conformer handling.

mod atom_line_parser;
mod error;
mod helix_line_parser;
mod model;
mod reader;
mod sheet_line_parser;
mod ssbond_line_parser;

pub use error::PdbLineError;
pub use model::Model;
pub use reader::read_structure;
