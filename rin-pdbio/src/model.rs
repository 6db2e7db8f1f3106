use rin_model::Residue;

/// The external interface the pipeline consumes: a protein name plus its residues, already
/// grouped and classified by secondary structure.
#[derive(Clone, Debug)]
pub struct Model {
    pub protein_name: String,
    pub residues: Vec<Residue>,
}
