use log::{debug, warn};

use rin_geom::Vec3;
use rin_interactions::Connection;
use rin_model::{resolve_secondary_structure, Atom, IllformedPolicy, Residue, ResidueId};

use crate::atom_line_parser::{parse_atom_line, RawAtom};
use crate::error::PdbLineError;
use crate::helix_line_parser::parse_helix_line;
use crate::model::Model;
use crate::sheet_line_parser::parse_sheet_line;
use crate::ssbond_line_parser::parse_ssbond_line;

fn raw_atom_to_atom(raw: &RawAtom) -> Atom {
    let mut atom = Atom::new(raw.name.clone(), raw.element.clone(), Vec3::new(raw.x, raw.y, raw.z), raw.res_name.clone());
    atom.serial = raw.serial;
    atom.temp_factor = raw.temp_factor;
    atom
}

/// Reads ATOM/HETATM, HELIX, SHEET and SSBOND records out of `text` and assembles them into a
/// [`Model`] plus the disulfide [`Connection`]s the pipeline consumes directly. `protein_name` is
/// supplied by the caller (this reader never looks at the HEADER record).
pub fn read_structure(
    text: &str,
    protein_name: impl Into<String>,
    illformed_policy: IllformedPolicy,
) -> Result<(Model, Vec<Connection>), PdbLineError> {
    let protein_name = protein_name.into();
    let mut raw_atoms: Vec<RawAtom> = Vec::new();
    let mut helices = Vec::new();
    let mut sheets = Vec::new();
    let mut ssbonds = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        if line.starts_with("ATOM") || line.starts_with("HETATM") {
            raw_atoms.push(parse_atom_line(line, line_number)?);
        } else if let Some(helix) = parse_helix_line(line) {
            helices.push(helix);
        } else if let Some(sheet) = parse_sheet_line(line) {
            sheets.push(sheet);
        } else if let Some(ssbond) = parse_ssbond_line(line) {
            ssbonds.push(ssbond);
        }
    }

    if raw_atoms.is_empty() {
        return Err(PdbLineError::EmptyStructure);
    }
    debug!("read {} atom records, {} helices, {} sheets, {} ssbonds", raw_atoms.len(), helices.len(), sheets.len(), ssbonds.len());

    let any_annotations_present = !helices.is_empty() || !sheets.is_empty();
    let mut residues = Vec::new();
    let mut group: Vec<RawAtom> = Vec::new();
    let mut group_key: Option<(String, i32, String)> = None;

    let flush = |group: &mut Vec<RawAtom>, key: &(String, i32, String), residues: &mut Vec<Residue>| -> Result<(), PdbLineError> {
        if group.is_empty() {
            return Ok(());
        }
        let (chain_id, seq, res_name) = key.clone();
        let atoms: Vec<Atom> = group.iter().map(raw_atom_to_atom).collect();
        let ss = resolve_secondary_structure(&chain_id, seq, &helices, &sheets, any_annotations_present);
        let id = ResidueId::new(chain_id, seq, res_name);
        match Residue::build(id, protein_name.clone(), atoms, ss, illformed_policy)? {
            Some(residue) => residues.push(residue),
            None => {}
        }
        group.clear();
        Ok(())
    };

    for raw in raw_atoms {
        let key = (raw.chain_id.clone(), raw.res_seq, raw.res_name.clone());
        if group_key.as_ref() != Some(&key) {
            if let Some(prev_key) = &group_key {
                flush(&mut group, prev_key, &mut residues)?;
            }
            group_key = Some(key);
        }
        group.push(raw);
    }
    if let Some(key) = &group_key {
        flush(&mut group, key, &mut residues)?;
    }

    if residues.is_empty() {
        warn!("every residue in the structure was dropped by the illformed-group policy");
    }

    let connections = ssbonds
        .into_iter()
        .map(|s| Connection {
            a: ResidueId::new(s.chain_id_1, s.seq_1, "CYS"),
            b: ResidueId::new(s.chain_id_2, s.seq_2, "CYS"),
            distance: s.length,
        })
        .collect();

    Ok((Model { protein_name, residues }, connections))
}
