use crate::error::PdbLineError;

/// One parsed ATOM/HETATM record, sliced from a PDB line's fixed columns, before it's grouped
/// into a residue.
#[derive(Clone, Debug)]
pub(crate) struct RawAtom {
    pub serial: i32,
    pub name: String,
    pub res_name: String,
    pub chain_id: String,
    pub res_seq: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub temp_factor: f64,
    pub element: String,
}

fn field<'a>(line: &'a str, line_number: usize, record: &'static str, range: std::ops::Range<usize>) -> Result<&'a str, PdbLineError> {
    line.get(range).ok_or(PdbLineError::LineTooShort { line_number, record })
}

fn parse_f64(s: &str, line_number: usize, record: &'static str, field_name: &'static str) -> Result<f64, PdbLineError> {
    s.trim().parse().map_err(|_| PdbLineError::MalformedField { line_number, record, field: field_name })
}

fn parse_i32(s: &str, line_number: usize, record: &'static str, field_name: &'static str) -> Result<i32, PdbLineError> {
    s.trim().parse().map_err(|_| PdbLineError::MalformedField { line_number, record, field: field_name })
}

/// Parses one `ATOM`/`HETATM` line by its fixed PDB column layout. Element falls back to the first non-digit character of the
/// atom name when columns 77-78 are blank, matching how PDB files from older software omit them.
pub(crate) fn parse_atom_line(line: &str, line_number: usize) -> Result<RawAtom, PdbLineError> {
    const RECORD: &str = "ATOM";
    let serial = parse_i32(field(line, line_number, RECORD, 6..11)?, line_number, RECORD, "serial")?;
    let name = field(line, line_number, RECORD, 12..16)?.trim().to_string();
    let res_name = field(line, line_number, RECORD, 17..20)?.trim().to_string();
    let chain_id = field(line, line_number, RECORD, 21..22)?.to_string();
    let res_seq = parse_i32(field(line, line_number, RECORD, 22..26)?, line_number, RECORD, "res_seq")?;
    let x = parse_f64(field(line, line_number, RECORD, 30..38)?, line_number, RECORD, "x")?;
    let y = parse_f64(field(line, line_number, RECORD, 38..46)?, line_number, RECORD, "y")?;
    let z = parse_f64(field(line, line_number, RECORD, 46..54)?, line_number, RECORD, "z")?;
    let temp_factor = line
        .get(60..66)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0);
    let element = line
        .get(76..78)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| name.trim_start_matches(|c: char| c.is_ascii_digit()).chars().take(1).collect());
    Ok(RawAtom { serial, name, res_name, chain_id, res_seq, x, y, z, temp_factor, element })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Places each field at its exact 0-indexed byte offset, matching [`parse_atom_line`]'s own
    /// slices rather than trusting column arithmetic in a `format!` template.
    pub(crate) fn atom_line(serial: i32, name: &str, res_name: &str, chain: &str, seq: i32, x: f64, y: f64, z: f64) -> String {
        let mut line: Vec<u8> = vec![b' '; 78];
        line[0..4].copy_from_slice(b"ATOM");
        let put_left = |line: &mut Vec<u8>, range: std::ops::Range<usize>, text: &str| {
            let text = format!("{:<width$}", text, width = range.len());
            line[range].copy_from_slice(text.as_bytes());
        };
        let put_right = |line: &mut Vec<u8>, range: std::ops::Range<usize>, text: &str| {
            let text = format!("{:>width$}", text, width = range.len());
            line[range].copy_from_slice(text.as_bytes());
        };
        put_right(&mut line, 6..11, &serial.to_string());
        put_left(&mut line, 12..16, name);
        put_left(&mut line, 17..20, res_name);
        line[21..22].copy_from_slice(chain.as_bytes());
        put_right(&mut line, 22..26, &seq.to_string());
        put_right(&mut line, 30..38, &format!("{x:.3}"));
        put_right(&mut line, 38..46, &format!("{y:.3}"));
        put_right(&mut line, 46..54, &format!("{z:.3}"));
        put_right(&mut line, 76..78, name.trim_start_matches(|c: char| c.is_ascii_digit()).get(0..1).unwrap_or("C"));
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn parses_a_well_formed_atom_line() {
        let line = atom_line(1, "CA", "ALA", "A", 12, 1.5, 2.5, 3.5);
        let atom = parse_atom_line(&line, 1).unwrap();
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.res_name, "ALA");
        assert_eq!(atom.chain_id, "A");
        assert_eq!(atom.res_seq, 12);
        assert!((atom.x - 1.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_a_truncated_line() {
        let err = parse_atom_line("ATOM  ", 1).unwrap_err();
        assert!(matches!(err, PdbLineError::LineTooShort { .. }));
    }
}
