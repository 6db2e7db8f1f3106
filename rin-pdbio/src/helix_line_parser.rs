use rin_model::HelixInterval;

/// Parses one `HELIX` record into a `HelixInterval` by its fixed column layout, returning `None`
/// for anything that doesn't fit.
pub(crate) fn parse_helix_line(line: &str) -> Option<HelixInterval> {
    if !line.starts_with("HELIX") {
        return None;
    }
    let serial = line.get(7..10)?.trim().parse().ok()?;
    let chain_id = line.get(19..20)?.to_string();
    let start_seq = line.get(21..25)?.trim().parse().ok()?;
    let end_seq = line.get(33..37)?.trim().parse().ok()?;
    Some(HelixInterval { chain_id, serial, start_seq, end_seq })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Places each field at its exact 0-indexed byte offset, matching [`parse_helix_line`]'s own
    /// slices rather than trusting column arithmetic in a `format!` template.
    fn helix_line(serial: i32, chain: &str, start_seq: i32, end_seq: i32) -> String {
        let mut line: Vec<u8> = vec![b' '; 40];
        line[0..5].copy_from_slice(b"HELIX");
        let put = |line: &mut Vec<u8>, range: std::ops::Range<usize>, text: &str| {
            let text = format!("{:>width$}", text, width = range.len());
            line[range].copy_from_slice(text.as_bytes());
        };
        put(&mut line, 7..10, &serial.to_string());
        line[19..20].copy_from_slice(chain.as_bytes());
        put(&mut line, 21..25, &start_seq.to_string());
        line[31..32].copy_from_slice(chain.as_bytes());
        put(&mut line, 33..37, &end_seq.to_string());
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn parses_a_helix_record() {
        let line = helix_line(1, "A", 10, 20);
        let helix = parse_helix_line(&line).unwrap();
        assert_eq!(helix.chain_id, "A");
        assert_eq!(helix.start_seq, 10);
        assert_eq!(helix.end_seq, 20);
    }

    #[test]
    fn non_helix_lines_are_ignored() {
        assert!(parse_helix_line("ATOM      1  CA  ALA A  12").is_none());
    }
}
