use rin_model::SheetInterval;

/// Parses one `SHEET` record into a `SheetInterval` by its fixed PDB column layout.
pub(crate) fn parse_sheet_line(line: &str) -> Option<SheetInterval> {
    if !line.starts_with("SHEET") {
        return None;
    }
    let sheet_id = line.get(11..14)?.trim().to_string();
    let chain_id = line.get(21..22)?.to_string();
    let start_seq = line.get(22..26)?.trim().parse().ok()?;
    let end_seq = line.get(33..37)?.trim().parse().ok()?;
    Some(SheetInterval { chain_id, sheet_id, start_seq, end_seq })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_line(sheet_id: &str, chain: &str, start_seq: i32, end_seq: i32) -> String {
        let mut line: Vec<u8> = vec![b' '; 40];
        line[0..5].copy_from_slice(b"SHEET");
        let put = |line: &mut Vec<u8>, range: std::ops::Range<usize>, text: &str| {
            let text = format!("{:>width$}", text, width = range.len());
            line[range].copy_from_slice(text.as_bytes());
        };
        put(&mut line, 11..14, sheet_id);
        line[21..22].copy_from_slice(chain.as_bytes());
        put(&mut line, 22..26, &start_seq.to_string());
        put(&mut line, 33..37, &end_seq.to_string());
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn parses_a_sheet_record() {
        let line = sheet_line("A", "B", 5, 9);
        let sheet = parse_sheet_line(&line).unwrap();
        assert_eq!(sheet.sheet_id, "A");
        assert_eq!(sheet.chain_id, "B");
        assert_eq!(sheet.start_seq, 5);
        assert_eq!(sheet.end_seq, 9);
    }

    #[test]
    fn non_sheet_lines_are_ignored() {
        assert!(parse_sheet_line("HELIX    1").is_none());
    }
}
