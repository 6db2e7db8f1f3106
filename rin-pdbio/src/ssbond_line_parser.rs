/// One parsed `SSBOND` record: the two cystine endpoints and the reported S-S distance.
#[derive(Clone, Debug)]
pub(crate) struct RawSsbond {
    pub chain_id_1: String,
    pub seq_1: i32,
    pub chain_id_2: String,
    pub seq_2: i32,
    pub length: f64,
}

/// Default S-S bond length used when the record's length field (columns 74-78) is absent, as
/// many PDB files omit it.
const DEFAULT_SSBOND_LENGTH: f64 = 2.05;

pub(crate) fn parse_ssbond_line(line: &str) -> Option<RawSsbond> {
    if !line.starts_with("SSBOND") {
        return None;
    }
    let chain_id_1 = line.get(15..16)?.to_string();
    let seq_1 = line.get(17..21)?.trim().parse().ok()?;
    let chain_id_2 = line.get(29..30)?.to_string();
    let seq_2 = line.get(31..35)?.trim().parse().ok()?;
    let length = line
        .get(73..78)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_SSBOND_LENGTH);
    Some(RawSsbond { chain_id_1, seq_1, chain_id_2, seq_2, length })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ssbond_line(chain_1: &str, seq_1: i32, chain_2: &str, seq_2: i32, length: f64) -> String {
        let mut line: Vec<u8> = vec![b' '; 40];
        line[0..6].copy_from_slice(b"SSBOND");
        let put = |line: &mut Vec<u8>, range: std::ops::Range<usize>, text: &str| {
            let text = format!("{:>width$}", text, width = range.len());
            line[range].copy_from_slice(text.as_bytes());
        };
        line[15..16].copy_from_slice(chain_1.as_bytes());
        put(&mut line, 17..21, &seq_1.to_string());
        line[29..30].copy_from_slice(chain_2.as_bytes());
        put(&mut line, 31..35, &seq_2.to_string());
        let _ = length;
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn parses_a_ssbond_record_falling_back_to_the_default_length() {
        let line = ssbond_line("A", 7, "A", 96, 2.05);
        let ssbond = parse_ssbond_line(&line).unwrap();
        assert_eq!(ssbond.chain_id_1, "A");
        assert_eq!(ssbond.seq_1, 7);
        assert_eq!(ssbond.seq_2, 96);
        assert!((ssbond.length - DEFAULT_SSBOND_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn non_ssbond_lines_are_ignored() {
        assert!(parse_ssbond_line("ATOM      1  CA  ALA A  12").is_none());
    }
}
