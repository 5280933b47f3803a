//! Parser for the text header of a DA log dump.

use crate::RecordDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("invalid record token {token:?} on line {line}")]
    InvalidToken { token: String, line: usize },
    #[error("template number {0} out of range")]
    TemplateOutOfRange(usize),
}

/// Extracts record descriptors from the text header of a dump.
///
/// A header line describes a record iff it contains `Record` but not
/// `Records` (the latter marks the total-count line). The last
/// whitespace-separated token of each such line joins a flat value stream,
/// and every run of 3 consecutive values forms one
/// (offset, length, template) descriptor, in encounter order. A trailing
/// remainder of 1 or 2 values is dropped.
///
/// The binary payload regions of the dump pass through unharmed: their
/// bytes are decoded lossily per line and never match the `Record` marker.
pub fn parse_report(data: &[u8]) -> Result<Vec<RecordDescriptor>, ReportError> {
    let mut values = Vec::new();

    for (index, line) in data.split(|&b| b == b'\n').enumerate() {
        let line = String::from_utf8_lossy(line);
        if !line.contains("Record") || line.contains("Records") {
            continue;
        }
        let Some(token) = line.split_whitespace().next_back() else {
            continue;
        };
        let value = token
            .parse::<usize>()
            .map_err(|_| ReportError::InvalidToken {
                token: token.to_string(),
                line: index + 1,
            })?;
        values.push(value);
    }

    if values.len() % 3 != 0 {
        log::debug!(
            "dropping {} trailing header value(s) short of a full record",
            values.len() % 3
        );
    }

    values
        .chunks_exact(3)
        .map(|chunk| {
            let template = u32::try_from(chunk[2])
                .map_err(|_| ReportError::TemplateOutOfRange(chunk[2]))?;
            Ok(RecordDescriptor {
                offset: chunk[0],
                length: chunk[1],
                template,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    #[test]
    fn parsing_empty_input_yields_no_records() {
        assert_eq!(parse_report(b"").unwrap(), vec![]);
    }

    #[test]
    fn parsing_ignores_unrelated_lines() {
        let report = b"Device: ST4000NM0023\nTotal Records 4\nnothing to see here\n";
        assert_eq!(parse_report(report).unwrap(), vec![]);
    }

    #[test]
    fn parsing_captures_the_last_token_of_record_lines() {
        let report = b"\
Log Page Record    Offset      512
Log Page Record    Length      48
Log Page Record    Template    17
";
        assert_debug_snapshot!(parse_report(report).unwrap(), @r###"
        [
            RecordDescriptor {
                offset: 512,
                length: 48,
                template: 17,
            },
        ]
        "###);
    }

    #[test]
    fn parsing_groups_values_in_encounter_order() {
        let report = b"\
Record Offset 100
Record Length 8
Record Template 330
Record Offset 200
Record Length 32
Record Template 331
";
        let records = parse_report(report).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].offset, 100);
        assert_eq!(records[0].length, 8);
        assert_eq!(records[0].template, 330);
        assert_eq!(records[1].offset, 200);
        assert_eq!(records[1].length, 32);
        assert_eq!(records[1].template, 331);
    }

    #[test]
    fn parsing_drops_a_trailing_partial_record() {
        let report = b"\
Record Offset 100
Record Length 8
Record Template 330
Record Offset 200
Record Length 32
";
        let records = parse_report(report).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 100);
    }

    #[test]
    fn parsing_skips_the_record_count_line() {
        let report = b"\
Total Records 2
Record Offset 100
Record Length 8
Record Template 330
";
        let records = parse_report(report).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 100);
    }

    #[test]
    fn parsing_survives_binary_payload_lines() {
        let mut dump = Vec::new();
        dump.extend_from_slice(b"Record Offset 100\n");
        dump.extend_from_slice(b"Record Length 8\n");
        dump.extend_from_slice(b"Record Template 330\n");
        dump.extend_from_slice(&[0xff, 0xfe, 0x00, 0x9c, 0x0a, 0x80, 0x81]);
        let records = parse_report(&dump).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].template, 330);
    }

    #[test]
    fn parsing_fails_for_a_non_integer_token() {
        let report = b"Record foo bar baz\n";
        assert_debug_snapshot!(parse_report(report).unwrap_err(), @r###"
        InvalidToken {
            token: "baz",
            line: 1,
        }
        "###);
    }

    #[test]
    fn parsing_fails_for_a_negative_token() {
        let report = b"Record Offset -5\n";
        assert_debug_snapshot!(parse_report(report).unwrap_err(), @r###"
        InvalidToken {
            token: "-5",
            line: 1,
        }
        "###);
    }

    #[test]
    fn parsing_fails_for_an_oversized_template() {
        let report = b"\
Record Offset 100
Record Length 8
Record Template 5000000000
";
        assert_debug_snapshot!(parse_report(report).unwrap_err(), @r###"
        TemplateOutOfRange(
            5000000000,
        )
        "###);
    }
}
