use super::consts::*;
use crate::RecordDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LengthError {
    #[error("record at offset {0} extends past the end of the dump")]
    UnexpectedEof(usize),
}

/// Verdict of a length check on a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthVerdict {
    /// The reported length was compared against the decoded expectation.
    Checked { expected: usize, passed: bool },
    /// The decoded expectation is reported without a pass/fail judgement.
    Observed { expected: usize },
    /// No length rule exists for this template.
    NoRule,
}

/// Recomputes the expected length of a record from the length fields inside
/// its payload and compares it to the length reported by the header.
///
/// The defect list templates are `Observed` rather than `Checked`: their
/// reported length covers however much of the list fit into the dump, so
/// only the recomputed total is surfaced.
pub fn check_length(
    data: &[u8],
    record: &RecordDescriptor,
) -> Result<LengthVerdict, LengthError> {
    let template = record.template;

    if template <= LOG_PAGE_TEMPLATE_MAX {
        let page_length = read_u16_be(data, record.offset, PAGE_LENGTH_OFFSET)? as usize;
        let expected = LOG_PAGE_HEADER_LEN + page_length;
        return Ok(LengthVerdict::Checked {
            expected,
            passed: record.length == expected,
        });
    }

    if template <= VPD_PAGE_TEMPLATE_MAX {
        let page_length = read_u8(data, record.offset, VPD_PAGE_LENGTH_OFFSET)? as usize;
        let expected = VPD_PAGE_HEADER_LEN + page_length;
        return Ok(LengthVerdict::Checked {
            expected,
            passed: record.length == expected,
        });
    }

    let verdict = match template {
        READ_CAPACITY_10_TEMPLATE => LengthVerdict::Checked {
            expected: READ_CAPACITY_10_REPLY_LEN,
            passed: record.length == READ_CAPACITY_10_REPLY_LEN,
        },
        READ_CAPACITY_16_TEMPLATE => LengthVerdict::Checked {
            expected: READ_CAPACITY_16_REPLY_LEN,
            passed: record.length == READ_CAPACITY_16_REPLY_LEN,
        },
        DEFECT_GLIST_TEMPLATE | DEFECT_PLIST_TEMPLATE => {
            let list_length =
                read_u32_be(data, record.offset, DEFECT_LIST_LENGTH_OFFSET)? as usize;
            LengthVerdict::Observed {
                expected: DEFECT_DATA_HEADER_LEN + list_length,
            }
        }
        DEFECT_DATA_SHORT_TEMPLATE => {
            let list_length = read_u8(data, record.offset, DEFECT_LIST_LENGTH_OFFSET)? as usize;
            LengthVerdict::Observed {
                expected: DEFECT_DATA_HEADER_LEN + list_length,
            }
        }
        _ => LengthVerdict::NoRule,
    };

    Ok(verdict)
}

fn read_u8(data: &[u8], base: usize, rel: usize) -> Result<u8, LengthError> {
    base.checked_add(rel)
        .and_then(|pos| data.get(pos).copied())
        .ok_or(LengthError::UnexpectedEof(base))
}

fn read_u16_be(data: &[u8], base: usize, rel: usize) -> Result<u16, LengthError> {
    let bytes = [read_u8(data, base, rel)?, read_u8(data, base, rel + 1)?];
    Ok(u16::from_be_bytes(bytes))
}

fn read_u32_be(data: &[u8], base: usize, rel: usize) -> Result<u32, LengthError> {
    let bytes = [
        read_u8(data, base, rel)?,
        read_u8(data, base, rel + 1)?,
        read_u8(data, base, rel + 2)?,
        read_u8(data, base, rel + 3)?,
    ];
    Ok(u32::from_be_bytes(bytes))
}
