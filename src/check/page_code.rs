use super::consts::*;
use crate::RecordDescriptor;

/// Outcome of a page-code self-check on a single record.
///
/// `NoRule` and `OutOfBounds` are distinct so that "no check exists for
/// this template" is never conflated with a malformed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCodeOutcome {
    Passed,
    Failed { expected: u8, found: u8 },
    NoRule,
    OutOfBounds,
}

/// Page code expected at record byte 2 for the error-counter templates.
pub fn expected_page_code(template: u32) -> Option<u8> {
    match template {
        WRITE_ERROR_COUNTER_TEMPLATE => Some(PAGE_CODE_WRITE_ERROR_COUNTER),
        READ_ERROR_COUNTER_TEMPLATE => Some(PAGE_CODE_READ_ERROR_COUNTER),
        READ_REVERSE_ERROR_COUNTER_TEMPLATE => Some(PAGE_CODE_READ_REVERSE_ERROR_COUNTER),
        _ => None,
    }
}

/// Checks that the record at `record.offset` carries the page code its
/// template prescribes.
pub fn check_page_code(data: &[u8], record: &RecordDescriptor) -> PageCodeOutcome {
    let Some(expected) = expected_page_code(record.template) else {
        return PageCodeOutcome::NoRule;
    };

    let found = record
        .offset
        .checked_add(PAGE_CODE_OFFSET)
        .and_then(|pos| data.get(pos).copied());

    match found {
        Some(found) if found == expected => PageCodeOutcome::Passed,
        Some(found) => PageCodeOutcome::Failed { expected, found },
        None => PageCodeOutcome::OutOfBounds,
    }
}
