// Error-counter log pages carry their page code at record byte 2.
pub const PAGE_CODE_OFFSET: usize = 2;

pub const WRITE_ERROR_COUNTER_TEMPLATE: u32 = 17;
pub const READ_ERROR_COUNTER_TEMPLATE: u32 = 18;
pub const READ_REVERSE_ERROR_COUNTER_TEMPLATE: u32 = 19;

pub const PAGE_CODE_WRITE_ERROR_COUNTER: u8 = 0x02;
pub const PAGE_CODE_READ_ERROR_COUNTER: u8 = 0x03;
pub const PAGE_CODE_READ_REVERSE_ERROR_COUNTER: u8 = 0x04;

// LOG SENSE replies: 4-byte page header, 16-bit page length at bytes 2..4.
pub const LOG_PAGE_TEMPLATE_MAX: u32 = 315;
pub const LOG_PAGE_HEADER_LEN: usize = 4;
pub const PAGE_LENGTH_OFFSET: usize = 2;

// INQUIRY VPD replies: 4-byte header, 8-bit page length at byte 3.
pub const VPD_PAGE_TEMPLATE_MAX: u32 = 328;
pub const VPD_PAGE_HEADER_LEN: usize = 4;
pub const VPD_PAGE_LENGTH_OFFSET: usize = 3;

pub const READ_CAPACITY_10_TEMPLATE: u32 = 330;
pub const READ_CAPACITY_10_REPLY_LEN: usize = 8;
pub const READ_CAPACITY_16_TEMPLATE: u32 = 331;
pub const READ_CAPACITY_16_REPLY_LEN: usize = 32;

// READ DEFECT DATA (12) replies: 8-byte header, 32-bit defect list length
// at bytes 4..8 (8-bit for the short form).
pub const DEFECT_GLIST_TEMPLATE: u32 = 332;
pub const DEFECT_PLIST_TEMPLATE: u32 = 333;
pub const DEFECT_DATA_SHORT_TEMPLATE: u32 = 334;
pub const DEFECT_DATA_HEADER_LEN: usize = 8;
pub const DEFECT_LIST_LENGTH_OFFSET: usize = 4;
