// Static lookup data for Version 1 symbols. Indexed by `ECLevel as usize`
// where a table is per level.

// Codeword counts
//------------------------------------------------------------------------------

pub static DATA_CODEWORDS: [usize; 4] = [19, 16, 13, 9];

pub static EC_CODEWORDS: [usize; 4] = [7, 10, 13, 17];

// Mode indicators & character count bit lengths
//------------------------------------------------------------------------------

pub const MODE_INDICATOR_BITS: usize = 4;

pub const ALPHANUMERIC_INDICATOR: u8 = 0b0010;

pub const BYTE_INDICATOR: u8 = 0b0100;

pub const ALPHANUMERIC_COUNT_BITS: usize = 9;

pub const BYTE_COUNT_BITS: usize = 8;

// Alphanumeric character set
//------------------------------------------------------------------------------

pub fn alphanumeric_value(ch: char) -> Option<u16> {
    match ch {
        '0'..='9' => Some(ch as u16 - '0' as u16),
        'A'..='Z' => Some(ch as u16 - 'A' as u16 + 10),
        ' ' => Some(36),
        '$' => Some(37),
        '%' => Some(38),
        '*' => Some(39),
        '+' => Some(40),
        '-' => Some(41),
        '.' => Some(42),
        '/' => Some(43),
        ':' => Some(44),
        _ => None,
    }
}

// Padding
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Format information
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

// BCH(15,5) coded & masked format strings, most significant bit first
pub static FORMAT_INFOS_QR: [[u16; 8]; 4] = [
    // L
    [0x77c4, 0x72f3, 0x7daa, 0x789d, 0x662f, 0x6318, 0x6c41, 0x6976],
    // M
    [0x5412, 0x5125, 0x5e7c, 0x5b4b, 0x45f9, 0x40ce, 0x4f97, 0x4aa0],
    // Q
    [0x355f, 0x3068, 0x3f31, 0x3a06, 0x24b4, 0x2183, 0x2eda, 0x2bed],
    // H
    [0x1689, 0x13be, 0x1ce7, 0x19d0, 0x0762, 0x0255, 0x0d0c, 0x083b],
];
