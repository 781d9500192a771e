use crate::common::tables::{
    alphanumeric_value, ALPHANUMERIC_COUNT_BITS, ALPHANUMERIC_INDICATOR, BYTE_COUNT_BITS,
    BYTE_INDICATOR,
};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Alphanumeric,
    Byte,
}

impl Mode {
    pub fn indicator(self) -> u8 {
        match self {
            Self::Alphanumeric => ALPHANUMERIC_INDICATOR,
            Self::Byte => BYTE_INDICATOR,
        }
    }

    // Character count indicator length at Version 1
    pub fn char_cnt_bits(self) -> usize {
        match self {
            Self::Alphanumeric => ALPHANUMERIC_COUNT_BITS,
            Self::Byte => BYTE_COUNT_BITS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Alphanumeric => alphanumeric_value(ch).is_some(),
            Self::Byte => (ch as u32) <= 0xFF,
        }
    }

    // Bit length of the payload for `char_cnt` characters, header excluded
    pub fn encoded_len(self, char_cnt: usize) -> usize {
        match self {
            Self::Alphanumeric => (char_cnt / 2) * 11 + (char_cnt & 1) * 6,
            Self::Byte => char_cnt * 8,
        }
    }

    #[inline]
    pub fn encode_chunk(self, chunk: &[char]) -> u16 {
        match self {
            Self::Alphanumeric => {
                debug_assert!(chunk.len() <= 2, "Chunk is too long for alphanumeric: {chunk:?}");
                chunk.iter().fold(0_u16, |n, &ch| n * 45 + alphanumeric_value(ch).unwrap_or(0))
            }
            Self::Byte => {
                debug_assert!(chunk.len() == 1, "Chunk is too long for byte: {chunk:?}");
                chunk[0] as u16
            }
        }
    }
}

#[cfg(test)]
mod mode_tests {
    use test_case::test_case;

    use super::Mode;

    #[test_case('A', true, true)]
    #[test_case('7', true, true)]
    #[test_case(':', true, true)]
    #[test_case('a', false, true)]
    #[test_case('é', false, true)]
    #[test_case('\u{ff}', false, true)]
    #[test_case('\u{100}', false, false)]
    #[test_case('🌎', false, false)]
    fn test_contains(ch: char, alnum: bool, byte: bool) {
        assert_eq!(Mode::Alphanumeric.contains(ch), alnum);
        assert_eq!(Mode::Byte.contains(ch), byte);
    }

    #[test]
    fn test_encode_chunk() {
        assert_eq!(Mode::Alphanumeric.encode_chunk(&['H', 'E']), 779);
        assert_eq!(Mode::Alphanumeric.encode_chunk(&['D']), 13);
        assert_eq!(Mode::Byte.encode_chunk(&['a']), 0x61);
        assert_eq!(Mode::Byte.encode_chunk(&['\u{e9}']), 0xe9);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Mode::Alphanumeric.encoded_len(11), 61);
        assert_eq!(Mode::Alphanumeric.encoded_len(0), 0);
        assert_eq!(Mode::Byte.encoded_len(3), 24);
    }
}
