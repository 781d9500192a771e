use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::error::QRError;
use super::tables::{DATA_CODEWORDS, EC_CODEWORDS};

// Symbol geometry
//------------------------------------------------------------------------------

// Only Version 1 is encoded, so the geometry is fixed
pub const WIDTH: usize = 21;

pub const MODULE_COUNT: usize = WIDTH * WIDTH;

pub const TOTAL_CODEWORDS: usize = 26;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    pub fn data_codewords(self) -> usize {
        DATA_CODEWORDS[self as usize]
    }

    pub fn data_bit_capacity(self) -> usize {
        self.data_codewords() << 3
    }

    pub fn ec_codewords(self) -> usize {
        EC_CODEWORDS[self as usize]
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{ECLevel, TOTAL_CODEWORDS};
    use crate::common::error::QRError;

    #[test_case("L", ECLevel::L)]
    #[test_case("m", ECLevel::M)]
    #[test_case(" Q ", ECLevel::Q)]
    #[test_case("h", ECLevel::H)]
    fn test_parse_ec_level(token: &str, exp: ECLevel) {
        assert_eq!(token.parse::<ECLevel>(), Ok(exp));
    }

    #[test_case("")]
    #[test_case("X")]
    #[test_case("LL")]
    fn test_parse_invalid_ec_level(token: &str) {
        assert_eq!(token.parse::<ECLevel>(), Err(QRError::InvalidECLevel(token.to_string())));
    }

    #[test_case(ECLevel::L, 19)]
    #[test_case(ECLevel::M, 16)]
    #[test_case(ECLevel::Q, 13)]
    #[test_case(ECLevel::H, 9)]
    fn test_data_bit_capacity(ecl: ECLevel, bytes: usize) {
        assert_eq!(ecl.data_codewords(), bytes);
        assert_eq!(ecl.data_bit_capacity(), bytes * 8);
    }

    #[test]
    fn test_codewords_fill_symbol() {
        for ecl in ECLevel::ALL {
            assert_eq!(ecl.data_codewords() + ecl.ec_codewords(), TOTAL_CODEWORDS);
        }
    }
}
