// GF(256) arithmetic over the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

pub const PRIMITIVE_POLY: u16 = 0x11D;

pub struct GaloisField {
    // exp[i] = 2^i
    exp: [u8; 256],
    // log[2^i] = i, log[0] is undefined and left at 0
    log: [u8; 256],
}

impl GaloisField {
    pub const fn new() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;
        while i < 256 {
            exp[i] = x as u8;
            if i < 255 {
                log[x as usize] = i as u8;
            }
            x <<= 1;
            if x > 0xFF {
                x ^= PRIMITIVE_POLY;
            }
            i += 1;
        }

        Self { exp, log }
    }

    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % 255]
    }

    #[inline]
    pub fn log(&self, x: u8) -> usize {
        debug_assert!(x != 0, "Log of zero is undefined");
        self.log[x as usize] as usize
    }

    #[inline]
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        if x == 0 || y == 0 {
            return 0;
        }
        self.exp[(self.log(x) + self.log(y)) % 255]
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

// Built at compile time, shared read-only by every encode
pub static GF: GaloisField = GaloisField::new();

#[cfg(test)]
mod galois_tests {
    use proptest::prelude::*;

    use super::GF;

    #[test]
    fn test_exp_table() {
        assert_eq!(GF.exp(0), 1);
        assert_eq!(GF.exp(1), 2);
        assert_eq!(GF.exp(7), 128);
        assert_eq!(GF.exp(8), 29);
        assert_eq!(GF.exp(25), 3);
        assert_eq!(GF.exp(255), 1);
        assert_eq!(GF.exp[255], 1);
    }

    #[test]
    fn test_log_inverts_exp() {
        for x in 1..=255u8 {
            assert_eq!(GF.exp(GF.log(x)), x);
        }
    }

    #[test]
    fn test_exp_is_permutation() {
        let mut seen = [false; 256];
        for i in 0..255 {
            let x = GF.exp(i) as usize;
            assert!(!seen[x], "Duplicate power {x} at {i}");
            seen[x] = true;
        }
        assert!(!seen[0]);
    }

    #[test]
    fn test_mul_known_products() {
        assert_eq!(GF.mul(2, 128), 29);
        assert_eq!(GF.mul(3, 7), 9);
        assert_eq!(GF.mul(0x53, 0xCA), 0x8F);
    }

    proptest! {
        #[test]
        fn proptest_mul_commutative(x in any::<u8>(), y in any::<u8>()) {
            prop_assert_eq!(GF.mul(x, y), GF.mul(y, x));
        }

        #[test]
        fn proptest_mul_identity_and_zero(x in any::<u8>()) {
            prop_assert_eq!(GF.mul(x, 1), x);
            prop_assert_eq!(GF.mul(x, 0), 0);
            prop_assert_eq!(GF.mul(0, x), 0);
        }

        #[test]
        fn proptest_mul_distributes_over_xor(x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
            prop_assert_eq!(GF.mul(x, y ^ z), GF.mul(x, y) ^ GF.mul(x, z));
        }
    }
}
