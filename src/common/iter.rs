use super::metadata::WIDTH;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

const VERT_TIMING_COL: i16 = 6;

/// Walks the symbol in the data placement order: two-column strips from the
/// bottom-right corner, alternating upward and downward, right column before
/// left column, skipping the vertical timing column. Function modules are
/// yielded too; the caller decides which coordinates take data.
pub struct EncRegionIter {
    r: i16,
    // Right column of the current strip
    c: i16,
    upward: bool,
    right: bool,
}

impl EncRegionIter {
    pub const fn new() -> Self {
        let w = WIDTH as i16;
        Self { r: w - 1, c: w - 1, upward: true, right: true }
    }
}

impl Default for EncRegionIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 1 {
            return None;
        }

        let res = if self.right { (self.r, self.c) } else { (self.r, self.c - 1) };

        if self.right {
            self.right = false;
            return Some(res);
        }

        self.right = true;
        let next_r = if self.upward { self.r - 1 } else { self.r + 1 };
        if (0..WIDTH as i16).contains(&next_r) {
            self.r = next_r;
        } else {
            self.upward = !self.upward;
            self.c -= 2;
            if self.c == VERT_TIMING_COL {
                self.c -= 1;
            }
        }
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use std::collections::HashSet;

    use super::EncRegionIter;
    use crate::common::metadata::WIDTH;

    #[test]
    fn test_enc_region_iter_start() {
        let coords = EncRegionIter::new().take(6).collect::<Vec<_>>();
        assert_eq!(coords, [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_enc_region_iter_turns() {
        let coords = EncRegionIter::new().skip(40).take(4).collect::<Vec<_>>();
        assert_eq!(coords, [(0, 20), (0, 19), (0, 18), (0, 17)]);
    }

    #[test]
    fn test_enc_region_iter_skips_timing_column() {
        let coords = EncRegionIter::new().collect::<Vec<_>>();
        assert_eq!(coords.len(), WIDTH * (WIDTH - 1));
        assert!(coords.iter().all(|&(_, c)| c != 6));
        let unique = coords.iter().copied().collect::<HashSet<_>>();
        assert_eq!(unique.len(), coords.len());
        assert_eq!(coords.last(), Some(&(20, 0)));
    }

    #[test]
    fn test_enc_region_iter_crosses_timing_column() {
        let coords = EncRegionIter::new().collect::<Vec<_>>();
        let pos = coords.iter().position(|&c| c == (0, 7)).unwrap();
        assert_eq!(coords[pos + 1], (0, 5));
        assert_eq!(coords[pos + 2], (0, 4));
        assert_eq!(coords[pos + 3], (1, 5));
    }
}
