use std::ops::Not;

use image::{GrayImage, Luma};

use crate::common::{
    iter::EncRegionIter,
    mask::MaskPattern,
    metadata::{ECLevel, MODULE_COUNT, WIDTH},
    tables::{FORMAT_INFOS_QR, FORMAT_INFO_BIT_LEN},
    BitStream,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Unset,
    Light,
    Dark,
}

impl Module {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light | Self::Unset => light,
        }
    }
}

impl Not for Module {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Unset => Self::Unset,
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Module {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// A Version 1 QR symbol.
///
/// Built in order: function patterns, data, mask with format info. Symbols
/// handed out by [`QRBuilder`](crate::QRBuilder) are finished, so every module
/// is either light or dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: [Module; MODULE_COUNT],
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ecl: ECLevel) -> Self {
        Self { grid: [Module::Unset; MODULE_COUNT], ecl, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| m.is_dark()).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = WIDTH as i16;
        let mut res = String::with_capacity(MODULE_COUNT + WIDTH + 1);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match (Self::is_function(i, j), self.get(i, j)) {
                    (_, Module::Unset) => '.',
                    (true, Module::Dark) => 'f',
                    (true, Module::Light) => 'F',
                    (false, Module::Dark) => 'd',
                    (false, Module::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(r: i16, c: i16) -> usize {
        let w = WIDTH as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[Self::coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        self.grid[Self::coord_to_index(r, c)] = module;
    }

    /// Whether `(r, c)` belongs to a finder, separator, timing pattern, the
    /// dark module or a reserved format information strip. Such modules
    /// never carry data and are never masked.
    pub fn is_function(r: i16, c: i16) -> bool {
        let w = WIDTH as i16;
        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };

        // Finder, separator & format corners
        if (r < 9 && c < 9) || (r < 9 && c > w - 9) || (r > w - 9 && c < 9) {
            return true;
        }
        // Timing patterns
        if r == 6 || c == 6 {
            return true;
        }
        // Dark module and the remaining format strips fall inside the corners
        (r, c) == DARK_MODULE
    }
}

#[cfg(test)]
mod qr_util_tests {
    use test_case::test_case;

    use crate::builder::{Module, QR};
    use crate::common::metadata::{ECLevel, WIDTH};

    #[test]
    fn test_index_wrap() {
        let mut qr = QR::new(ECLevel::L);
        let w = WIDTH as i16;
        qr.set(-1, -1, Module::Dark);
        assert_eq!(qr.get(w - 1, w - 1), Module::Dark);
        qr.set(0, 0, Module::Dark);
        assert_eq!(qr.get(-w, -w), Module::Dark);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = QR::new(ECLevel::L);
        qr.get(WIDTH as i16, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_out_of_bound() {
        let qr = QR::new(ECLevel::L);
        qr.get(0, WIDTH as i16);
    }

    #[test]
    fn test_module_flip() {
        assert_eq!(!Module::Dark, Module::Light);
        assert_eq!(!Module::Light, Module::Dark);
        assert_eq!(!Module::Unset, Module::Unset);
        assert!(!Module::Unset.is_set());
    }

    #[test_case(0, 0, true)]
    #[test_case(8, 8, true)]
    #[test_case(0, 13, true)]
    #[test_case(8, 20, true)]
    #[test_case(13, 8, true)]
    #[test_case(20, 8, true)]
    #[test_case(6, 10, true)]
    #[test_case(15, 6, true)]
    #[test_case(0, 9, false)]
    #[test_case(9, 0, false)]
    #[test_case(9, 9, false)]
    #[test_case(12, 8, false)]
    #[test_case(8, 12, false)]
    #[test_case(13, 9, false)]
    #[test_case(20, 20, false)]
    fn test_is_function(r: i16, c: i16, exp: bool) {
        assert_eq!(QR::is_function(r, c), exp);
    }

    #[test]
    fn test_data_module_count() {
        let w = WIDTH as i16;
        let data_modules =
            (0..w).flat_map(|r| (0..w).map(move |c| (r, c))).filter(|&(r, c)| !QR::is_function(r, c));
        assert_eq!(data_modules.count(), 26 * 8);
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 finder centered at (r, c) along with its separator
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Light,
                        (3 | -3, _) | (_, 3 | -3) => Module::Dark,
                        (2 | -2, _) | (_, 2 | -2) => Module::Light,
                        _ => Module::Dark,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new(ECLevel::L);
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Timing pattern & dark module
//------------------------------------------------------------------------------

// Fixed at (4 * version + 9, 8)
const DARK_MODULE: (i16, i16) = (13, 8);

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = WIDTH as i16;
        self.draw_line(6, 8, 6, w - 9);
        self.draw_line(8, 6, w - 9, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::from(j & 1 == 0));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::from(i & 1 == 0));
            }
        }
    }

    fn draw_dark_module(&mut self) {
        let (r, c) = DARK_MODULE;
        self.set(r, c, Module::Dark);
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_timing_pattern() {
        let mut qr = QR::new(ECLevel::L);
        qr.draw_timing_pattern();
        qr.draw_dark_module();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........fFfFf........\n\
             .....................\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ........f............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_dark_module();
    }
}


// Format info
//------------------------------------------------------------------------------

// Indexed from the most significant bit of the format string
static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

// ISO/IEC 18004 order: bottom-left upward from row 20, then top-right from column 13
static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

impl QR {
    pub(crate) fn draw_format_info(&mut self, mask: MaskPattern) {
        let format_info = FORMAT_INFOS_QR[self.ecl as usize][*mask as usize];
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_SIDE);
    }

    fn draw_number(&mut self, number: u16, bit_len: usize, coords: &[(i16, i16)]) {
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            self.set(r, c, Module::from(number & mask != 0));
            mask >>= 1;
        }
    }
}

#[cfg(test)]
mod format_info_tests {
    use crate::builder::QR;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_format_info_l0() {
        // L, mask 0: 111011111000100
        let mut qr = QR::new(ECLevel::L);
        qr.draw_format_info(MaskPattern::new(0).unwrap());
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........F............\n\
             ........F............\n\
             ........f............\n\
             ........F............\n\
             ........F............\n\
             ........F............\n\
             .....................\n\
             ........f............\n\
             fffFff.ff....ffFFFfFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........f............\n\
             ........f............\n\
             ........f............\n\
             ........F............\n\
             ........f............\n\
             ........f............\n\
             ........f............\n"
        );
    }

    #[test]
    fn test_format_info_copies_agree() {
        let mut qr = QR::new(ECLevel::H);
        qr.draw_format_info(MaskPattern::new(5).unwrap());
        let main = super::FORMAT_INFO_COORDS_QR_MAIN.iter().map(|&(r, c)| qr.get(r, c));
        let side = super::FORMAT_INFO_COORDS_QR_SIDE.iter().map(|&(r, c)| qr.get(r, c));
        assert!(main.eq(side));
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places `payload` along the zig-zag path. Modules left over once the
    /// payload runs out are set light.
    pub(crate) fn draw_encoding_region(&mut self, mut payload: BitStream) {
        for (r, c) in EncRegionIter::new() {
            if Self::is_function(r, c) || self.get(r, c).is_set() {
                continue;
            }
            let bit = payload.next().unwrap_or(false);
            self.set(r, c, Module::from(bit));
        }

        debug_assert!(payload.next().is_none(), "Payload exceeds the encoding region");
    }

    /// Flips every data module selected by `pattern`. Applying the same
    /// pattern twice restores the symbol.
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        let mask_fn = pattern.mask_function();
        let w = WIDTH as i16;
        for r in 0..w {
            for c in 0..w {
                if !Self::is_function(r, c) && mask_fn(r, c) {
                    self.set(r, c, !self.get(r, c));
                }
            }
        }
    }

    /// Masks the data and writes the format info for `pattern`.
    pub(crate) fn set_mask(&mut self, pattern: MaskPattern) {
        self.apply_mask(pattern);
        self.draw_format_info(pattern);
        self.mask = Some(pattern);
    }
}


// Render
//------------------------------------------------------------------------------

const QUIET_ZONE: usize = 4;

impl QR {
    /// Renders the symbol as a grayscale image with a 4 module quiet zone.
    pub fn render(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = WIDTH as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for i in 0..qr_sz {
            for j in 0..qr_sz {
                let r = (i / module_sz) as i16;
                let c = (j / module_sz) as i16;
                let pixel = self.get(r, c).select(Luma([255]), Luma([0]));
                canvas.put_pixel(j + qz_sz, i + qz_sz, pixel);
            }
        }

        canvas
    }

    /// Renders the symbol with block characters for a dark background
    /// terminal: light modules are drawn, dark modules are blank.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = WIDTH * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz * 2 + 1));
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push_str("██");
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push_str(self.get(r, c).select("██", "  "));
            }
            canvas.push('\n');
        }

        canvas
    }
}
