use std::ops::Deref;

use log::trace;

use super::error::{QRError, QRResult};
use super::metadata::{MODULE_COUNT, WIDTH};
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern(0),
        MaskPattern(1),
        MaskPattern(2),
        MaskPattern(3),
        MaskPattern(4),
        MaskPattern(5),
        MaskPattern(6),
        MaskPattern(7),
    ];

    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern < 8 {
            Ok(Self(pattern))
        } else {
            Err(QRError::InvalidMaskingPattern(pattern))
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;
    fn try_from(pattern: u8) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) % 2 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r % 2 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r / 2) + (c / 3)) % 2 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        (r * c) % 2 + (r * c) % 3 == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        ((r * c) % 2 + (r * c) % 3) % 2 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        ((r + c) % 2 + (r * c) % 3) % 2 == 0
    }
}

static MASK_FUNCTIONS: [fn(i16, i16) -> bool; 8] = [
    mask_functions::checkerboard,
    mask_functions::horizontal_lines,
    mask_functions::vertical_lines,
    mask_functions::diagonal_lines,
    mask_functions::large_checkerboard,
    mask_functions::fields,
    mask_functions::diamonds,
    mask_functions::meadow,
];

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        MASK_FUNCTIONS[self.0 as usize]
    }
}

// Mask selection
//------------------------------------------------------------------------------

/// Scores `qr` as if it carried `mask`. Works on a private copy: a mask
/// already on the copy is removed first, then `mask` and its format info are
/// applied. The input symbol is left untouched.
pub fn evaluate_mask(qr: &QR, mask: MaskPattern) -> (QR, u32) {
    let mut candidate = qr.clone();
    if let Some(prev) = candidate.mask() {
        candidate.apply_mask(prev);
    }
    candidate.set_mask(mask);
    let pen = compute_total_penalty(&candidate);
    (candidate, pen)
}

/// Tries all 8 masks and keeps the one with the lowest penalty. Ties go to
/// the lowest mask id.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    #[cfg(feature = "parallel")]
    let best = par_search(qr);
    #[cfg(not(feature = "parallel"))]
    let best = search(qr);

    match best {
        Some((_, mask, candidate)) => {
            *qr = candidate;
            mask
        }
        None => unreachable!("Mask patterns are never empty"),
    }
}

type Trial = (u32, MaskPattern, QR);

fn trial(qr: &QR, mask: MaskPattern) -> Trial {
    let (candidate, pen) = evaluate_mask(qr, mask);
    trace!("Mask {}: penalty {pen}", *mask);
    (pen, mask, candidate)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn search(qr: &QR) -> Option<Trial> {
    best_of(MaskPattern::ALL.into_iter().map(|mask| trial(qr, mask)))
}

// Each trial scores its own copy, so the minimum matches `search`
#[cfg(feature = "parallel")]
fn par_search(qr: &QR) -> Option<Trial> {
    use rayon::prelude::*;

    MaskPattern::ALL
        .par_iter()
        .map(|&mask| trial(qr, mask))
        .min_by_key(|(pen, mask, _)| (*pen, *mask))
}

// Lowest penalty wins, equal penalties go to the lower mask id
fn best_of<T>(
    trials: impl IntoIterator<Item = (u32, MaskPattern, T)>,
) -> Option<(u32, MaskPattern, T)> {
    let mut best: Option<(u32, MaskPattern, T)> = None;
    for t in trials {
        if best.as_ref().map_or(true, |(pen, mask, _)| (t.0, t.1) < (*pen, *mask)) {
            best = Some(t);
        }
    }
    best
}


// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    trace!(
        "Penalty breakdown: adjacent {adj_pen}, block {blk_pen}, finder {}, balance {bal_pen}",
        fp_pen_h + fp_pen_v
    );
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

fn line(qr: &QR, i: i16, is_hor: bool) -> [bool; WIDTH] {
    let mut res = [false; WIDTH];
    for (j, m) in res.iter_mut().enumerate() {
        let j = j as i16;
        *m = if is_hor { qr.get(i, j).is_dark() } else { qr.get(j, i).is_dark() };
    }
    res
}

// N1: every run of 5 or more same colored modules costs 3 + (run - 5)
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    for i in 0..WIDTH as i16 {
        pen += compute_run_penalty(&line(qr, i, true));
        pen += compute_run_penalty(&line(qr, i, false));
    }
    pen
}

fn compute_run_penalty(line: &[bool]) -> u32 {
    let mut pen = 0;
    let mut run = 0;
    let mut last = None;
    for &clr in line {
        if last == Some(clr) {
            run += 1;
            continue;
        }
        if run >= 5 {
            pen += run - 2;
        }
        last = Some(clr);
        run = 1;
    }
    if run >= 5 {
        pen += run - 2;
    }
    pen
}

// N2: every 2x2 block of one color costs 3
fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = WIDTH as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = qr.get(r, c).is_dark();
            if clr == qr.get(r + 1, c).is_dark()
                && clr == qr.get(r, c + 1).is_dark()
                && clr == qr.get(r + 1, c + 1).is_dark()
            {
                pen += 3;
            }
        }
    }
    pen
}

// N3: a 1:1:3:1:1 finder-like run with 4 light modules on either side costs 40
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [bool; 11] =
        [true, false, true, true, true, false, true, false, false, false, false];

    let mut pen = 0;
    for i in 0..WIDTH as i16 {
        let line = line(qr, i, is_hor);
        for win in line.windows(PATTERN.len()) {
            if win.iter().eq(PATTERN.iter()) || win.iter().eq(PATTERN.iter().rev()) {
                pen += 40;
            }
        }
    }
    pen
}

// N4: 10 points for every full 5% the dark ratio deviates from 50%.
// |dark / total - 1/2| / 5% == |2 * dark - total| * 10 / total, kept exact
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let bands = (2 * dark_cnt).abs_diff(MODULE_COUNT) * 10 / MODULE_COUNT;
    (bands * 10) as u32
}
