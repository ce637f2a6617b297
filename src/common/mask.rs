use std::ops::Deref;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::error::{QRError, QRResult};
use super::metadata::Color;
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
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::InvalidMaskingPattern(pattern)),
        }
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Formulas over (row, column)
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_functions(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Mask pattern out of range: {}", self.0),
        }
    }
}

#[cfg(test)]
mod mask_pattern_tests {
    use test_case::test_case;

    use super::MaskPattern;
    use crate::common::error::QRError;

    #[test]
    fn test_new() {
        assert_eq!(*MaskPattern::new(7).unwrap(), 7);
        assert_eq!(MaskPattern::new(8), Err(QRError::InvalidMaskingPattern(8)));
    }

    // Top-left 6x6 corner of each pattern, dark where the formula holds
    #[test_case(0, ["#.#.#.", ".#.#.#", "#.#.#.", ".#.#.#", "#.#.#.", ".#.#.#"])]
    #[test_case(1, ["######", "......", "######", "......", "######", "......"])]
    #[test_case(2, ["#..#..", "#..#..", "#..#..", "#..#..", "#..#..", "#..#.."])]
    #[test_case(3, ["#..#..", "..#..#", ".#..#.", "#..#..", "..#..#", ".#..#."])]
    #[test_case(4, ["###...", "###...", "...###", "...###", "###...", "###..."])]
    #[test_case(5, ["######", "#.....", "#..#..", "#.#.#.", "#..#..", "#....."])]
    #[test_case(6, ["######", "###...", "##.##.", "#.#.#.", "#.##.#", "#...##"])]
    #[test_case(7, ["#.#.#.", "...###", "#...##", ".#.#.#", "###...", ".###.."])]
    fn test_mask_functions(pattern: u8, exp: [&str; 6]) {
        let mask_fn = MaskPattern::new(pattern).unwrap().mask_functions();
        for (r, row) in exp.iter().enumerate() {
            let got = (0..6)
                .map(|c| if mask_fn(r as i16, c) { '#' } else { '.' })
                .collect::<String>();
            assert_eq!(got, *row, "Pattern {pattern} row {r}");
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

/// Tries every pattern on its own copy of `qr`, then commits the lowest scoring one.
/// Ties go to the lower pattern id.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let scores = MaskPattern::ALL
        .par_iter()
        .map(|&m| {
            let mut trial = qr.clone();
            trial.apply_mask(m);
            (m, compute_total_penalty(&trial))
        })
        .collect::<Vec<_>>();

    let mut best = scores[0];
    for &(m, score) in &scores {
        trace!(mask = *m, score, "Mask trial");
        if score < best.1 {
            best = (m, score);
        }
    }
    debug!(mask = *best.0, score = best.1, "Selected mask");

    qr.apply_mask(best.0);
    best.0
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

fn line(qr: &QR, i: i16, is_hor: bool) -> Vec<Color> {
    let w = qr.width() as i16;
    if is_hor {
        (0..w).map(|c| *qr.get(i, c)).collect()
    } else {
        (0..w).map(|r| *qr.get(r, i)).collect()
    }
}

fn run_penalty(len: u32) -> u32 {
    if len >= 5 {
        3 + (len - 5)
    } else {
        0
    }
}

fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        for is_hor in [true, false] {
            let mut last = None;
            let mut len = 0;
            for clr in line(qr, i, is_hor) {
                if last == Some(clr) {
                    len += 1;
                } else {
                    pen += run_penalty(len);
                    last = Some(clr);
                    len = 1;
                }
            }
            pen += run_penalty(len);
        }
    }
    pen
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];

    let mut pen = 0;
    let w = qr.width();
    for i in 0..w as i16 {
        let modules = line(qr, i, is_hor);
        for j in 0..=w - 7 {
            if modules[j..j + 7] != PATTERN {
                continue;
            }
            let light = |k: usize| modules[k] == Color::Light;
            let before = j >= 4 && (j - 4..j).all(light);
            let after = j + 11 <= w && (j + 7..j + 11).all(light);
            if before || after {
                pen += 40;
            }
        }
    }
    pen
}

fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let percent = (dark_cnt * 100 / (w * w)) as i64;
    ((percent - 50).unsigned_abs() / 5 * 10) as u32
}

#[cfg(test)]
mod penalty_tests {
    use super::{
        compute_adjacent_penalty, compute_balance_penalty, compute_block_penalty,
        compute_finder_pattern_penalty, compute_total_penalty,
    };
    use crate::builder::{Module, QR};
    use crate::common::metadata::{Color, ECLevel, Version};

    fn blank() -> QR {
        QR::new(Version::new(1).unwrap(), ECLevel::L)
    }

    fn paint_row(qr: &mut QR, r: i16, row: &str) {
        for (c, ch) in row.chars().enumerate() {
            qr.set(r, c as i16, Module::Data(Color::from(ch == '#')));
        }
    }

    #[test]
    fn test_blank_symbol() {
        let qr = blank();
        // 42 lines with one 21-long run each
        assert_eq!(compute_adjacent_penalty(&qr), 42 * 19);
        assert_eq!(compute_block_penalty(&qr), 20 * 20 * 3);
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 0);
        assert_eq!(compute_balance_penalty(&qr), 100);
        assert_eq!(compute_total_penalty(&qr), 798 + 1200 + 100);
    }

    #[test]
    fn test_adjacent_penalty_counts_run_ending_at_edge() {
        let mut qr = blank();
        for r in 0..21 {
            paint_row(&mut qr, r, &"#.".repeat(11)[..21]);
        }
        // Rows alternate, columns are uniform
        assert_eq!(compute_adjacent_penalty(&qr), 21 * 19);
        // Trailing run of 5 scores 3, columns 17 and 19 lose one light module each
        paint_row(&mut qr, 0, "#.#.#.#.#.#.#.#.#####");
        assert_eq!(compute_adjacent_penalty(&qr), 21 * 19 + 3 - 2);
    }

    #[test]
    fn test_block_penalty_overlapping_windows() {
        let mut qr = blank();
        for r in 0..21 {
            paint_row(&mut qr, r, &"#.".repeat(11)[..21]);
        }
        assert_eq!(compute_block_penalty(&qr), 0);
        paint_row(&mut qr, 0, "###.#.#.#.#.#.#.#.#.#");
        paint_row(&mut qr, 1, "###.#.#.#.#.#.#.#.#.#");
        assert_eq!(compute_block_penalty(&qr), 2 * 3);
    }

    #[test]
    fn test_finder_pattern_penalty() {
        let mut qr = blank();
        paint_row(&mut qr, 10, "....#.###.#..........");
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 40);
        // Light run on both sides still counts once
        paint_row(&mut qr, 10, "....#.###.#....#.###.");
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 40);
        assert_eq!(compute_finder_pattern_penalty(&qr, false), 0);
    }

    #[test]
    fn test_finder_pattern_penalty_needs_in_bounds_light() {
        let mut qr = blank();
        for r in 0..21 {
            paint_row(&mut qr, r, &"#".repeat(21));
        }
        paint_row(&mut qr, 3, "#.###.####.###.####.#");
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 0);
        paint_row(&mut qr, 3, "#.###.#....#.###.#...");
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 80);
    }

    #[test]
    fn test_finder_pattern_penalty_vertical() {
        let mut qr = blank();
        for (r, ch) in "..#.###.#....".chars().enumerate() {
            qr.set(r as i16, 4, Module::Data(Color::from(ch == '#')));
        }
        assert_eq!(compute_finder_pattern_penalty(&qr, false), 40);
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 0);
    }

    #[test]
    fn test_balance_penalty() {
        let mut qr = blank();
        for r in 0..11 {
            paint_row(&mut qr, r, &"#".repeat(21));
        }
        // 231 of 441 dark is 52%
        assert_eq!(compute_balance_penalty(&qr), 0);
        for r in 11..17 {
            paint_row(&mut qr, r, &"#".repeat(21));
        }
        // 357 of 441 dark is 80%
        assert_eq!(compute_balance_penalty(&qr), 60);
    }
}
