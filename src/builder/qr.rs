use std::iter;

use super::matrix::{Module, ModuleMatrix};
use crate::common::bit_utils::BitStream;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{Color, ECLevel, Metadata, Version};
use crate::common::version_db::{FORMAT_INFO, FORMAT_INFO_BIT_LEN, VERSION_INFO_BIT_LEN};

/// A finished symbol. Only [`QRBuilder::build`](crate::QRBuilder::build) produces one,
/// and it is read-only afterwards.
///
/// ```compile_fail
/// use qrsmith::{ECLevel, Version, QR};
///
/// let qr = QR::new(Version::new(1).unwrap(), ECLevel::M);
/// ```
///
/// ```compile_fail
/// use qrsmith::{MaskPattern, QRBuilder};
///
/// let mut qr = QRBuilder::new(b"HELLO").build().unwrap();
/// qr.apply_mask(MaskPattern::new(5).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: ModuleMatrix,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: ModuleMatrix::new(w), w, ver, ecl, mask: None }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(Some(self.ver), Some(self.ecl), self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.count_dark_modules()
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid.get(r, c)
    }

    pub fn is_dark(&self, r: i16, c: i16) -> bool {
        *self.get(r, c) == Color::Dark
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        self.grid.set(r, c, module);
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
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

    // Draws the 7x7 finder centred on (r, c) along with its light separator
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
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

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        self.draw_line(6, 8, 6, w - 9);
        self.draw_line(8, 6, w - 9, 6);
    }

    // Alternates dark and light, dark on even indices
    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        if Self::overlaps_finder(r, c, self.w as i16) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }

    fn overlaps_finder(r: i16, c: i16, w: i16) -> bool {
        (r == 6 && (c == 6 || c == w - 7)) || (r == w - 7 && c == 6)
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
    }

    /// True for every module owned by a function pattern, a separator, the format
    /// strips, the dark module or (from version 7) the version blocks.
    pub fn is_reserved(&self, r: i16, c: i16) -> bool {
        let w = self.w as i16;
        debug_assert!((0..w).contains(&r) && (0..w).contains(&c), "Out of bounds: {r} {c}");

        // Finders with separators and format strips
        if (r < 9 && (c < 9 || c >= w - 8)) || (r >= w - 8 && c < 9) {
            return true;
        }
        if r == 6 || c == 6 {
            return true;
        }
        if self.ver.has_version_info() {
            let block = w - 11..w - 8;
            if (r < 6 && block.contains(&c)) || (c < 6 && block.contains(&r)) {
                return true;
            }
        }

        let poses = self.ver.alignment_pattern();
        poses.iter().filter(|&&ar| (r - ar).abs() <= 2).any(|&ar| {
            poses.iter().any(|&ac| (c - ac).abs() <= 2 && !Self::overlaps_finder(ar, ac, w))
        })
    }
}

#[cfg(test)]
mod all_function_patterns_test {
    use crate::builder::{Module, QR};
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_all_function_patterns() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f.............fffff....\n\
             FFFFFFFF............fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }

    #[test]
    fn test_reserved_matches_drawn_layout() {
        for v in 1..=40 {
            let mut qr = QR::new(Version::new(v).unwrap(), ECLevel::L);
            qr.draw_all_function_patterns();
            qr.reserve_format_area();
            qr.draw_version_info();
            let w = qr.width() as i16;
            for r in 0..w {
                for c in 0..w {
                    let drawn = qr.get(r, c) != Module::Empty;
                    assert_eq!(qr.is_reserved(r, c), drawn, "Version {v} at ({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_free_modules_hold_all_codewords() {
        for v in 1..=40 {
            let ver = Version::new(v).unwrap();
            let qr = QR::new(ver, ECLevel::L);
            let w = qr.width() as i16;
            let free = (0..w)
                .flat_map(|r| (0..w).map(move |c| (r, c)))
                .filter(|&(r, c)| !qr.is_reserved(r, c))
                .count();
            assert_eq!(free, ver.total_codewords() * 8 + ver.remainder_bits(), "Version {v}");
        }
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    fn draw_format_info(&mut self, format_info: u32) {
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_MAIN,
        );
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_SIDE,
        );
        self.set(-8, 8, Module::Format(Color::Dark));
    }

    fn draw_version_info(&mut self) {
        if !self.ver.has_version_info() {
            return;
        }
        let ver_info = self.ver.info();
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_TR,
        );
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_BL,
        );
    }

    // Most significant bit goes to the first coordinate
    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for (r, c) in coords {
            if number & mask == 0 {
                self.set(*r, *c, off_clr);
            } else {
                self.set(*r, *c, on_clr);
            }
            mask >>= 1;
        }
    }

    /// Decodes the primary format strip back into its level and mask. `None` when the
    /// strip holds no valid word.
    pub fn read_format_info(&self) -> Option<(ECLevel, MaskPattern)> {
        let word = FORMAT_INFO_COORDS_MAIN
            .iter()
            .fold(0u32, |acc, &(r, c)| (acc << 1) | self.is_dark(r, c) as u32);
        ECLevel::ALL.into_iter().find_map(|ecl| {
            MaskPattern::ALL
                .into_iter()
                .find(|m| FORMAT_INFO[ecl as usize][**m as usize] == word)
                .map(|m| (ecl, m))
        })
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_encoding_region(&mut self, payload: BitStream) {
        self.reserve_format_area();
        self.draw_version_info();
        self.draw_payload(payload);

        debug_assert!(
            !self.grid.modules().contains(&Module::Empty),
            "Empty module left after drawing encoding region"
        );
    }

    // Places codeword bits then the zero remainder bits along the zigzag scan
    fn draw_payload(&mut self, payload: BitStream) {
        let remainder = self.ver.remainder_bits();
        let bits = payload.chain(iter::repeat(false).take(remainder));
        let mut coords = EncRegionIter::new(self.ver);
        let mut placed = 0;
        for bit in bits {
            let Some((r, c)) = coords.find(|&(r, c)| !self.is_reserved(r, c)) else {
                panic!("Encoding region exhausted after {placed} bits");
            };
            self.set(r, c, Module::Data(Color::from(bit)));
            placed += 1;
        }

        assert_eq!(
            placed,
            self.ver.total_codewords() * 8 + remainder,
            "Placed bit count doesn't match version capacity"
        );
        let w = self.w as i16;
        let end = if self.ver.has_version_info() { (w - 11, 1) } else { (w - 8, 1) };
        assert_eq!(coords.cursor(), Some(end), "Placement ended at an unexpected module");
    }

    /// Toggles every unreserved data module selected by `pattern`. Applying the same
    /// pattern twice restores the matrix.
    pub(crate) fn toggle_mask(&mut self, pattern: MaskPattern) {
        let mask_fn = pattern.mask_functions();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if !mask_fn(r, c) || self.is_reserved(r, c) {
                    continue;
                }
                if let Module::Data(clr) = self.get(r, c) {
                    self.set(r, c, Module::Data(!clr))
                }
            }
        }
    }

    /// Masks the data modules with `pattern` and writes the matching format info.
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        self.toggle_mask(pattern);
        self.mask = Some(pattern);
        let format_info = FORMAT_INFO[self.ecl as usize][*pattern as usize];
        self.draw_format_info(format_info);
    }
}


// Global constants
//------------------------------------------------------------------------------

static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
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

static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
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

static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];
