use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Phase {
    Right,
    Left,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Vertical {
    Up,
    Down,
}

/// Zigzag scan over two-column strips, starting at the bottom-right corner. Yields
/// every coordinate except the vertical timing column; callers skip reserved ones.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    c: i16,
    width: i16,
    phase: Phase,
    dir: Vertical,
}

impl EncRegionIter {
    const VERT_TIMING_COL: i16 = 6;

    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, width: w, phase: Phase::Right, dir: Vertical::Up }
    }

    /// Coordinate the next call to `next` will yield.
    pub fn cursor(&self) -> Option<(i16, i16)> {
        (self.c >= 0).then_some((self.r, self.c))
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Right => {
                self.c -= 1;
                self.phase = Phase::Left;
            }
            Phase::Left => {
                let at_edge = match self.dir {
                    Vertical::Up => self.r == 0,
                    Vertical::Down => self.r == self.width - 1,
                };
                if at_edge {
                    self.dir = match self.dir {
                        Vertical::Up => Vertical::Down,
                        Vertical::Down => Vertical::Up,
                    };
                    self.c -= 1;
                } else {
                    self.r += match self.dir {
                        Vertical::Up => -1,
                        Vertical::Down => 1,
                    };
                    self.c += 1;
                }
                self.phase = Phase::Right;
            }
        }
        if self.c == Self::VERT_TIMING_COL {
            self.c -= 1;
        }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        let res = self.cursor()?;
        self.advance();
        Some(res)
    }
}
