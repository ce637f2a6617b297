use std::sync::OnceLock;

// Galois field
//------------------------------------------------------------------------------

/// Log/antilog tables for GF(256) generated by x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
/// with 2 as the generator element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; 255],
    log: [u8; 256],
}

impl GaloisField {
    pub const PRIMITIVE: u16 = 0x11D;

    pub fn new() -> Self {
        let mut exp = [0u8; 255];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= Self::PRIMITIVE;
            }
        }
        Self { exp, log }
    }

    /// Process-wide tables, built on first use.
    pub fn shared() -> &'static Self {
        static GF: OnceLock<GaloisField> = OnceLock::new();
        GF.get_or_init(Self::new)
    }

    /// α^i, reduced modulo 255.
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % 255]
    }

    pub fn log(&self, a: u8) -> u8 {
        debug_assert!(a != 0, "Log of zero is undefined");
        self.log[a as usize]
    }

    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp(self.log(a) as usize + self.log(b) as usize)
    }

    pub const fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod galois_tests {
    use test_case::test_case;

    use super::GaloisField;

    #[test]
    fn test_log_antilog_round_trip() {
        let gf = GaloisField::new();
        for a in 1..=255u8 {
            assert_eq!(gf.exp(gf.log(a) as usize), a);
        }
    }

    #[test]
    fn test_exp_is_a_permutation() {
        let gf = GaloisField::new();
        let mut seen = [false; 256];
        for i in 0..255 {
            let e = gf.exp(i);
            assert_ne!(e, 0);
            assert!(!seen[e as usize], "Repeated element {e} at exponent {i}");
            seen[e as usize] = true;
        }
    }

    #[test]
    fn test_mul_identities() {
        let gf = GaloisField::new();
        for a in 0..=255u8 {
            assert_eq!(gf.mul(a, 0), 0);
            assert_eq!(gf.mul(0, a), 0);
            assert_eq!(gf.mul(a, 1), a);
        }
    }

    #[test_case(2, 3, 6)]
    #[test_case(7, 1, 7)]
    #[test_case(0x03, 0x0E, 18)]
    #[test_case(0x1A, 0x0B, 254)]
    fn test_mul(a: u8, b: u8, exp: u8) {
        assert_eq!(GaloisField::shared().mul(a, b), exp);
    }

    #[test_case(5, 3, 6)]
    #[test_case(0, 4, 4)]
    fn test_add(a: u8, b: u8, exp: u8) {
        assert_eq!(GaloisField::add(a, b), exp);
    }

    #[test]
    fn test_shared_is_built_once() {
        let a = GaloisField::shared();
        let b = GaloisField::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, GaloisField::new());
    }
}
