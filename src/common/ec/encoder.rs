use super::galois::GaloisField;

// Reed-Solomon encoder
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ReedSolomon<'a> {
    gf: &'a GaloisField,
}

impl<'a> ReedSolomon<'a> {
    pub fn new(gf: &'a GaloisField) -> Self {
        Self { gf }
    }

    /// Coefficients of (x - α^0)(x - α^1)..(x - α^(degree-1)), highest degree first,
    /// without the leading 1.
    pub fn generator_polynomial(&self, degree: usize) -> Vec<u8> {
        let mut poly = vec![0u8; degree + 1];
        poly[degree] = 1;
        for i in 0..degree {
            let root = self.gf.exp(i);
            for j in 0..degree {
                poly[j] = GaloisField::add(poly[j + 1], self.gf.mul(poly[j], root));
            }
            poly[degree] = self.gf.mul(poly[degree], root);
        }
        debug_assert_eq!(poly[0], 1, "Generator polynomial must be monic");
        poly.split_off(1)
    }

    // Remainder of data(x)·x^n divided by the generator, computed with a shift
    // register of n = generator.len() cells
    pub fn ecc(&self, data: &[u8], generator: &[u8]) -> Vec<u8> {
        let n = generator.len();
        let mut reg = vec![0u8; n];
        if n == 0 {
            return reg;
        }
        for &b in data {
            let feedback = GaloisField::add(b, reg[0]);
            for j in 0..n - 1 {
                reg[j] = GaloisField::add(reg[j + 1], self.gf.mul(feedback, generator[j]));
            }
            reg[n - 1] = self.gf.mul(feedback, generator[n - 1]);
        }
        reg
    }
}

#[cfg(test)]
mod rs_tests {
    use super::ReedSolomon;
    use crate::common::ec::GaloisField;

    fn antilogs(gf: &GaloisField, exponents: &[usize]) -> Vec<u8> {
        exponents.iter().map(|&e| gf.exp(e)).collect()
    }

    #[test]
    fn test_generator_polynomial_5() {
        let gf = GaloisField::shared();
        let rs = ReedSolomon::new(gf);
        assert_eq!(rs.generator_polynomial(5), antilogs(gf, &[113, 164, 166, 119, 10]));
    }

    #[test]
    fn test_generator_polynomial_16() {
        let gf = GaloisField::shared();
        let rs = ReedSolomon::new(gf);
        let exp = antilogs(gf, &[120, 104, 107, 109, 102, 161, 76, 3, 91, 191, 147, 169, 182, 194, 225, 120]);
        assert_eq!(rs.generator_polynomial(16), exp);
    }

    #[test]
    fn test_generator_polynomial_1() {
        let rs = ReedSolomon::new(GaloisField::shared());
        assert_eq!(rs.generator_polynomial(1), vec![1]);
    }

    #[test]
    fn test_ecc_known_vector() {
        let rs = ReedSolomon::new(GaloisField::shared());
        let gen = rs.generator_polynomial(10);
        let ecc = rs.ecc(&[40, 88, 12, 6, 46, 77, 36], &gen);
        assert_eq!(ecc, vec![214, 246, 18, 193, 38, 69, 160, 197, 199, 15]);
    }

    #[test]
    fn test_ecc_1() {
        let rs = ReedSolomon::new(GaloisField::shared());
        let gen = rs.generator_polynomial(10);
        let res = rs.ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", &gen);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_ecc_2() {
        let rs = ReedSolomon::new(GaloisField::shared());
        let gen = rs.generator_polynomial(13);
        let res = rs.ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", &gen);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_ecc_3() {
        let rs = ReedSolomon::new(GaloisField::shared());
        let gen = rs.generator_polynomial(18);
        let res = rs.ecc(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", &gen);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_ecc_of_zero_block_is_zero() {
        let rs = ReedSolomon::new(GaloisField::shared());
        let gen = rs.generator_polynomial(22);
        assert_eq!(rs.ecc(&[0; 38], &gen), vec![0; 22]);
    }

    #[test]
    fn test_codeword_is_divisible_by_generator() {
        // data || ecc is a multiple of g(x), so every root α^i evaluates to zero
        let gf = GaloisField::shared();
        let rs = ReedSolomon::new(gf);
        let gen = rs.generator_polynomial(10);
        let data = b"Hello, world!";
        let mut cw = data.to_vec();
        cw.extend(rs.ecc(data, &gen));
        for i in 0..10 {
            let x = gf.exp(i);
            let eval = cw.iter().fold(0u8, |acc, &c| GaloisField::add(gf.mul(acc, x), c));
            assert_eq!(eval, 0, "Root α^{i}");
        }
    }
}
