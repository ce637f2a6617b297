mod matrix;
mod qr;
mod render;

pub use matrix::{Module, ModuleMatrix};
pub use qr::QR;

use tracing::{debug, info};

use crate::common::{
    bit_utils::BitStream,
    codec::{encode, encode_with_version},
    ec::{interleave, GaloisField, ReedSolomon},
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Metadata, Version},
};

/// Configures and runs the encoding pipeline. Unset options are chosen automatically:
/// the smallest fitting version, level `M` and the lowest penalty mask.
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::default(), mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.version, Some(self.ec_level), self.mask)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        let ecl = self.ec_level;
        debug!("Generating QR {}", self.metadata());

        debug!(len = self.data.len(), "Encoding data");
        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(self.data, v, ecl)?, v),
            None => encode(self.data, ecl)?,
        };

        debug!("Computing ecc & interleaving");
        let ecc_blocks = Self::compute_ecc(encoded_data.data(), version, ecl);
        let codewords =
            interleave(encoded_data.data(), &ecc_blocks.concat(), &version.block_plan(ecl));
        let mut payload = BitStream::new(version.total_codewords() << 3);
        payload.extend(&codewords);

        debug!("Drawing function patterns");
        let mut qr = QR::new(version, ecl);
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region");
        qr.draw_encoding_region(payload);

        match self.mask {
            Some(m) => {
                debug!(mask = *m, "Applying requested mask");
                qr.apply_mask(m);
            }
            None => {
                debug!("Finding & applying best mask");
                apply_best_mask(&mut qr);
            }
        };

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            metadata = %qr.metadata(),
            data_capacity = version.byte_capacity(ecl),
            ec_capacity = Self::ec_capacity(version, ecl),
            data_size = self.data.len(),
            dark_modules,
            light_modules = total_modules - dark_modules,
            balance = dark_modules * 100 / total_modules,
            "QR generated"
        );

        Ok(qr)
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<Vec<u8>> {
        let plan = version.block_plan(ec_level);
        let rs = ReedSolomon::new(GaloisField::shared());
        let generator = rs.generator_polynomial(plan.ecc_per_block());
        plan.blockify(data).iter().map(|b| rs.ecc(b, &generator)).collect()
    }

    /// Number of codeword errors the symbol can correct. Misdecode protection
    /// codewords of the smallest symbols are not counted.
    pub fn ec_capacity(version: Version, ec_level: ECLevel) -> usize {
        let p = match (*version, ec_level) {
            (1, ECLevel::L) => 3,
            (2, ECLevel::L) | (1, ECLevel::M) => 2,
            (1, _) | (3, ECLevel::L) => 1,
            _ => 0,
        };

        let ec_bytes = version.block_plan(ec_level).ecc_codewords();
        (ec_bytes - p) / 2
    }
}
