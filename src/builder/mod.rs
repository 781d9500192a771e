mod qr;

pub use qr::{Module, QR};

use log::{debug, info};

use crate::common::{
    codec::{detect_mode, encode_data, Mode},
    ec::ecc,
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, MODULE_COUNT, TOTAL_CODEWORDS},
    BitStream,
};

/// Configures and builds a Version 1 QR symbol.
///
/// Defaults to error correction level M with the mask chosen by penalty score.
pub struct QRBuilder<'a> {
    data: &'a str,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, ec_level: ECLevel::M, mask: None }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Forces a mask pattern instead of searching for the best one.
    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        match self.mask {
            Some(m) => format!("{{ Ec level: {}, Mask: {} }}", self.ec_level, *m),
            None => format!("{{ Ec level: {}, Mask: Auto }}", self.ec_level),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        let ecl = self.ec_level;
        let (encoded_data, mode) = encode_data(self.data, ecl)?;

        let ecc = ecc(encoded_data.data(), ecl.ec_codewords());
        debug!("Computed {} error correction codewords", ecc.len());

        let mut payload = BitStream::new(TOTAL_CODEWORDS << 3);
        payload.extend(encoded_data.data());
        payload.extend(&ecc);

        let mut qr = QR::new(ecl);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(payload);
        debug!("Placed codewords in encoding region");

        let mask = match self.mask {
            Some(m) => {
                debug!("Applying mask {}", *m);
                qr.set_mask(m);
                m
            }
            None => apply_best_mask(&mut qr),
        };

        let dark_modules = qr.count_dark_modules();
        info!(
            "QR generated: mode {mode:?}, ec level {ecl}, mask {}, dark modules {dark_modules}/{MODULE_COUNT}",
            *mask
        );

        Ok(qr)
    }

    /// Mode the current data would be encoded in.
    pub fn mode(&self) -> QRResult<Mode> {
        detect_mode(self.data)
    }
}
