//! # qrv1
//!
//! A Rust library for encoding text into Version 1 (21x21) QR Code symbols.
//!
//! ## Features
//!
//! - **Mode Selection**: Alphanumeric mode when every character allows it, byte mode otherwise
//! - **Reed-Solomon Error Correction**: GF(256) codewords for levels L, M, Q and H
//! - **Mask Selection**: All 8 masks are scored with the four penalty rules and the lowest wins
//! - **Rendering**: Grayscale images or block character strings, with a 4 module quiet zone
//!
//! ## Quick Start
//!
//! ```rust
//! use qrv1::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Defaults to error correction level M and the best mask
//! let qr = QRBuilder::new("HELLO WORLD").build()?;
//!
//! let img = qr.render(4); // 4 pixels per module
//! assert_eq!(img.width(), (21 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrv1::{ECLevel, MaskPattern, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!")
//!     .ec_level(ECLevel::Q)          // Error correction level - defaults to ECLevel::M
//!     .mask(MaskPattern::new(3)?)    // Mask pattern - if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! println!("{}", qr.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Capacity
//!
//! | Level | Data codewords | Alphanumeric chars | Byte chars |
//! |-------|----------------|--------------------|------------|
//! | L     | 19             | 25                 | 17         |
//! | M     | 16             | 20                 | 14         |
//! | Q     | 13             | 16                 | 11         |
//! | H     | 9              | 10                 | 7          |
//!
//! Byte mode only carries characters whose code point fits in one byte.
//! Anything longer or wider fails with [`QRError`].

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, QRBuilder, QR};
pub use common::codec::{encode_data, Mode};
pub use common::ec::{ecc, generator_polynomial};
pub use common::error::{QRError, QRResult};
pub use common::mask::{compute_total_penalty, evaluate_mask, MaskPattern};
pub use common::metadata::ECLevel;
pub use common::BitStream;
