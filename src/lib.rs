//! # qrsmith
//!
//! A byte-mode QR Code encoder with Reed-Solomon error correction. Produces standard
//! QR symbols (versions 1 to 40, levels L, M, Q and H) that any ISO 18004 reader can
//! decode.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrsmith::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Smallest fitting version, level M and the lowest penalty mask
//! let qr = QRBuilder::new(b"Hello, World!").build()?;
//!
//! let svg = qr.to_svg(4);
//! assert!(svg.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrsmith::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"Hello, World!")
//!     .version(Version::new(2)?)      // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::Q)           // if not provided, defaults to ECLevel::M
//!     .mask(MaskPattern::new(3)?)     // if not provided, finds best mask by penalty score
//!     .build()?;
//!
//! assert_eq!(qr.width(), 25);
//! let img = qr.to_image(4);
//! assert_eq!(img.width(), (25 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, ModuleMatrix, QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Metadata, Version};
