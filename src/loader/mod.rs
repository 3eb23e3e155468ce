// Mon Aug 24 2026

pub mod elf;
pub mod error;
pub mod image;
pub mod macho;
pub mod pe;

pub use error::LoaderError;
pub use image::{ImageFormat, LoadedImage};

use crate::symbol::SymbolKind;

/// A symbol as read out of an image. The offset is relative to the image
/// base, so it stays meaningful wherever the module ends up mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSymbol {
    pub name: String,
    pub offset: u64,
    pub kind: SymbolKind,
}
