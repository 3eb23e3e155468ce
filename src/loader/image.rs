// Mon Aug 24 2026

use crate::loader::{elf, macho, pe, LoaderError, RawSymbol};
use goblin::Object;
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Pe,
    Elf,
    MachO,
}

impl ImageFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Pe => "PE",
            ImageFormat::Elf => "ELF",
            ImageFormat::MachO => "Mach-O",
        }
    }
}

/// A memory-mapped binary with a detected object format.
pub struct LoadedImage {
    data: Mmap,
    path: PathBuf,
    format: ImageFormat,
}

impl LoadedImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)?;
        let data = unsafe { Mmap::map(&file)? };
        let format = detect_format(&data)?;

        debug!(
            "mapped {} ({} bytes, {})",
            path_buf.display(),
            data.len(),
            format.name()
        );

        Ok(Self {
            data,
            path: path_buf,
            format,
        })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, used as the module cache key.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extracts every named symbol from the image's own tables.
    pub fn read_symbols(&self) -> Result<Vec<RawSymbol>, LoaderError> {
        let symbols = match self.format {
            ImageFormat::Pe => pe::read_symbols(&self.data)?,
            ImageFormat::Elf => elf::read_symbols(&self.data)?,
            ImageFormat::MachO => macho::read_symbols(&self.data)?,
        };

        if symbols.is_empty() {
            return Err(LoaderError::NoSymbols);
        }

        Ok(symbols)
    }
}

fn detect_format(data: &[u8]) -> Result<ImageFormat, LoaderError> {
    match Object::parse(data) {
        Ok(Object::PE(_)) => Ok(ImageFormat::Pe),
        Ok(Object::Elf(_)) => Ok(ImageFormat::Elf),
        Ok(Object::Mach(_)) => Ok(ImageFormat::MachO),
        Ok(_) => Err(LoaderError::Unsupported(
            "not a PE, ELF or Mach-O image".to_string(),
        )),
        Err(e) => Err(LoaderError::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_missing_file() {
        let result = LoadedImage::open("no_such_image_zzz.bin");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_open_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is not an object file at all, not even close")
            .unwrap();

        assert!(LoadedImage::open(&path).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_open_own_binary() {
        let image = LoadedImage::open("/proc/self/exe").unwrap();
        assert_eq!(image.format(), ImageFormat::Elf);
        assert!(!image.is_empty());

        let symbols = image.read_symbols().unwrap();
        assert!(!symbols.is_empty());
        assert!(symbols.iter().all(|s| !s.name.is_empty()));
    }
}
