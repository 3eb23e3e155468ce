// Mon Aug 24 2026

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where module files are looked up and how much of them is indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub search_paths: Vec<PathBuf>,
    pub symbols_dir: PathBuf,
    pub include_exports: bool,
    pub include_debug_symbols: bool,
    pub max_symbols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from(".")],
            symbols_dir: PathBuf::from("Symbols"),
            include_exports: true,
            include_debug_symbols: true,
            max_symbols: 1_000_000,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.search_paths.push(path.into());
        self
    }

    pub fn with_symbols_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.symbols_dir = dir.into();
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }

    /// Directories tried when a module is given by bare name, in order.
    pub fn lookup_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.search_paths.clone();
        dirs.push(self.symbols_dir.clone());
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup_dirs() {
        let config = Config::default();
        let dirs = config.lookup_dirs();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0], PathBuf::from("."));
        assert_eq!(dirs[1], PathBuf::from("Symbols"));
    }

    #[test]
    fn test_builder_order() {
        let config = Config::new()
            .with_search_path("/usr/lib")
            .with_symbols_dir("/tmp/syms");
        let dirs = config.lookup_dirs();
        assert_eq!(dirs[1], PathBuf::from("/usr/lib"));
        assert_eq!(dirs.last().unwrap(), &PathBuf::from("/tmp/syms"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symlib.json");

        let config = Config::new().with_search_path("/opt/modules");
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.search_paths, config.search_paths);
        assert_eq!(loaded.symbols_dir, config.symbols_dir);
    }
}
