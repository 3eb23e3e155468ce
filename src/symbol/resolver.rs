// Mon Aug 24 2026

use crate::config::Config;
use crate::loader::LoadedImage;
use crate::symbol::{ResolverError, SymbolInfo, SymbolKind, SymbolTable};
use log::{debug, warn};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Module cache plus the three queries built on it. Modules are loaded and
/// indexed on first use and kept until unloaded; all queries take `&self`.
pub struct Resolver {
    config: Config,
    modules: RwLock<HashMap<String, Arc<SymbolTable>>>,
}

impl Resolver {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            modules: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Offset of an exactly named symbol within the module.
    pub fn offset_by_name(&self, module: &str, name: &str) -> Result<Option<u64>, ResolverError> {
        Ok(self.table(module)?.offset_of(name))
    }

    /// Name of the symbol sitting exactly at the offset.
    pub fn name_by_offset(&self, module: &str, offset: u64) -> Result<Option<String>, ResolverError> {
        Ok(self.table(module)?.name_at(offset).map(str::to_string))
    }

    /// Closest preceding symbol for the offset, with the byte delta from it.
    pub fn best_by_offset(
        &self,
        module: &str,
        offset: u64,
    ) -> Result<Option<(String, u64)>, ResolverError> {
        Ok(self
            .table(module)?
            .nearest(offset)
            .map(|(name, delta)| (name.to_string(), delta)))
    }

    /// Loads a module (or returns the cached table) without querying it.
    pub fn load(&self, module: &str) -> Result<Arc<SymbolTable>, ResolverError> {
        self.table(module)
    }

    /// Registers a pre-built table under a module name. Useful for images
    /// parsed elsewhere and in tests.
    pub fn insert_module<S: AsRef<str>>(&self, module: S, table: SymbolTable) {
        self.modules
            .write()
            .insert(module_key(module.as_ref()), Arc::new(table));
    }

    pub fn is_loaded(&self, module: &str) -> bool {
        self.modules.read().contains_key(&module_key(module))
    }

    pub fn loaded_modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn symbol_count(&self, module: &str) -> Result<usize, ResolverError> {
        Ok(self.table(module)?.len())
    }

    pub fn unload(&self, module: &str) -> bool {
        self.modules.write().remove(&module_key(module)).is_some()
    }

    pub fn unload_all(&self) {
        self.modules.write().clear();
    }

    fn table(&self, module: &str) -> Result<Arc<SymbolTable>, ResolverError> {
        let key = module_key(module);

        if let Some(table) = self.modules.read().get(&key) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.load_module(module, &key)?);
        self.modules.write().insert(key, Arc::clone(&table));
        Ok(table)
    }

    fn load_module(&self, module: &str, key: &str) -> Result<SymbolTable, ResolverError> {
        let path = self
            .locate(module)
            .ok_or_else(|| ResolverError::ModuleNotFound(module.to_string()))?;

        let image = LoadedImage::open(&path).map_err(|source| ResolverError::Load {
            module: key.to_string(),
            source,
        })?;
        let raw = image.read_symbols().map_err(|source| ResolverError::Load {
            module: key.to_string(),
            source,
        })?;

        let mut table = SymbolTable::new();
        for sym in raw {
            match sym.kind {
                SymbolKind::Export if !self.config.include_exports => continue,
                SymbolKind::Debug if !self.config.include_debug_symbols => continue,
                _ => {}
            }

            if table.len() >= self.config.max_symbols {
                warn!(
                    "symbol limit ({}) reached for \"{}\", rest skipped",
                    self.config.max_symbols, key
                );
                break;
            }

            table.insert(SymbolInfo::new(sym.name, sym.offset).with_kind(sym.kind));
        }

        debug!("{} symbols loaded for \"{}\"", table.len(), key);

        Ok(table)
    }

    fn locate(&self, module: &str) -> Option<PathBuf> {
        let as_path = Path::new(module);

        // explicit paths bypass the search list
        if as_path.components().count() > 1 {
            return as_path.is_file().then(|| as_path.to_path_buf());
        }

        for dir in self.config.lookup_dirs() {
            let candidate = dir.join(module);
            if candidate.is_file() {
                debug!("module \"{}\" found at {}", module, candidate.display());
                return Some(candidate);
            }
        }

        None
    }
}

/// File-name component of a module reference; both separators count, since
/// module names may come from foreign-platform paths.
pub fn module_key(module: &str) -> String {
    module
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(module)
        .to_string()
}

static GLOBAL: Lazy<Resolver> = Lazy::new(Resolver::with_defaults);

/// Process-wide resolver with default configuration.
pub fn global() -> &'static Resolver {
    &GLOBAL
}
