// Mon Aug 24 2026

pub mod error;
pub mod resolver;
pub mod symbol_info;
pub mod table;

pub use error::ResolverError;
pub use resolver::{global, module_key, Resolver};
pub use symbol_info::{SymbolInfo, SymbolKind};
pub use table::SymbolTable;

/// Offset of a named symbol, through the process-wide resolver.
pub fn addr_by_name(module: &str, name: &str) -> Result<Option<u64>, ResolverError> {
    global().offset_by_name(module, name)
}

/// Symbol name at an exact offset, through the process-wide resolver.
pub fn name_by_addr(module: &str, offset: u64) -> Result<Option<String>, ResolverError> {
    global().name_by_offset(module, offset)
}

/// Nearest preceding symbol and delta, through the process-wide resolver.
pub fn best_by_addr(module: &str, offset: u64) -> Result<Option<(String, u64)>, ResolverError> {
    global().best_by_offset(module, offset)
}
