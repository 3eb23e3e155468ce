// Mon Aug 24 2026

//! Symbol resolution for PE, ELF and Mach-O binaries.
//!
//! A module is loaded by name, its symbol/export tables are parsed into an
//! offset-indexed table, and three queries are exposed on top of it:
//! offset by name, name by offset, and nearest preceding symbol for an
//! arbitrary offset.

pub mod config;
pub mod loader;
pub mod symbol;

pub use config::Config;
pub use loader::{ImageFormat, LoadedImage, LoaderError, RawSymbol};
pub use symbol::{Resolver, ResolverError, SymbolInfo, SymbolKind, SymbolTable};
pub use symbol::{addr_by_name, best_by_addr, name_by_addr};
