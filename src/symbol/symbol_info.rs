// Mon Aug 24 2026

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Function,
    Data,
    Export,
    Debug,
    Unknown,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Data => "data",
            SymbolKind::Export => "export",
            SymbolKind::Debug => "debug",
            SymbolKind::Unknown => "unknown",
        }
    }
}

/// A named offset within a module, relative to the module's image base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    pub offset: u64,
    pub kind: SymbolKind,
}

impl SymbolInfo {
    pub fn new<S: Into<String>>(name: S, offset: u64) -> Self {
        Self {
            name: name.into(),
            offset,
            kind: SymbolKind::Unknown,
        }
    }

    pub fn with_kind(mut self, kind: SymbolKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function)
    }
}
