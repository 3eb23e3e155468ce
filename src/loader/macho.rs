// Mon Aug 24 2026

use crate::loader::{LoaderError, RawSymbol};
use crate::symbol::SymbolKind;
use goblin::mach::symbols::{N_EXT, N_STAB};
use goblin::mach::{Mach, MachO};
use log::debug;

/// Reads the symtab of a thin Mach-O. Offsets are rebased on the `__TEXT`
/// segment vmaddr. Fat binaries are rejected.
pub fn read_symbols(data: &[u8]) -> Result<Vec<RawSymbol>, LoaderError> {
    let mach = Mach::parse(data).map_err(|e| LoaderError::Malformed(format!("Mach-O: {}", e)))?;

    let macho = match mach {
        Mach::Binary(m) => m,
        Mach::Fat(_) => {
            return Err(LoaderError::Unsupported(
                "fat binaries are not supported".to_string(),
            ))
        }
    };

    let base = text_base(&macho);

    let mut symbols = Vec::new();
    for sym in macho.symbols() {
        let (name, nlist) = match sym {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if name.is_empty() || nlist.is_undefined() || nlist.n_type & N_STAB != 0 {
            continue;
        }

        let kind = if nlist.n_type & N_EXT != 0 {
            SymbolKind::Export
        } else {
            SymbolKind::Debug
        };

        symbols.push(RawSymbol {
            name: name.to_string(),
            offset: nlist.n_value.saturating_sub(base),
            kind,
        });
    }

    debug!("Mach-O: {} symtab entries (base 0x{:x})", symbols.len(), base);

    Ok(symbols)
}

fn text_base(macho: &MachO) -> u64 {
    for segment in &macho.segments {
        if let Ok(name) = segment.name() {
            if name == "__TEXT" {
                return segment.vmaddr;
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_truncated_macho() {
        let data = [0xcf, 0xfa, 0xed, 0xfe, 0x0c, 0x00, 0x00, 0x01];
        assert!(read_symbols(&data).is_err());
    }
}
