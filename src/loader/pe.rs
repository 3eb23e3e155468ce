// Mon Aug 24 2026

use crate::loader::{LoaderError, RawSymbol};
use crate::symbol::SymbolKind;
use goblin::pe::PE;
use log::debug;

/// Reads the export directory. Forwarded exports carry no address in this
/// image and are skipped, as are ordinal-only entries.
pub fn read_symbols(data: &[u8]) -> Result<Vec<RawSymbol>, LoaderError> {
    let pe = PE::parse(data).map_err(|e| LoaderError::Malformed(format!("PE: {}", e)))?;

    let mut symbols = Vec::new();
    for export in &pe.exports {
        if export.reexport.is_some() {
            continue;
        }

        let name = match export.name {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        symbols.push(RawSymbol {
            name: name.to_string(),
            offset: export.rva as u64,
            kind: SymbolKind::Export,
        });
    }

    debug!("PE: {} named exports", symbols.len());

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_truncated_pe() {
        let data = [b'M', b'Z', 0x90, 0x00];
        assert!(read_symbols(&data).is_err());
    }
}
