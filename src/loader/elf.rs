// Mon Aug 24 2026

use crate::loader::{LoaderError, RawSymbol};
use crate::symbol::SymbolKind;
use goblin::elf::program_header::PT_LOAD;
use goblin::elf::section_header::SHN_UNDEF;
use goblin::elf::sym::{Symtab, STT_FUNC, STT_OBJECT};
use goblin::elf::Elf;
use goblin::strtab::Strtab;
use log::debug;

/// Reads `.dynsym` then `.symtab`, so full symtab entries win over their
/// dynamic duplicates downstream. Offsets are rebased on the lowest
/// `PT_LOAD` vaddr.
pub fn read_symbols(data: &[u8]) -> Result<Vec<RawSymbol>, LoaderError> {
    let elf = Elf::parse(data).map_err(|e| LoaderError::Malformed(format!("ELF: {}", e)))?;

    let base = elf
        .program_headers
        .iter()
        .filter(|ph| ph.p_type == PT_LOAD)
        .map(|ph| ph.p_vaddr)
        .min()
        .unwrap_or(0);

    let mut symbols = Vec::new();
    collect(&elf.dynsyms, &elf.dynstrtab, base, SymbolKind::Export, &mut symbols);
    collect(&elf.syms, &elf.strtab, base, SymbolKind::Debug, &mut symbols);

    debug!(
        "ELF: {} dynsym + symtab entries (base 0x{:x})",
        symbols.len(),
        base
    );

    Ok(symbols)
}

fn collect(
    syms: &Symtab,
    strtab: &Strtab,
    base: u64,
    fallback: SymbolKind,
    out: &mut Vec<RawSymbol>,
) {
    for sym in syms.iter() {
        if sym.st_shndx == SHN_UNDEF as usize {
            continue;
        }

        let name = match strtab.get_at(sym.st_name) {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        out.push(RawSymbol {
            name: name.to_string(),
            offset: sym.st_value.saturating_sub(base),
            kind: kind_of(sym.st_type(), fallback),
        });
    }
}

fn kind_of(st_type: u8, fallback: SymbolKind) -> SymbolKind {
    match st_type {
        STT_FUNC => SymbolKind::Function,
        STT_OBJECT => SymbolKind::Data,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(kind_of(STT_FUNC, SymbolKind::Debug), SymbolKind::Function);
        assert_eq!(kind_of(STT_OBJECT, SymbolKind::Debug), SymbolKind::Data);
        assert_eq!(kind_of(0, SymbolKind::Export), SymbolKind::Export);
    }

    #[test]
    fn test_reject_truncated_elf() {
        let data = [0x7f, b'E', b'L', b'F', 2, 1, 1, 0];
        assert!(read_symbols(&data).is_err());
    }
}
