// Mon Aug 24 2026

use crate::symbol::SymbolInfo;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Symbols of one module, indexed both ways: exact name lookup through a
/// hash map, offset queries through an ordered map so the nearest preceding
/// symbol is a single `range` call away.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    by_name: HashMap<String, SymbolInfo>,
    by_offset: BTreeMap<u64, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a symbol. Re-inserting a name replaces it and forgets its
    /// previous offset; when several names share an offset the
    /// lexicographically smallest one answers offset queries.
    pub fn insert(&mut self, symbol: SymbolInfo) {
        let previous = self.by_name.insert(symbol.name.clone(), symbol.clone());
        if let Some(previous) = previous {
            if previous.offset != symbol.offset {
                self.evict_offset_entry(&symbol.name, previous.offset);
            }
        }

        match self.by_offset.entry(symbol.offset) {
            Entry::Occupied(mut entry) => {
                if symbol.name.as_str() < entry.get().as_str() {
                    entry.insert(symbol.name);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(symbol.name);
            }
        }
    }

    /// Drops `name` from the offset index entry at `offset`. Other symbols
    /// may still live there; the smallest remaining name takes over.
    fn evict_offset_entry(&mut self, name: &str, offset: u64) {
        if self.by_offset.get(&offset).map(String::as_str) != Some(name) {
            return;
        }

        let replacement = self
            .by_name
            .values()
            .filter(|s| s.offset == offset && s.name != name)
            .map(|s| s.name.as_str())
            .min();

        match replacement {
            Some(next) => {
                self.by_offset.insert(offset, next.to_string());
            }
            None => {
                self.by_offset.remove(&offset);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.by_name.get(name)
    }

    /// Exact name match.
    pub fn offset_of(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).map(|s| s.offset)
    }

    /// Exact offset match.
    pub fn name_at(&self, offset: u64) -> Option<&str> {
        self.by_offset.get(&offset).map(String::as_str)
    }

    /// Closest symbol at or below the offset, with the positive byte delta
    /// from it.
    pub fn nearest(&self, offset: u64) -> Option<(&str, u64)> {
        self.by_offset
            .range(..=offset)
            .next_back()
            .map(|(base, name)| (name.as_str(), offset - base))
    }

    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&SymbolInfo> {
        self.by_name
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, sym)| sym)
            .collect()
    }

    pub fn find_containing(&self, needle: &str) -> Vec<&SymbolInfo> {
        self.by_name
            .iter()
            .filter(|(name, _)| name.contains(needle))
            .map(|(_, sym)| sym)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
