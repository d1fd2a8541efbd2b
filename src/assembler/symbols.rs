//! The symbol table maps symbolic names to numeric addresses.
//!
//! It starts out holding the machine-reserved symbols, gains label
//! entries during the first pass, and variable entries during the
//! variable scan. Once a name is bound its address never changes.
use std::collections::HashMap;
use super::error::{AsmError, AsmResult};

/// First data address available to user variables; everything below it
/// is the register-mapped scratch region R0-R15.
pub const VARIABLE_BASE: u16 = 16;

#[derive(Debug)]
pub struct SymbolTable {
    entries: HashMap<String, u16>,
}

impl SymbolTable {
    /// Creates a table pre-loaded with the machine-reserved symbols.
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        for r in 0u16..16 {
            entries.insert(format!("R{}", r), r);
        }
        entries.insert("SP".to_owned(), 0);
        entries.insert("LCL".to_owned(), 1);
        entries.insert("ARG".to_owned(), 2);
        entries.insert("THIS".to_owned(), 3);
        entries.insert("THAT".to_owned(), 4);
        entries.insert("SCREEN".to_owned(), 16384);
        entries.insert("KBD".to_owned(), 24576);

        SymbolTable { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Binds `name` to `address`. Rebinding is never allowed, whether
    /// the existing entry is predefined, a label, or a variable.
    pub fn add_entry(&mut self, name: &str, address: u16) -> AsmResult<()> {
        if self.entries.contains_key(name) {
            return Err(AsmError::DuplicateSymbol { symbol: name.to_owned() });
        }
        self.entries.insert(name.to_owned(), address);
        Ok(())
    }

    pub fn get_address(&self, name: &str) -> AsmResult<u16> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| AsmError::UnknownSymbol { symbol: name.to_owned() })
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_symbols() {
        let table = SymbolTable::new();
        for r in 0u16..16 {
            assert_eq!(table.get_address(&format!("R{}", r)).unwrap(), r);
        }
        assert_eq!(table.get_address("SP").unwrap(), 0);
        assert_eq!(table.get_address("LCL").unwrap(), 1);
        assert_eq!(table.get_address("ARG").unwrap(), 2);
        assert_eq!(table.get_address("THIS").unwrap(), 3);
        assert_eq!(table.get_address("THAT").unwrap(), 4);
        assert_eq!(table.get_address("SCREEN").unwrap(), 16384);
        assert_eq!(table.get_address("KBD").unwrap(), 24576);
    }

    #[test]
    fn test_add_and_resolve() {
        let mut table = SymbolTable::new();
        assert!(!table.contains("LOOP"));

        table.add_entry("LOOP", 4).unwrap();
        assert!(table.contains("LOOP"));
        assert_eq!(table.get_address("LOOP").unwrap(), 4);
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let mut table = SymbolTable::new();
        table.add_entry("LOOP", 4).unwrap();

        match table.add_entry("LOOP", 9) {
            Err(AsmError::DuplicateSymbol { symbol }) => assert_eq!(symbol, "LOOP"),
            other => panic!("expected DuplicateSymbol, got {:?}", other),
        }
        // The original binding survives the rejected insert.
        assert_eq!(table.get_address("LOOP").unwrap(), 4);

        // Predefined names cannot be shadowed either.
        assert!(table.add_entry("R0", 100).is_err());
        assert!(table.add_entry("SCREEN", 100).is_err());
    }

    #[test]
    fn test_unknown_symbol() {
        let table = SymbolTable::new();
        match table.get_address("nowhere") {
            Err(AsmError::UnknownSymbol { symbol }) => assert_eq!(symbol, "nowhere"),
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
    }
}
