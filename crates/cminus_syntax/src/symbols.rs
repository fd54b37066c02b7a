//! Identifier/keyword symbol table.
//!
//! This is not a scoped semantic table: it is the deduplicated list of identifier and keyword
//! lexemes, seeded with the reserved words in sorted order and then extended in order of first
//! appearance.

use std::collections::HashSet;

use cminus_core::lang::keywords;

/// Ordered, duplicate-free list of lexemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding the reserved words, sorted lexicographically.
    pub fn new() -> Self {
        let mut reserved: Vec<&'static str> = keywords::spellings().collect();
        reserved.sort_unstable();

        let mut table = Self {
            entries: Vec::with_capacity(reserved.len()),
            seen: HashSet::with_capacity(reserved.len()),
        };
        for word in reserved {
            table.insert(word);
        }
        table
    }

    /// Append `lexeme` unless it is already present.
    ///
    /// ## Returns
    /// - `true` if the lexeme was new.
    pub fn insert(&mut self, lexeme: &str) -> bool {
        if self.seen.contains(lexeme) {
            return false;
        }
        self.seen.insert(lexeme.to_string());
        self.entries.push(lexeme.to_string());
        true
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.seen.contains(lexeme)
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_sorted_keywords() {
        let table = SymbolTable::new();
        assert_eq!(
            table.entries(),
            ["break", "else", "for", "if", "int", "return", "void"]
        );
    }

    #[test]
    fn test_insert_deduplicates_and_keeps_first_occurrence_order() {
        let mut table = SymbolTable::new();
        assert!(table.insert("main"));
        assert!(table.insert("x"));
        assert!(!table.insert("main"));
        assert!(!table.insert("int"));
        assert_eq!(table.len(), 9);
        assert_eq!(&table.entries()[7..], ["main", "x"]);
    }
}
