use std::collections::HashMap;

use cminus_core::lang::grammar;
use cminus_core::lang::keywords;
use cminus_core::lang::symbols;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_registry_is_sorted_and_complete() {
    let spellings: Vec<&str> = keywords::spellings().collect();
    let mut sorted = spellings.clone();
    sorted.sort_unstable();
    assert_eq!(spellings, sorted, "KEYWORDS must stay in lexicographic order");
    assert_eq!(spellings, ["break", "else", "for", "if", "int", "return", "void"]);
}

#[test]
fn symbols_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, symbols::SymbolId> = HashMap::new();

    for info in symbols::SYMBOLS {
        assert_eq!(
            symbols::from_str(info.canonical),
            Some(info.id),
            "symbol canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(symbols::as_str(info.id), info.canonical, "symbol as_str mismatch for {:?}", info.id);
        assert_eq!(symbols::category(info.id), info.category);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate symbol spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
    assert_eq!(symbols::SYMBOLS.len(), 16);
}

#[test]
fn grammar_labels_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, grammar::NonTerminal> = HashMap::new();

    for &nt in grammar::NONTERMINALS {
        let label = grammar::as_str(nt);
        assert_eq!(grammar::from_str(label), Some(nt), "label not resolvable: {label}");
        assert_ne!(label, "epsilon", "nonterminal label collides with the epsilon leaf");
        if let Some(prev) = seen.insert(label, nt) {
            panic!("duplicate nonterminal label {label:?}: {prev:?} and {nt:?}");
        }
    }
}
