//! Tests for the autocomplete trie.

#[cfg(test)]
mod tests {
    use crate::trie::autocomplete::code::*;

    const WORDS: &[&str] = &[
        "ant",
        "anthology",
        "antagonist",
        "antonym",
        "fun",
        "function",
        "factory",
        "trie",
        "trigger",
        "trigonometry",
        "tripod",
    ];

    fn build<T: PrefixLookup>() -> T {
        let mut trie = T::default();
        for word in WORDS {
            trie.insert(word);
        }
        trie
    }

    fn sorted_strings(values: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    fn check_suffix_collection<T: PrefixLookup>() {
        let trie: T = build();

        assert_eq!(
            trie.suffixes("f"),
            Some(sorted_strings(&["un", "unction", "actory"]))
        );
        assert_eq!(
            trie.suffixes("ant"),
            Some(sorted_strings(&["hology", "agonist", "onym"]))
        );
        assert_eq!(
            trie.suffixes("trig"),
            Some(sorted_strings(&["ger", "onometry"]))
        );
        // A full word with no extensions has no suffixes
        assert_eq!(trie.suffixes("tripod"), Some(vec![]));
        // Unknown and empty prefixes have no match at all
        assert_eq!(trie.suffixes("xyz"), None);
        assert_eq!(trie.suffixes(""), None);
    }

    #[test]
    fn test_suffix_collection_original() {
        check_suffix_collection::<Trie>();
    }

    #[test]
    fn test_suffix_collection_arena() {
        check_suffix_collection::<ArenaTrie>();
    }

    #[test]
    fn test_find_terminal_state() {
        let trie: Trie = build();

        // "ant" was inserted; "an" only exists as a chain
        assert!(trie.find("ant").is_some_and(|n| n.is_word_end()));
        assert!(trie.find("an").is_some_and(|n| !n.is_word_end()));
        assert!(trie.find("anthologies").is_none());
        assert!(trie.find("").is_none());

        assert!(trie.contains("fun"));
        assert!(!trie.contains("fu"));
        assert!(!trie.contains("funk"));
    }

    #[test]
    fn test_node_navigation() {
        let trie: Trie = build();
        let node = trie.find("fu").unwrap();
        assert!(node.child('n').is_some_and(|n| n.is_word_end()));
        assert!(node.child('z').is_none());
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(!trie.contains(""));
        assert!(trie.find("").is_none());

        let mut arena = ArenaTrie::new();
        arena.insert("");
        assert!(!arena.contains(""));
    }

    #[test]
    fn test_repeated_suffix_calls_are_stable() {
        let trie: Trie = build();
        let first = trie.suffixes("f");
        let second = trie.suffixes("f");
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("echo");
        trie.insert("echo");
        assert!(trie.contains("echo"));
        assert_eq!(trie.suffixes("ec"), Some(vec!["ho".to_string()]));
    }

    #[test]
    fn test_unicode_words() {
        let mut trie = Trie::new();
        trie.insert("héllo");
        trie.insert("hé");

        assert!(trie.contains("hé"));
        assert!(trie.contains("héllo"));
        assert_eq!(trie.suffixes("hé"), Some(vec!["llo".to_string()]));
    }

    #[test]
    fn test_variants_agree() {
        let words: Vec<String> = WORDS.iter().map(|s| s.to_string()).collect();
        let prefixes: Vec<String> = ["a", "an", "t", "tri", "f", "zz"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            autocomplete_original(&words, &prefixes),
            autocomplete_arena(&words, &prefixes)
        );
    }
}
