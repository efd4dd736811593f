//! Original implementation: owned-child prefix trie.
//!
//! Each node owns its children in a `char`-keyed map; the trie owns the
//! root. A node reachable via a key sequence exists iff some inserted
//! word has that sequence as a prefix.

use std::collections::HashMap;

use super::PrefixLookup;

/// A single trie node: child map plus word-terminator flag.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_end: bool,
}

impl TrieNode {
    /// Whether an inserted word ends exactly at this node
    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// Child for the given character, if any
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Collect the remainders of all words below this node, sorted
    /// lexicographically. The node's own word (the empty remainder) is
    /// not included.
    pub fn suffixes(&self) -> Vec<String> {
        let mut collected = Vec::new();
        let mut path = String::new();
        self.collect_suffixes(&mut path, &mut collected);
        collected.sort();
        collected
    }

    fn collect_suffixes(&self, path: &mut String, collected: &mut Vec<String>) {
        for (&character, child) in &self.children {
            path.push(character);
            if child.word_end {
                collected.push(path.clone());
            }
            child.collect_suffixes(path, collected);
            path.pop();
        }
    }
}

/// Prefix trie over Unicode scalar values.
///
/// # Example
/// ```
/// use algo_workbench::trie::autocomplete::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("fun");
/// trie.insert("function");
///
/// assert!(trie.find("fun").is_some_and(|n| n.is_word_end()));
/// assert_eq!(trie.suffixes("fun"), Some(vec!["ction".to_string()]));
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, building the character chain as needed.
    /// Inserting the empty word is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for character in word.chars() {
            node = node.children.entry(character).or_default();
        }
        node.word_end = true;
    }

    /// Walk the chain for `prefix` and return the terminal node.
    /// The empty prefix and unknown chains return `None`.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        if prefix.is_empty() {
            return None;
        }

        let mut node = &self.root;
        for character in prefix.chars() {
            node = node.children.get(&character)?;
        }
        Some(node)
    }

    /// Sorted remainders of all words strictly extending `prefix`, or
    /// `None` if no inserted word starts with it.
    pub fn suffixes(&self, prefix: &str) -> Option<Vec<String>> {
        self.find(prefix).map(TrieNode::suffixes)
    }

    /// Whether `word` was inserted exactly
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_word_end)
    }
}

impl PrefixLookup for Trie {
    fn insert(&mut self, word: &str) {
        Trie::insert(self, word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn suffixes(&self, prefix: &str) -> Option<Vec<String>> {
        Trie::suffixes(self, prefix)
    }
}
