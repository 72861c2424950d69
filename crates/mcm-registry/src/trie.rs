//! Prefix trie over arbitrary symbol types.
//!
//! Each node maps one symbol to a child, carries an end-of-key marker, and
//! holds the set of values stored under the key that ends there.  Values
//! live in a `BTreeSet`, so inserting the same value twice under one key is
//! a no-op and subtree collection comes out sorted.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// One node of a [`PrefixTrie`].
#[derive(Debug, Clone)]
pub struct TrieNode<K, V> {
    children: HashMap<K, TrieNode<K, V>>,
    is_end:   bool,
    values:   BTreeSet<V>,
}

impl<K, V> TrieNode<K, V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_end:   false,
            values:   BTreeSet::new(),
        }
    }

    /// `true` if some inserted key ends at this node.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Values stored under the key ending at this node.
    pub fn values(&self) -> &BTreeSet<V> {
        &self.values
    }

    #[cfg(test)]
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Trie keyed by sequences of `K`, storing sets of `V` at key ends.
#[derive(Debug, Clone)]
pub struct PrefixTrie<K, V> {
    root: TrieNode<K, V>,
    len:  usize,
}

impl<K: Eq + Hash, V: Ord> PrefixTrie<K, V> {
    pub fn new() -> Self {
        Self { root: TrieNode::new(), len: 0 }
    }

    /// Number of (key, value) pairs stored, counting each distinct value
    /// under a key once.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `value` under `key`, creating nodes as needed.
    ///
    /// Returns `false` if that exact value was already stored under `key`.
    pub fn insert<I>(&mut self, key: I, value: V) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        let mut node = &mut self.root;
        for symbol in key {
            node = node.children.entry(symbol).or_insert_with(TrieNode::new);
        }
        node.is_end = true;
        let added = node.values.insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// The node reached by following `prefix` from the root, if any.
    pub fn node<I>(&self, prefix: I) -> Option<&TrieNode<K, V>>
    where
        I: IntoIterator<Item = K>,
    {
        let mut node = &self.root;
        for symbol in prefix {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    /// Values stored under exactly `key`.
    pub fn get<I>(&self, key: I) -> Option<&BTreeSet<V>>
    where
        I: IntoIterator<Item = K>,
    {
        self.node(key).filter(|n| n.is_end).map(|n| &n.values)
    }

    /// Every value stored under a key that starts with `prefix`, deduplicated
    /// and sorted ascending.
    pub fn collect_prefix<I>(&self, prefix: I) -> Vec<&V>
    where
        I: IntoIterator<Item = K>,
    {
        let Some(start) = self.node(prefix) else {
            return Vec::new();
        };

        // Explicit stack: key length is caller-controlled.
        let mut found: BTreeSet<&V> = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if node.is_end {
                found.extend(node.values.iter());
            }
            stack.extend(node.children.values());
        }
        found.into_iter().collect()
    }
}

impl<K: Eq + Hash, V: Ord> Default for PrefixTrie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
