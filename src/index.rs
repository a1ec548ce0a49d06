//! Prefix search over string keys.
//!
//! [`PrefixIndex`] is a character trie. A lookup walks down one node per
//! character of the prefix and then collects the subtree below it, so the
//! cost depends on the prefix and the matches, never on the rest of the index.

use std::collections::BTreeMap;

struct Node<V> {
    children: BTreeMap<char, Node<V>>,
    values: Vec<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            values: Vec::new(),
        }
    }
}

/// Multi-valued map from string keys to values, queried by key prefix.
///
/// Keys are stored verbatim; callers normalize them (the query engine
/// lower-cases). Values under one key keep their insertion order. Across
/// keys, results come out in lexicographic key order. Nothing is ever removed.
pub struct PrefixIndex<V> {
    root: Node<V>,
    len: usize,
    key_count: usize,
}

impl<V> Default for PrefixIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixIndex<V> {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
            key_count: 0,
        }
    }

    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.values.is_empty() {
            self.key_count += 1;
        }
        node.values.push(value);
        self.len += 1;
    }

    /// Every value whose key starts with `prefix`. The empty prefix matches all.
    pub fn get_by_prefix(&self, prefix: &str) -> Vec<&V> {
        self.lookup(prefix, || {})
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Walks to the node for `prefix` and collects its subtree, calling
    /// `on_visit` for every trie node touched.
    fn lookup(&self, prefix: &str, mut on_visit: impl FnMut()) -> Vec<&V> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            on_visit();
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        // Pre-order walk, children pushed in reverse so the smallest key pops first.
        let mut values = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            on_visit();
            values.extend(current.values.iter());
            stack.extend(current.children.values().rev());
        }
        values
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for PrefixIndex<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for PrefixIndex<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
