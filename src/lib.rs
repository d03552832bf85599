//! # radixtree
//!
//! A path-compressed prefix tree (radix tree) mapping arbitrary byte-string
//! keys to values.
//!
//! Chains of single-child nodes are folded into one edge carrying a
//! multi-byte label, so the number of nodes is bounded by the number of
//! distinct branching points rather than by key length. The tree is kept
//! maximally compressed after every mutation.
//!
//! ## Example
//!
//! ```rust
//! use radixtree::RadixTree;
//!
//! let mut tree: RadixTree<u32> = RadixTree::new();
//! tree.insert(b"tea", 1);
//! tree.insert(b"team", 2);
//!
//! assert_eq!(tree.get(b"tea"), Some(&1));
//! assert_eq!(tree.get(b"te"), None);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     ".\n\
//!      `-- \"tea\" 1\n   \
//!         `-- \"m\" 2\n",
//! );
//!
//! assert!(tree.delete_subtree(b"tea"));
//! assert!(tree.is_empty());
//! ```

mod iter;
mod node;
mod render;

use node::{common_prefix_len, Node};
use tracing::trace;

pub use iter::Iter;

/// An ordered map from byte strings to `V`, stored as a radix tree.
///
/// The tree is single-owner: every node is owned by exactly one parent slot,
/// and all operations mutate in place. Callers needing shared access must
/// synchronize externally.
pub struct RadixTree<V> {
    root: Node<V>,
    count: usize,
}

impl<V> RadixTree<V> {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            count: 0,
        }
    }

    /// Number of keys holding a value.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.root = Node::root();
        self.count = 0;
    }

    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let mut node = &self.root;
        let mut rest = key;
        while !rest.is_empty() {
            let i = node.find_child(rest)?;
            node = &node.children[i];
            rest = &rest[node.label.len()..];
        }
        node.value.as_ref()
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let mut node = &mut self.root;
        let mut rest = key;
        while !rest.is_empty() {
            let i = node.find_child(rest)?;
            node = &mut node.children[i];
            rest = &rest[node.label.len()..];
        }
        node.value.as_mut()
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    ///
    /// The empty key lives on the root.
    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        let mut node = &mut self.root;
        let mut rest = key;
        loop {
            if rest.is_empty() {
                let old = node.value.replace(value);
                if old.is_none() {
                    self.count += 1;
                }
                return old;
            }

            let i = node.index_for_prefix(rest);
            let shared = node
                .children
                .get(i)
                .map_or(0, |child| common_prefix_len(&child.label, rest));

            if shared == 0 {
                trace!(index = i, label_len = rest.len(), "inserting leaf");
                node.children.insert(i, Node::leaf(rest, value));
                self.count += 1;
                return None;
            }

            let child = &mut node.children[i];
            if shared < child.label.len() {
                // The key leaves or ends inside this edge: cut it at the divergence point.
                child.split_at(shared);
                if shared == rest.len() {
                    trace!(at = shared, "splitting edge at key end");
                    child.value = Some(value);
                } else {
                    trace!(at = shared, "forking edge");
                    let suffix = &rest[shared..];
                    let pos = child.index_for_prefix(suffix);
                    child.children.insert(pos, Node::leaf(suffix, value));
                }
                self.count += 1;
                return None;
            }

            if shared == rest.len() {
                let old = child.value.replace(value);
                if old.is_none() {
                    self.count += 1;
                }
                return old;
            }

            rest = &rest[shared..];
            node = child;
        }
    }

    /// Removes `key`, returning its value.
    ///
    /// Returns `None` and leaves the tree untouched if `key` holds no value,
    /// including when it only names a value-less branch point.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        if key.is_empty() {
            let old = self.root.value.take();
            if old.is_some() {
                self.count -= 1;
            }
            return old;
        }

        let mut parent = &mut self.root;
        let mut parent_is_root = true;
        let mut rest = key;
        loop {
            let i = parent.find_child(rest)?;
            let label_len = parent.children[i].label.len();
            if label_len == rest.len() {
                let old = Self::remove_child_value(parent, i, parent_is_root)?;
                self.count -= 1;
                return Some(old);
            }
            rest = &rest[label_len..];
            parent = &mut parent.children[i];
            parent_is_root = false;
        }
    }

    /// Removes `key`, reporting whether it held a value.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        self.remove(key).is_some()
    }

    /// Removes the node reached by exactly `prefix` together with every key
    /// beneath it.
    ///
    /// Returns `false` and leaves the tree untouched if no node sits at
    /// `prefix`, including when `prefix` ends in the middle of an edge. The
    /// empty prefix clears the tree and reports whether it held any key.
    pub fn delete_subtree(&mut self, prefix: &[u8]) -> bool {
        if prefix.is_empty() {
            let had_keys = !self.is_empty();
            self.clear();
            return had_keys;
        }

        let mut parent = &mut self.root;
        let mut parent_is_root = true;
        let mut rest = prefix;
        loop {
            let Some(i) = parent.find_child(rest) else {
                return false;
            };
            let label_len = parent.children[i].label.len();
            if label_len == rest.len() {
                let removed = parent.children.remove(i);
                let removed_keys = removed.count_values();
                trace!(index = i, removed_keys, "removing subtree");
                if !parent_is_root {
                    parent.collapse();
                }
                self.count -= removed_keys;
                return true;
            }
            rest = &rest[label_len..];
            parent = &mut parent.children[i];
            parent_is_root = false;
        }
    }

    /// Iterates over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, self.count)
    }

    /// Clears the value of `parent.children[i]` and restores compression
    /// around it.
    fn remove_child_value(parent: &mut Node<V>, i: usize, parent_is_root: bool) -> Option<V> {
        let child = &mut parent.children[i];
        if !child.has_value() {
            return None;
        }
        match child.children.len() {
            0 => {
                trace!(index = i, "unlinking leaf");
                let leaf = parent.children.remove(i);
                if !parent_is_root {
                    parent.collapse();
                }
                leaf.value
            }
            1 => {
                trace!(index = i, "merging node into its only child");
                let old = child.value.take();
                child.absorb_only_child();
                old
            }
            _ => child.value.take(),
        }
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for RadixTree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for RadixTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a RadixTree<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for RadixTree<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for RadixTree<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
