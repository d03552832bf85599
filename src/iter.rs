use std::iter::FusedIterator;

use crate::node::Node;

/// Iterator over the entries of a [`RadixTree`](crate::RadixTree) in
/// ascending key order.
///
/// Keys are rebuilt from edge labels, so each item owns its key.
pub struct Iter<'a, V> {
    /// Pending nodes with the key length of their parent.
    stack: Vec<(&'a Node<V>, usize)>,
    key: Vec<u8>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, len: usize) -> Self {
        Self {
            stack: vec![(root, 0)],
            key: Vec::new(),
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // Pre-order over sorted children yields keys in lexicographic order:
        // a key sorts before every key it prefixes.
        while let Some((node, depth)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.extend_from_slice(&node.label);
            let len = self.key.len();
            self.stack
                .extend(node.children.iter().rev().map(|child| (child, len)));

            if let Some(value) = &node.value {
                self.remaining -= 1;
                return Some((self.key.clone(), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
