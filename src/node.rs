//! Tree nodes and the byte-string primitives every operation navigates with.

use std::mem;

use smallvec::SmallVec;

/// Edge label storage. Most edges are a handful of bytes, so they stay inline.
pub(crate) type Label = SmallVec<[u8; 16]>;

/// A node of the radix tree.
///
/// Every node except the root satisfies:
/// - `label` is non-empty;
/// - if `value` is `None`, there are at least two children.
///
/// `children` is sorted ascending by `label` (unsigned byte order), and no two
/// siblings share a first byte.
#[derive(Clone)]
pub(crate) struct Node<V> {
    /// Edge from the parent to this node. Empty for the root.
    pub(crate) label: Label,
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<Node<V>>,
}

impl<V> Node<V> {
    pub(crate) fn root() -> Self {
        Self {
            label: Label::new(),
            value: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn leaf(label: &[u8], value: V) -> Self {
        debug_assert!(!label.is_empty());
        Self {
            label: Label::from_slice(label),
            value: Some(value),
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Index into `children` where `prefix` matches or would be inserted.
    ///
    /// This is the smallest `i` such that `children[i]` shares a non-empty
    /// common prefix with `prefix`, or `children[i].label >= prefix`. Since
    /// siblings never share a first byte, at most one child can match.
    pub(crate) fn index_for_prefix(&self, prefix: &[u8]) -> usize {
        let i = self
            .children
            .partition_point(|child| child.label.as_slice() < prefix);
        // A child that is a strict prefix of `prefix` sorts before it.
        if i > 0 && common_prefix_len(&self.children[i - 1].label, prefix) > 0 {
            i - 1
        } else {
            i
        }
    }

    /// Index of the child whose whole label is a prefix of `rest`.
    #[inline]
    pub(crate) fn find_child(&self, rest: &[u8]) -> Option<usize> {
        let i = self.index_for_prefix(rest);
        let child = self.children.get(i)?;
        rest.starts_with(&child.label).then_some(i)
    }

    /// Splits this node's edge after `at` bytes.
    ///
    /// The node keeps the leading `at` bytes with no value, and gains a single
    /// child that carries the remaining bytes along with the old value and
    /// children.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(0 < at && at < self.label.len());
        let lower = Node {
            label: Label::from_slice(&self.label[at..]),
            value: self.value.take(),
            children: mem::take(&mut self.children),
        };
        self.label.truncate(at);
        self.children.push(lower);
    }

    /// Folds the only child into this node: the labels concatenate, and the
    /// child's value and children replace this node's.
    pub(crate) fn absorb_only_child(&mut self) {
        debug_assert_eq!(self.children.len(), 1);
        if let Some(child) = self.children.pop() {
            self.label.extend_from_slice(&child.label);
            self.value = child.value;
            self.children = child.children;
        }
    }

    /// Merges away a value-less node left with a single child after one of
    /// its children was unlinked. Must not be called on the root.
    pub(crate) fn collapse(&mut self) {
        if !self.has_value() && self.children.len() == 1 {
            tracing::trace!(
                label_len = self.label.len(),
                "collapsing value-less parent into its remaining child"
            );
            self.absorb_only_child();
        }
    }

    /// Number of values stored in this node and all its descendants.
    pub(crate) fn count_values(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.has_value());
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Length of the longest shared leading byte run of `a` and `b`.
#[inline]
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
