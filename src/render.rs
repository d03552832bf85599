//! Directory-style rendering of the tree shape, for debugging and tests.
//!
//! ```text
//! . 0
//! |-- "te"
//! |  |-- "am" 1
//! |  `-- "st" 2
//! `-- "water" 3
//! ```

use std::fmt::{self, Write as _};
use std::io;

use crate::node::Node;
use crate::RadixTree;

impl<V: fmt::Debug> RadixTree<V> {
    /// Writes the tree shape to `w`: one line per node, depth-first in
    /// sorted order, with values printed via `Debug`.
    pub fn pretty_print<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")?;
        w.flush()
    }
}

impl<V: fmt::Debug> fmt::Display for RadixTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('.')?;
        if let Some(value) = &self.root.value {
            write!(f, " {value:?}")?;
        }
        f.write_char('\n')?;
        let mut leading = String::new();
        render_children(&self.root, &mut leading, f)
    }
}

fn render_children<V: fmt::Debug>(
    node: &Node<V>,
    leading: &mut String,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let marker = if i < last { '|' } else { '`' };
        write!(f, "{leading}{marker}-- {}", QuotedLabel(&child.label))?;
        if let Some(value) = &child.value {
            write!(f, " {value:?}")?;
        }
        f.write_char('\n')?;

        if !child.children.is_empty() {
            let depth = leading.len();
            leading.push_str(if i < last { "|  " } else { "   " });
            render_children(child, leading, f)?;
            leading.truncate(depth);
        }
    }
    Ok(())
}

/// A label in double quotes, printable ASCII verbatim and everything else
/// escaped.
struct QuotedLabel<'a>(&'a [u8]);

impl fmt::Display for QuotedLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for &b in self.0 {
            if b == b'\'' {
                f.write_char('\'')?;
            } else {
                write!(f, "{}", b.escape_ascii())?;
            }
        }
        f.write_char('"')
    }
}
