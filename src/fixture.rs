//! Demonstration trees used by the CLI driver and the test suite.
//!
//! Both trees share the same shape; only the value type differs:
//!
//! ```text
//!       A              1
//!      / \            / \
//!     B   C          2   3
//!    / \   \        / \   \
//!   D   E   F      4   5   6
//! ```

use crate::node::{Node, Subtree};

/// The labelled sample tree (`'A'` at the root).
pub fn label_tree() -> Subtree<char> {
    Node::new(
        'A',
        Node::new('B', Node::leaf('D').boxed(), Node::leaf('E').boxed()).boxed(),
        Node::new('C', None, Node::leaf('F').boxed()).boxed(),
    )
    .boxed()
}

/// The numeric sample tree, same shape as [`label_tree`] with `A..F`
/// mapped to `1..6`.
pub fn numeric_tree() -> Subtree<i64> {
    Node::new(
        1,
        Node::new(2, Node::leaf(4).boxed(), Node::leaf(5).boxed()).boxed(),
        Node::new(3, None, Node::leaf(6).boxed()).boxed(),
    )
    .boxed()
}
