//! Stack-based depth-first algorithms.
//!
//! All walks here use an explicit `Vec` as the LIFO structure. Children are
//! pushed right before left so the left subtree is always explored first,
//! which makes the visit order pre-order.

use std::fmt::Display;

use tracing::instrument;

use crate::node::{Node, Subtree};

/// Walks the tree depth-first and prints each value on its own line as it
/// is visited. Diagnostic twin of [`depth_first_values`].
pub fn print_depth_first<T: Display>(root: &Subtree<T>) {
    let mut stack: Vec<&Node<T>> = Vec::new();
    if let Some(node) = root {
        stack.push(node);
    }

    while let Some(current) = stack.pop() {
        println!("{}", current.value);

        if let Some(right) = &current.right {
            stack.push(right);
        }
        if let Some(left) = &current.left {
            stack.push(left);
        }
    }
}

/// Collects all values in pre-order. An empty tree yields an empty vector.
#[instrument(level = "trace", skip_all)]
pub fn depth_first_values<T: Clone>(root: &Subtree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<T>> = Vec::new();
    if let Some(node) = root {
        stack.push(node);
    }

    while let Some(current) = stack.pop() {
        values.push(current.value.clone());

        if let Some(right) = &current.right {
            stack.push(right);
        }
        if let Some(left) = &current.left {
            stack.push(left);
        }
    }

    values
}

/// Minimum value via a stack-driven depth-first walk. Returns `None` for an
/// empty tree, so an absent candidate never wins a comparison.
#[instrument(level = "trace", skip_all)]
pub fn min_value<T: Copy + Ord>(root: &Subtree<T>) -> Option<T> {
    let mut smallest: Option<T> = None;
    let mut stack: Vec<&Node<T>> = Vec::new();
    if let Some(node) = root {
        stack.push(node);
    }

    while let Some(current) = stack.pop() {
        smallest = Some(match smallest {
            Some(seen) => seen.min(current.value),
            None => current.value,
        });

        if let Some(left) = &current.left {
            stack.push(left);
        }
        if let Some(right) = &current.right {
            stack.push(right);
        }
    }

    smallest
}
