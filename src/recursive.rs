//! Recursive depth-first algorithms.
//!
//! These walks consume call stack proportional to tree height. Every
//! function is a pure reader; in particular [`max_path_sum`] never writes
//! back into the tree it measures.

use std::ops::Add;

use num_traits::Zero;
use tracing::instrument;

use crate::node::{Node, Subtree};

/// Collects all values root-first: the current value, then the left
/// subtree's full sequence, then the right subtree's. This is a pre-order
/// walk and matches [`crate::stack::depth_first_values`] exactly.
#[instrument(level = "trace", skip_all)]
pub fn depth_first_values<T: Clone>(root: &Subtree<T>) -> Vec<T> {
    match root {
        None => Vec::new(),
        Some(node) => {
            let mut values = vec![node.value.clone()];
            values.extend(depth_first_values(&node.left));
            values.extend(depth_first_values(&node.right));
            values
        }
    }
}

/// Whether `target` occurs anywhere in the tree. The `||` short-circuits,
/// so the right subtree is never searched once the left one hits.
#[instrument(level = "trace", skip_all)]
pub fn includes<T: PartialEq>(root: &Subtree<T>, target: &T) -> bool {
    match root {
        None => false,
        Some(node) => {
            node.value == *target
                || includes(&node.left, target)
                || includes(&node.right, target)
        }
    }
}

/// Sum of all values: the current value plus both subtree sums, an absent
/// subtree contributing zero.
#[instrument(level = "trace", skip_all)]
pub fn sum<T: Copy + Zero>(root: &Subtree<T>) -> T {
    match root {
        None => T::zero(),
        Some(node) => node.value + sum(&node.left) + sum(&node.right),
    }
}

/// Minimum value: the three-way minimum of the current value and both
/// subtree minima. `None` (empty subtree) never wins a comparison.
#[instrument(level = "trace", skip_all)]
pub fn min_value<T: Copy + Ord>(root: &Subtree<T>) -> Option<T> {
    root.as_ref().map(|node| {
        let mut smallest = node.value;
        if let Some(left) = min_value(&node.left) {
            smallest = smallest.min(left);
        }
        if let Some(right) = min_value(&node.right) {
            smallest = smallest.min(right);
        }
        smallest
    })
}

/// Maximum sum over all root-to-leaf paths. A leaf contributes its own
/// value; an internal node adds its value to the larger of the present
/// subtrees' results, an absent subtree never being chosen over a present
/// one. Returns `None` for an empty tree.
#[instrument(level = "trace", skip_all)]
pub fn max_path_sum<T: Copy + Ord + Add<Output = T>>(root: &Subtree<T>) -> Option<T> {
    root.as_ref().map(|node| {
        match (max_path_sum(&node.left), max_path_sum(&node.right)) {
            (None, None) => node.value,
            (Some(left), None) => node.value + left,
            (None, Some(right)) => node.value + right,
            (Some(left), Some(right)) => node.value + left.max(right),
        }
    })
}

/// Every root-to-leaf path, depth-first left to right. The path values are
/// cloned in root-to-leaf order, so summing one path of the numeric sample
/// tree reproduces exactly one candidate of [`max_path_sum`].
pub fn root_to_leaf_paths<T: Clone>(root: &Subtree<T>) -> Vec<Vec<T>> {
    let mut paths = Vec::new();
    if let Some(node) = root {
        collect_paths(node, &mut Vec::new(), &mut paths);
    }
    paths
}

fn collect_paths<T: Clone>(node: &Node<T>, path: &mut Vec<T>, paths: &mut Vec<Vec<T>>) {
    path.push(node.value.clone());
    if node.is_leaf() {
        paths.push(path.clone());
    } else {
        for child in node.children() {
            collect_paths(child, path, paths);
        }
    }
    path.pop();
}
