//! Queue-based breadth-first algorithms.
//!
//! All walks here use a `VecDeque` as the FIFO structure: nodes are pushed
//! to the back and popped from the front, the left child always enqueued
//! before the right one, so values come out level by level.

use std::collections::VecDeque;

use num_traits::Zero;
use tracing::instrument;

use crate::node::{Node, Subtree};

/// Collects all values in level order. An empty tree yields an empty vector.
#[instrument(level = "trace", skip_all)]
pub fn breadth_first_values<T: Clone>(root: &Subtree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(current) = queue.pop_front() {
        values.push(current.value.clone());

        if let Some(left) = &current.left {
            queue.push_back(left);
        }
        if let Some(right) = &current.right {
            queue.push_back(right);
        }
    }

    values
}

/// Whether `target` occurs anywhere in the tree. An absent value is simply
/// not found, never an error.
#[instrument(level = "trace", skip_all)]
pub fn includes<T: PartialEq>(root: &Subtree<T>, target: &T) -> bool {
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(current) = queue.pop_front() {
        if current.value == *target {
            return true;
        }

        if let Some(left) = &current.left {
            queue.push_back(left);
        }
        if let Some(right) = &current.right {
            queue.push_back(right);
        }
    }

    false
}

/// Sum of all values, accumulated per dequeued node. An empty tree sums to
/// zero. Agrees with [`crate::recursive::sum`] on every tree.
#[instrument(level = "trace", skip_all)]
pub fn sum<T: Copy + Zero>(root: &Subtree<T>) -> T {
    let mut total = T::zero();
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(current) = queue.pop_front() {
        total = total + current.value;

        if let Some(left) = &current.left {
            queue.push_back(left);
        }
        if let Some(right) = &current.right {
            queue.push_back(right);
        }
    }

    total
}

/// Minimum value via a level-order walk. Returns `None` for an empty tree.
#[instrument(level = "trace", skip_all)]
pub fn min_value<T: Copy + Ord>(root: &Subtree<T>) -> Option<T> {
    let mut smallest: Option<T> = None;
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(current) = queue.pop_front() {
        smallest = Some(match smallest {
            Some(seen) => seen.min(current.value),
            None => current.value,
        });

        if let Some(left) = &current.left {
            queue.push_back(left);
        }
        if let Some(right) = &current.right {
            queue.push_back(right);
        }
    }

    smallest
}
