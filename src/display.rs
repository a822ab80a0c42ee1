//! Terminal rendering of binary trees via `termtree`.

use std::fmt::Display;

use termtree::Tree;

use crate::node::{Node, Subtree};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeDisplay for Node<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let mut tree = Tree::new(self.value.to_string());
        if let Some(left) = &self.left {
            tree.push(left.to_tree_string());
        }
        if let Some(right) = &self.right {
            tree.push(right.to_tree_string());
        }
        tree
    }
}

impl<T: Display> TreeDisplay for Subtree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Some(node) => node.to_tree_string(),
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}
