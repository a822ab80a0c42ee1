//! Binary tree traversal and aggregation algorithms.
//!
//! The tree element type is [`node::Node`]; an absent subtree is an
//! explicit [`node::Subtree`] `None`, never a sentinel. Algorithms are
//! grouped by mechanism: [`stack`] (depth-first with an explicit stack),
//! [`queue`] (breadth-first), and [`recursive`]. All of them are pure
//! readers over `&Subtree<T>`.
//!
//! ```
//! use treewalk::{fixture, queue, recursive, stack};
//!
//! let labels = fixture::label_tree();
//! assert_eq!(
//!     stack::depth_first_values(&labels),
//!     vec!['A', 'B', 'D', 'E', 'C', 'F'],
//! );
//!
//! let numbers = fixture::numeric_tree();
//! assert_eq!(recursive::sum(&numbers), queue::sum(&numbers));
//! ```

pub mod cli;
pub mod display;
pub mod exitcode;
pub mod fixture;
pub mod node;
pub mod queue;
pub mod recursive;
pub mod stack;
pub mod util;
