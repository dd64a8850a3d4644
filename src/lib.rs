//! A red-black tree maintaining an ordered set of keys.
//!
//! [`RbTree`] keeps its height within `2 * log2(n + 1)` for `n` keys by
//! recoloring and rotating nodes after each insert, so lookups and inserts
//! are `O(log n)`.
//!
//! ```
//! use redblack::{Color, Order, RbTree};
//!
//! let mut t = RbTree::new();
//!
//! t.insert(10).unwrap();
//! t.insert(5).unwrap();
//! t.insert(1).unwrap();
//!
//! // Inserting 1 below 5 below 10 rotates 5 up to the root.
//! let got = t.traverse(Order::PreOrder).collect::<Vec<_>>();
//! assert_eq!(
//!     got,
//!     [(&5, Color::Black), (&1, Color::Red), (&10, Color::Red)]
//! );
//!
//! // Keys are unique by default.
//! assert!(t.insert(5).is_err());
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 5, 10]);
//! ```
//!
//! Consumers that render the tree shape can use [`RbTree::walk()`], which
//! yields the depth and parent side of each node alongside its key and color.

mod arena;
mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::DuplicateKeyError;
pub use iter::{Order, Traverse, Visit, Walk};
pub use node::{Color, Side};
pub use tree::{DuplicateKeys, RbTree};
