//! Competitive programming scaffolding.

pub mod bio;
pub mod num;
pub mod trie;

pub use bio::BufferedIO;
pub use trie::{Key, Trie};
