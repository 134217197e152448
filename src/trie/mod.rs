//! A prefix tree keyed by byte sequences.
//!
//! Text keys are treated as their UTF-8 bytes, so [`Trie::get`] and
//! [`Trie::bget`] walk the same nodes.

mod iter;
mod keys;
mod node;
#[cfg(test)]
mod proptests;

use node::Node;

/// Anything that can be walked through a [`Trie`] one byte at a time.
pub trait Key {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_;
}

/// Maps byte-sequence keys to values of type `V`.
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<V> {
    root: Node<V>,
    len: usize,
}
