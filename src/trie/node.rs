use super::{Key, Trie};
use smallvec::SmallVec;
use std::any::type_name;

/// Edges stored inline before a node's table spills to the heap.
const INLINE_EDGES: usize = 2;

/// One position in the key space.
///
/// Keys may be arbitrarily long, so nothing that walks the whole subtree
/// (drop, clone, equality, counting) may recurse per level.
pub(super) struct Node<V> {
    pub(super) value: Option<V>,
    /// Strictly increasing by byte.
    children: SmallVec<[(u8, Box<Node<V>>); INLINE_EDGES]>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            value: None,
            children: SmallVec::new(),
        }
    }
}

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<V>>> =
            self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        struct Frame<'a, V> {
            edge: u8,
            source: &'a Node<V>,
            next: usize,
            copy: Node<V>,
        }

        impl<'a, V: Clone> Frame<'a, V> {
            fn new(edge: u8, source: &'a Node<V>) -> Self {
                Frame {
                    edge,
                    source,
                    next: 0,
                    copy: Node {
                        value: source.value.clone(),
                        children: SmallVec::with_capacity(source.children.len()),
                    },
                }
            }
        }

        let mut root = None;
        let mut stack = vec![Frame::new(0, self)];
        while let Some(mut frame) = stack.pop() {
            let source = frame.source;
            match source.children.get(frame.next) {
                Some((edge, child)) => {
                    frame.next += 1;
                    stack.push(frame);
                    stack.push(Frame::new(*edge, child));
                }
                None => match stack.last_mut() {
                    Some(parent) => parent.copy.children.push((frame.edge, Box::new(frame.copy))),
                    None => root = Some(frame.copy),
                },
            }
        }
        root.unwrap_or_default()
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            for ((left_edge, left_child), (right_edge, right_child)) in
                left.children.iter().zip(&right.children)
            {
                if left_edge != right_edge {
                    return false;
                }
                stack.push((&**left_child, &**right_child));
            }
        }
        true
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: core::fmt::Debug> core::fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field(
                "edges",
                &self.edges().map(|(edge, _)| edge).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Node<V> {
    fn child(&self, byte: u8) -> Option<&Node<V>> {
        self.children
            .binary_search_by_key(&byte, |&(edge, _)| edge)
            .ok()
            .map(|index| &*self.children[index].1)
    }

    fn child_mut(&mut self, byte: u8) -> Option<&mut Node<V>> {
        self.children
            .binary_search_by_key(&byte, |&(edge, _)| edge)
            .ok()
            .map(|index| &mut *self.children[index].1)
    }

    fn child_or_insert(&mut self, byte: u8) -> &mut Node<V> {
        let index = match self.children.binary_search_by_key(&byte, |&(edge, _)| edge) {
            Ok(index) => index,
            Err(index) => {
                self.children.insert(index, (byte, Box::default()));
                index
            }
        };
        &mut self.children[index].1
    }

    /// Outgoing edges in byte order.
    pub(super) fn edges(&self) -> impl Iterator<Item = (u8, &Node<V>)> + '_ {
        self.children.iter().map(|(edge, child)| (*edge, &**child))
    }

    /// Follows `key` from this node, stopping at the first missing edge.
    fn descend<K: Key + ?Sized>(&self, key: &K) -> Option<&Node<V>> {
        let mut current_node = self;
        for byte in key.key_bytes() {
            current_node = current_node.child(byte)?;
        }
        Some(current_node)
    }

    fn descend_mut<K: Key + ?Sized>(&mut self, key: &K) -> Option<&mut Node<V>> {
        let mut current_node = self;
        for byte in key.key_bytes() {
            current_node = current_node.child_mut(byte)?;
        }
        Some(current_node)
    }

    /// Follows `key` from this node, creating any missing path nodes.
    fn grow<K: Key + ?Sized>(&mut self, key: &K) -> &mut Node<V> {
        let mut current_node = self;
        for byte in key.key_bytes() {
            current_node = current_node.child_or_insert(byte);
        }
        current_node
    }

    fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.edges().map(|(_, child)| child));
        }
        count
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<V>>())
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            root: Node::default(),
            len: 0,
        }
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of keys holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, counting the root and every path node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Path nodes missing for `key` are created; nodes shared with other keys
    /// are reused.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> Option<V> {
        let previous = self.root.grow(key).value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns the value stored under exactly `key`.
    ///
    /// A node that only lies on the path to longer keys is not a match.
    pub fn find<K: Key + ?Sized>(&self, key: &K) -> Option<&V> {
        self.root.descend(key)?.value.as_ref()
    }

    pub fn find_mut<K: Key + ?Sized>(&mut self, key: &K) -> Option<&mut V> {
        self.root.descend_mut(key)?.value.as_mut()
    }

    pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a copy of the value under `key` and whether it was present.
    ///
    /// A missing key yields `V::default()`, so a stored default value can
    /// only be told apart from absence through the flag.
    pub fn lookup<K: Key + ?Sized>(&self, key: &K) -> (V, bool)
    where
        V: Clone + Default,
    {
        match self.find(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        self.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.find_mut(key)
    }

    pub fn bput(&mut self, key: &[u8], value: V) -> Option<V> {
        self.insert(key, value)
    }

    pub fn bget(&self, key: &[u8]) -> Option<&V> {
        self.find(key)
    }

    pub fn bget_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        self.find_mut(key)
    }

    #[cfg(test)]
    pub(super) fn root(&self) -> &Node<V> {
        &self.root
    }
}
