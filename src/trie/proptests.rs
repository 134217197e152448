use super::node::Node;
use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Checks structural invariants and returns the number of valued nodes.
fn validate_node<V>(node: &Node<V>) -> usize {
    let mut previous = None;
    let mut values = usize::from(node.value.is_some());
    for (byte, child) in node.edges() {
        assert!(
            previous.is_none_or(|previous| previous < byte),
            "edges must be strictly increasing"
        );
        assert!(
            child.value.is_some() || child.edges().next().is_some(),
            "a node without a value must lead somewhere"
        );
        previous = Some(byte);
        values += validate_node(child);
    }
    values
}

fn validate_trie<V>(trie: &Trie<V>) {
    assert_eq!(validate_node(trie.root()), trie.len());
}

fn keys() -> impl Strategy<Value = Vec<u8>> {
    // A narrow alphabet forces shared prefixes.
    prop_oneof![
        prop::collection::vec(prop::sample::select(vec![0u8, b'a', b'b', 255]), 0..6),
        prop::collection::vec(any::<u8>(), 0..12),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Put(Vec<u8>, u32),
    Get(Vec<u8>),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (keys(), any::<u32>()).prop_map(|(key, value)| Op::Put(key, value)),
            2 => keys().prop_map(Op::Get),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn behaves_like_btreemap(ops in ops()) {
        let mut trie = Trie::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    prop_assert_eq!(trie.bput(&key, value), model.insert(key, value));
                }
                Op::Get(key) => {
                    prop_assert_eq!(trie.bget(&key), model.get(&key));
                }
            }
        }

        validate_trie(&trie);
        prop_assert_eq!(trie.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(trie.bget(key), Some(value));
        }
    }

    #[test]
    fn text_and_byte_views_agree(entries in prop::collection::vec((".{0,8}", any::<i64>()), 0..50), probe in ".{0,8}") {
        let mut by_text = Trie::new();
        let mut by_bytes = Trie::new();
        for (key, value) in &entries {
            by_text.put(key, *value);
            by_bytes.bput(key.as_bytes(), *value);
        }

        prop_assert_eq!(&by_text, &by_bytes);
        for (key, _) in &entries {
            prop_assert_eq!(by_text.get(key), by_text.bget(key.as_bytes()));
            prop_assert_eq!(by_bytes.get(key), by_bytes.bget(key.as_bytes()));
        }
        prop_assert_eq!(by_text.lookup(probe.as_str()), by_bytes.lookup(probe.as_bytes()));
    }

    #[test]
    fn unseen_prefixes_are_absent(key in prop::collection::vec(any::<u8>(), 1..16), value in any::<u16>()) {
        let mut trie = Trie::new();
        trie.bput(&key, value);

        for end in 0..key.len() {
            prop_assert_eq!(trie.lookup(&key[..end]), (0, false));
        }
        prop_assert_eq!(trie.lookup(key.as_slice()), (value, true));
        prop_assert_eq!(trie.node_count(), key.len() + 1);
    }
}
