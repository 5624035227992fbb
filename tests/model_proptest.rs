//! Property tests comparing the trie with `BTreeMap`, which orders `Vec<u8>` keys the same way.

use std::collections::BTreeMap;

use proptest::collection::vec;
use proptest::prelude::*;

use radix_index::{RadixTrie, TreeStatsTrait};

// A small alphabet makes shared prefixes, splits and prefix keys common.
fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), Just(0u8), Just(255u8)], 1..8)
}

proptest! {
    #[test]
    fn matches_btree_model(entries in vec((key_strategy(), any::<u32>()), 0..200)) {
        let mut trie = RadixTrie::new();
        let mut model = BTreeMap::new();

        for (k, v) in &entries {
            let added = trie.insert(k, *v).unwrap();
            prop_assert_eq!(added, model.insert(k.clone(), *v).is_none());
        }

        prop_assert_eq!(trie.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(trie.find(k).unwrap(), Some(v));
        }

        let walked: Vec<(Vec<u8>, u32)> = trie.walk().into_iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u32)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(walked, expected);

        let stats = trie.get_tree_stats();
        prop_assert_eq!(stats.num_values, trie.len());
        prop_assert_eq!(stats.num_pass_through, 0);
    }

    #[test]
    fn absent_keys_are_not_found(
        stored in vec(key_strategy(), 0..100),
        probes in vec(key_strategy(), 0..100),
    ) {
        let trie: RadixTrie<()> = stored.iter().map(|k| (k, ())).collect();
        for probe in &probes {
            prop_assert_eq!(trie.find(probe).unwrap().is_some(), stored.contains(probe));
        }
    }

    #[test]
    fn walk_is_strictly_increasing(keys in vec(key_strategy(), 0..150)) {
        let trie: RadixTrie<usize> = keys.iter().enumerate().map(|(i, k)| (k, i)).collect();
        let walked = trie.walk();
        prop_assert_eq!(walked.len(), trie.len());
        for pair in walked.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
        prop_assert_eq!(trie.walk(), walked);
    }
}
