#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use radix_index::{RadixTrie, TrieError};

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Find { key: Vec<u8> },
    Insert { key: Vec<u8>, val: usize },
    Update { key: Vec<u8>, val: usize },
    Walk,
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut trie = RadixTrie::<usize>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, usize>::new();

    for m in methods {
        match m {
            MapMethod::Find { key } => {
                let trie_v = trie.find(&key).map(|v| v.copied());
                if key.is_empty() {
                    assert_eq!(trie_v, Err(TrieError::InvalidKey));
                } else {
                    assert_eq!(trie_v, Ok(bt_map.get(&key).copied()));
                }
            }
            MapMethod::Insert { key, val } => {
                let result = trie.insert(&key, val);
                if key.is_empty() {
                    assert_eq!(result, Err(TrieError::InvalidKey));
                } else {
                    let added = bt_map.insert(key.clone(), val).is_none();
                    eprintln!("Insert: {:?} {:?} {:?}", key, val, result);
                    assert_eq!(result, Ok(added));
                }
            }
            MapMethod::Update { key, val } => {
                let old_bt = bt_map.get_mut(&key);
                let old_trie = trie.find_mut(&key).ok().flatten();
                assert_eq!(old_trie.as_deref(), old_bt.as_deref());
                if let (Some(old_bt), Some(old_trie)) = (old_bt, old_trie) {
                    *old_bt = val;
                    *old_trie = val;
                }
            }
            MapMethod::Walk => {
                let walked: Vec<(Vec<u8>, usize)> =
                    trie.walk().into_iter().map(|(k, v)| (k, *v)).collect();
                let expected: Vec<(Vec<u8>, usize)> =
                    bt_map.iter().map(|(k, v)| (k.clone(), *v)).collect();
                assert_eq!(walked, expected);
            }
        }
        assert_eq!(trie.len(), bt_map.len());
    }

    for (k, expected_value) in bt_map.iter() {
        let result = trie.find(k).ok().flatten();
        assert_eq!(
            result,
            Some(expected_value),
            "Expected value for key {:?}: {:?} != {:?}",
            k,
            result,
            expected_value
        );
    }
});
