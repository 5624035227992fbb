use radix_index::{RadixTree, RadixTrie, TreeStatsTrait, TrieError};

// Values of mixed kinds, the way an embedding index stores opaque payloads.
#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Int(i64),
    Text(&'static str),
}

fn scenario_trie() -> RadixTrie<Payload> {
    let mut trie = RadixTrie::new();
    trie.insert("james", Payload::Int(4)).unwrap();
    trie.insert("janice", Payload::Int(4)).unwrap();
    trie.insert("a", Payload::Text("different")).unwrap();
    trie.insert("freddie", Payload::Text("kruger")).unwrap();
    trie.insert("jimbo", Payload::Text("kruger")).unwrap();
    trie
}

#[test]
fn end_to_end_walk_order() {
    let trie = scenario_trie();
    assert_eq!(trie.len(), 5);

    let walked: Vec<(String, Payload)> = trie
        .walk()
        .into_iter()
        .map(|(k, v)| (String::from_utf8(k).unwrap(), v.clone()))
        .collect();
    assert_eq!(
        walked,
        vec![
            ("a".to_string(), Payload::Text("different")),
            ("freddie".to_string(), Payload::Text("kruger")),
            ("james".to_string(), Payload::Int(4)),
            ("janice".to_string(), Payload::Int(4)),
            ("jimbo".to_string(), Payload::Text("kruger")),
        ]
    );
}

#[test]
fn update_keeps_len_and_overwrites() {
    let mut trie = scenario_trie();
    assert_eq!(trie.insert("james", Payload::Text("different")), Ok(false));
    assert_eq!(trie.len(), 5);
    assert_eq!(trie.find("james"), Ok(Some(&Payload::Text("different"))));
    assert_eq!(trie.find("janice"), Ok(Some(&Payload::Int(4))));
}

#[test]
fn exact_match_only() {
    let trie = scenario_trie();
    for absent in ["jam", "jan", "ja", "j", "fredie", "freddi", "freddies", "aa", "b", "jimb"] {
        assert_eq!(trie.find(absent), Ok(None), "{absent}");
    }
    assert_eq!(trie.find(""), Err(TrieError::InvalidKey));
}

#[test]
fn failed_lookups_do_not_change_shape() {
    let trie = scenario_trie();
    let before = trie.get_tree_stats();
    for probe in ["fredie", "jam", "zzz", "jimbox"] {
        let _ = trie.find(probe);
    }
    assert_eq!(trie.get_tree_stats(), before);
    assert_eq!(before.num_values, trie.len());
    assert_eq!(before.num_pass_through, 0);
}

#[test]
fn prefix_keys_walk_before_extensions() {
    let mut trie = RadixTrie::new();
    for (i, k) in ["abc", "a", "abcd", "ab", "b"].iter().enumerate() {
        trie.insert(k, i).unwrap();
    }
    let keys: Vec<Vec<u8>> = trie.walk().into_iter().map(|(k, _)| k).collect();
    let expected: Vec<Vec<u8>> = ["a", "ab", "abc", "abcd", "b"]
        .iter()
        .map(|k| k.as_bytes().to_vec())
        .collect();
    assert_eq!(keys, expected);
}

// Collaborators program against the trait.
fn load<T: RadixTree<u32>>(index: &mut T, keys: &[&str]) -> usize {
    keys.iter()
        .enumerate()
        .filter(|(i, k)| index.insert(k, *i as u32).unwrap())
        .count()
}

#[test]
fn trait_object_style_usage() {
    let mut trie = RadixTrie::new();
    let added = load(&mut trie, &["x", "xy", "x", "yx", "xy"]);
    assert_eq!(added, 3);
    assert_eq!(RadixTree::len(&trie), 3);
    assert!(!RadixTree::is_empty(&trie));
    assert_eq!(RadixTree::find(&trie, "x"), Ok(Some(&2)));
    assert_eq!(RadixTree::walk(&trie).len(), 3);
}

// Every prefix of a long run of one byte: each key hangs one level below the previous one.
fn deep_prefix_chain(depth: usize) -> RadixTrie<usize> {
    let key = vec![b'a'; depth];
    let mut trie = RadixTrie::new();
    trie.insert(&key, depth).unwrap();
    for len in (1..depth).rev() {
        assert_eq!(trie.insert(&key[..len], len), Ok(true));
    }
    trie
}

fn deep_prefix_chain_checks(depth: usize) {
    let trie = deep_prefix_chain(depth);
    assert_eq!(trie.len(), depth);

    let walked = trie.walk();
    assert_eq!(walked.len(), depth);
    for (i, (k, v)) in walked.iter().enumerate() {
        assert_eq!(k.len(), i + 1);
        assert_eq!(**v, i + 1);
    }
    drop(walked);

    let stats = trie.get_tree_stats();
    assert_eq!(stats.num_nodes, depth);
    assert_eq!(stats.max_height, depth);
    assert_eq!(stats.num_leaves, 1);

    assert_eq!(trie.find(vec![b'a'; depth]), Ok(Some(&depth)));
    assert_eq!(trie.find(vec![b'a'; depth + 1]), Ok(None));
    drop(trie);
}

// A small stack makes any per-level recursion in walk, stats or drop fail loudly.
#[test]
fn deep_prefix_chain_walks_and_drops() {
    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| deep_prefix_chain_checks(8_000))
        .unwrap()
        .join()
        .unwrap();
}
