use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Model: stored keys with their live values. Keys whose values were all
/// removed are dropped from the map.
type Model = BTreeMap<String, Vec<u32>>;

fn validate_trie(t: &Trie<u32>, m: &Model) {
    let alphabet = t.alphabet();
    assert!(
        alphabet.ascending().windows(2).all(|w| w[0] < w[1]),
        "ascending alphabet must be strictly sorted"
    );
    assert!(
        alphabet.ascending().iter().eq(alphabet.descending().iter().rev()),
        "descending alphabet must mirror ascending"
    );
    for key in m.keys() {
        for ch in key.chars() {
            assert!(alphabet.contains(ch), "alphabet lost {ch:?}");
        }
    }

    let got: Vec<(String, Vec<u32>)> = t.iter().map(|(k, v)| (k, v.to_vec())).collect();
    let expected: Vec<(String, Vec<u32>)> = m.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    assert_eq!(got, expected, "ascending iteration must match the model");

    let rev: Vec<String> = t.iter_rev().map(|(k, _)| k).collect();
    let expected_rev: Vec<String> = m.keys().rev().cloned().collect();
    assert_eq!(rev, expected_rev, "descending iteration must match the model");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    /// Remove every value equal to the given one.
    Remove(String, u32),
    Find(String),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // Small alphabet so keys share prefixes and removals hit stored keys.
    "[a-e]{0,5}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        55 => (key.clone(), 0u32..4).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => (key.clone(), 0u32..4).prop_map(|(k, v)| Op::Remove(k, v)),
        20 => key.clone().prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=300)
}

fn populated() -> impl Strategy<Value = (Trie<u32>, Model)> {
    prop::collection::vec((key_strategy(), any::<u32>()), 0..=60).prop_map(|entries| {
        let mut t = Trie::new();
        let mut m = Model::new();
        for (k, v) in entries {
            t.insert(&k, v);
            m.entry(k).or_default().push(v);
        }
        (t, m)
    })
}

fn search_keys(t: &Trie<u32>, options: &SearchOptions) -> Vec<String> {
    t.search(options).into_iter().map(|h| h.key).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: Trie<u32> = Trie::new();
        let mut m = Model::new();
        let mut total = 0usize;

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    t.insert(&key, value);
                    m.entry(key).or_default().push(value);
                    total += 1;
                }
                Op::Remove(key, value) => {
                    let stored = m.contains_key(&key);
                    prop_assert_eq!(t.remove(&key, |v| *v == value), stored);
                    if let Some(values) = m.get_mut(&key) {
                        values.retain(|v| *v != value);
                        if values.is_empty() {
                            m.remove(&key);
                        }
                        total = total.saturating_sub(1);
                    }
                }
                Op::Find(key) => {
                    prop_assert_eq!(t.find(&key).map(<[u32]>::to_vec), m.get(&key).cloned());
                }
            }
            prop_assert_eq!(t.total_insertions(), total);
        }

        validate_trie(&t, &m);
    }

    #[test]
    fn prop_pagination((t, m) in populated(), skip in 0usize..70, limit in 0usize..70, reverse in any::<bool>()) {
        let all = search_keys(&t, &SearchOptions::new().reverse(reverse));
        prop_assert_eq!(all.len(), m.len());

        let page = search_keys(&t, &SearchOptions::new().skip(skip).limit(limit).reverse(reverse));
        let expected: Vec<String> = all.iter().skip(skip).take(limit).cloned().collect();
        prop_assert_eq!(page, expected);
    }

    #[test]
    fn prop_prefix_scoping((t, m) in populated(), prefix in "[a-f]{0,3}", reverse in any::<bool>()) {
        let got = search_keys(&t, &SearchOptions::new().prefix(prefix.clone()).reverse(reverse));
        let mut expected: Vec<String> = m.keys().filter(|k| k.starts_with(&prefix)).cloned().collect();
        if reverse {
            expected.reverse();
        }
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_substring_filter((t, m) in populated(), needle in "[a-e]{1,2}", skip in 0usize..5) {
        let got = search_keys(&t, &SearchOptions::new().contains(needle.clone()).skip(skip));
        let expected: Vec<String> = m
            .keys()
            .filter(|k| k.contains(needle.as_str()))
            .skip(skip)
            .cloned()
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_neighbors_of_stored_keys((t, m) in populated()) {
        let keys: Vec<&String> = m.keys().collect();
        for (i, key) in keys.iter().enumerate() {
            let n = t.neighbors_for_existing_key(key);
            let pred = i.checked_sub(1).map(|j| keys[j].as_str());
            let succ = keys.get(i + 1).map(|k| k.as_str());
            prop_assert_eq!(n.predecessor.as_ref().map(|p| p.key.as_str()), pred);
            prop_assert_eq!(n.successor.as_ref().map(|s| s.key.as_str()), succ);
            prop_assert_eq!(n.predecessor_values(), pred.and_then(|k| t.find(k)));
            prop_assert_eq!(n.successor_values(), succ.and_then(|k| t.find(k)));
        }
    }

    #[test]
    fn prop_neighbors_of_new_keys((t, m) in populated(), probe in "[a-f]{0,6}") {
        let n = t.neighbors_for_new_key(&probe);
        let pred = m
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(probe.as_str())))
            .next_back()
            .map(|(k, _)| k.as_str());
        let succ = m
            .range::<str, _>((Bound::Excluded(probe.as_str()), Bound::Unbounded))
            .next()
            .map(|(k, _)| k.as_str());
        prop_assert_eq!(n.predecessor.as_ref().map(|p| p.key.as_str()), pred);
        prop_assert_eq!(n.successor.as_ref().map(|s| s.key.as_str()), succ);
    }

    #[test]
    fn prop_neighbors_skip_removed_keys((mut t, mut m) in populated(), victim in key_strategy(), probe in "[a-e]{0,5}") {
        t.remove(&victim, |_| true);
        m.remove(&victim);

        let n = t.neighbors_for_new_key(&probe);
        let pred = m
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(probe.as_str())))
            .next_back()
            .map(|(k, _)| k.as_str());
        let succ = m
            .range::<str, _>((Bound::Excluded(probe.as_str()), Bound::Unbounded))
            .next()
            .map(|(k, _)| k.as_str());
        prop_assert_eq!(n.predecessor.as_ref().map(|p| p.key.as_str()), pred);
        prop_assert_eq!(n.successor.as_ref().map(|s| s.key.as_str()), succ);
    }
}

#[test]
fn case_fold_symmetry() {
    let mut t: Trie<u32> = Trie::new();
    t.insert("AbC", 1);
    assert_eq!(t.find("ABC"), t.find("abc"));
    assert_eq!(t.find("aBc"), Some(&[1][..]));
}

#[test]
fn exhaustive_neighbors_small_set() {
    let keys = ["", "a", "aa", "ab", "abc", "b", "ba", "c"];
    let t: Trie<usize> = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(t.neighbors_for_existing_key(a).successor_values(), t.find(b), "successor of {a:?}");
        assert_eq!(t.neighbors_for_existing_key(b).predecessor_values(), t.find(a), "predecessor of {b:?}");
    }
}
