use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rank_skiplist::{Geometric, LevelGenerator, MAX_LEVEL, Natural, NodeId, Rank, SkipList};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates values in a range small enough to ensure plenty of duplicates.
fn key_strategy() -> impl Strategy<Value = i32> {
    -300i32..300i32
}

/// Orders `(key, id)` pairs by key alone, so equal keys are told apart only by insertion order.
fn by_key(a: &(i32, u32), b: &(i32, u32)) -> bool {
    a.0 < b.0
}

type ByKey = fn(&(i32, u32), &(i32, u32)) -> bool;
type Keyed = SkipList<(i32, u32), ByKey>;

fn keyed(seed: u64) -> Keyed {
    SkipList::with_level_generator(by_key as ByKey, Geometric::from_seed(seed))
}

/// A sorted `Vec` where equal keys keep insertion order.
#[derive(Default)]
struct Model {
    items: Vec<(i32, u32)>,
}

impl Model {
    fn insert(&mut self, item: (i32, u32)) {
        let at = self.items.partition_point(|m| m.0 <= item.0);
        self.items.insert(at, item);
    }

    fn first_index(&self, key: i32) -> Option<usize> {
        let at = self.items.partition_point(|m| m.0 < key);
        (self.items.get(at)?.0 == key).then_some(at)
    }

    fn remove_item(&mut self, item: (i32, u32)) -> Option<(i32, u32)> {
        let at = self.items.iter().position(|&m| m == item)?;
        Some(self.items.remove(at))
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Delete(i32),
    Remove(usize),
    Find(i32),
    RankOf(i32),
    ByRank(usize),
    RemoveByRank(usize),
    PopFirst,
    PopLast,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => key_strategy().prop_map(Op::Insert),
        3 => key_strategy().prop_map(Op::Delete),
        3 => any::<usize>().prop_map(Op::Remove),
        2 => key_strategy().prop_map(Op::Find),
        2 => key_strategy().prop_map(Op::RankOf),
        2 => (0usize..700).prop_map(Op::ByRank),
        1 => (0usize..700).prop_map(Op::RemoveByRank),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

// ─── Model-checked operations ────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations against both the skip list and a sorted `Vec`,
    /// asserting identical results at every step.
    #[test]
    fn ops_match_sorted_vec(ops in proptest::collection::vec(op_strategy(), TEST_SIZE), seed in any::<u64>()) {
        let mut list = keyed(seed);
        let mut model = Model::default();
        let mut ids: Vec<(NodeId, (i32, u32))> = Vec::new();
        let mut next_id = 0u32;

        for op in &ops {
            match *op {
                Op::Insert(key) => {
                    let item = (key, next_id);
                    next_id += 1;
                    let node = list.insert(item);
                    prop_assert_eq!(list.get(node), Some(&item));
                    ids.push((node, item));
                    model.insert(item);
                }
                Op::Delete(key) => {
                    let expected = model.first_index(key).map(|at| model.items.remove(at));
                    prop_assert_eq!(list.delete(&(key, u32::MAX)), expected, "delete({})", key);
                }
                Op::Remove(which) => {
                    if ids.is_empty() {
                        continue;
                    }
                    let (node, item) = ids.swap_remove(which % ids.len());
                    let expected = model.remove_item(item);
                    prop_assert_eq!(list.remove(node), expected, "remove({:?})", item);
                }
                Op::Find(key) => {
                    let expected = model.first_index(key).map(|at| model.items[at]);
                    let found = list.find(&(key, 0)).and_then(|node| list.get(node)).copied();
                    prop_assert_eq!(found, expected, "find({})", key);
                    prop_assert_eq!(list.contains(&(key, 0)), expected.is_some());
                }
                Op::RankOf(key) => {
                    let expected = model.first_index(key).map(|at| at + 1);
                    prop_assert_eq!(list.rank_of(&(key, 0)), expected, "rank_of({})", key);
                }
                Op::ByRank(rank) => {
                    let expected = rank.checked_sub(1).and_then(|at| model.items.get(at));
                    prop_assert_eq!(list.get_by_rank(rank), expected, "get_by_rank({})", rank);
                    prop_assert_eq!(list.node_by_rank(rank).is_some(), expected.is_some());
                }
                Op::RemoveByRank(rank) => {
                    let expected = (1..=model.items.len()).contains(&rank).then(|| model.items.remove(rank - 1));
                    prop_assert_eq!(list.remove_by_rank(rank), expected, "remove_by_rank({})", rank);
                }
                Op::PopFirst => {
                    let expected = (!model.items.is_empty()).then(|| model.items.remove(0));
                    prop_assert_eq!(list.pop_first(), expected);
                }
                Op::PopLast => {
                    prop_assert_eq!(list.pop_last(), model.items.pop());
                }
            }
            prop_assert_eq!(list.len(), model.items.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(list.is_empty(), model.items.is_empty());
        }

        let items: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(&items, &model.items);
    }

    /// Tests that iteration in both directions matches sorted order.
    #[test]
    fn iter_matches_sorted_vec(values in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let list: SkipList<i32> = values.iter().copied().collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();

        let forward: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(&forward, &sorted);

        let mut reversed = sorted.clone();
        reversed.reverse();
        let backward: Vec<_> = list.iter().rev().copied().collect();
        prop_assert_eq!(&backward, &reversed);

        prop_assert_eq!(list.iter().len(), sorted.len());
        let owned: Vec<_> = list.into_iter().collect();
        prop_assert_eq!(&owned, &sorted);
    }

    /// Tests that `get_by_rank(rank_of(v))` lands on an element equal to `v`.
    #[test]
    fn rank_round_trip(values in proptest::collection::vec(key_strategy(), 1..500), seed in any::<u64>()) {
        let mut list: SkipList<i32> = SkipList::with_seed(seed);
        list.extend(&values);

        for v in &values {
            let rank = list.rank_of(v).expect("present value has a rank");
            prop_assert!((1..=list.len()).contains(&rank));
            prop_assert_eq!(list.get_by_rank(rank), Some(v));
            prop_assert_eq!(list[Rank(rank)], *v);
        }
        prop_assert!(list.get_by_rank(0).is_none());
        prop_assert!(list.get_by_rank(list.len() + 1).is_none());
    }

    /// Tests that `next` and `prev` are inverse at every adjacent pair.
    #[test]
    fn navigation_is_symmetric(values in proptest::collection::vec(key_strategy(), 0..300)) {
        let list: SkipList<i32> = values.into_iter().collect();
        let mut visited = 0;
        let mut previous = None;
        let mut cursor = list.front();
        while let Some(node) = cursor {
            prop_assert_eq!(list.prev(node), previous);
            visited += 1;
            previous = Some(node);
            cursor = list.next(node);
        }
        prop_assert_eq!(previous, list.back());
        prop_assert_eq!(visited, list.len());
    }

    /// Tests that inserting then deleting a value restores the previous contents.
    #[test]
    fn insert_delete_inverse(values in proptest::collection::vec(key_strategy(), 0..300), extra in key_strategy()) {
        let mut list: SkipList<i32> = values.iter().copied().collect();
        let before: Vec<_> = list.iter().copied().collect();

        list.insert(extra);
        prop_assert_eq!(list.delete(&extra), Some(extra));
        let after: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(after, before);
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn five_values_scenario() {
    let mut list = SkipList::new();
    for v in [5, 1, 3, 2, 4] {
        list.insert(v);
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&5));
    assert_eq!(list.rank_of(&3), Some(3));
    assert_eq!(list.node_by_rank(1).and_then(|n| list.get(n)), Some(&1));

    assert_eq!(list.delete(&3), Some(3));
    assert_eq!(list.rank_of(&4), Some(3));
    assert_eq!(list.len(), 4);
}

#[test]
fn empty_list_scenario() {
    let list: SkipList<i32> = SkipList::new();

    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.find(&1), None);
    assert_eq!(list.node_by_rank(1), None);
    assert_eq!(list.rank_of(&1), None);
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.iter().next(), None);
}

#[test]
fn single_element_scenario() {
    let mut list = SkipList::new();
    list.insert(42);

    assert_eq!(list.rank_of(&42), Some(1));
    assert_eq!(list.get_by_rank(1), Some(&42));
    assert_eq!(list.get_by_rank(2), None);

    assert_eq!(list.delete(&42), Some(42));
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.rank_of(&42), None);
}

#[test]
fn remove_honours_identity_among_duplicates() {
    let mut list = keyed(7);
    let ids: Vec<NodeId> = (0..10).map(|id| list.insert((5, id))).collect();
    list.insert((1, 100));
    list.insert((9, 100));

    // Remove from the middle of the equal run, then its ends.
    for &which in &[4, 0, 9, 7] {
        assert_eq!(list.remove(ids[which]), Some((5, which as u32)));
        assert_eq!(list.remove(ids[which]), None);
    }

    let remaining: Vec<u32> = list.iter().filter(|p| p.0 == 5).map(|p| p.1).collect();
    assert_eq!(remaining, vec![1, 2, 3, 5, 6, 8]);
    assert_eq!(list.rank_of(&(5, 0)), Some(2));
    assert_eq!(list.rank_of(&(9, 0)), Some(list.len()));
}

#[test]
fn clear_resets_and_retires_ids() {
    let mut list = SkipList::with_seed(3);
    let ids: Vec<NodeId> = (0..50).map(|v| list.insert(v)).collect();
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    for &id in &ids {
        assert_eq!(list.get(id), None);
        assert_eq!(list.remove(id), None);
    }

    // The list is fully usable again and old ids stay dead even as slots are reused.
    list.extend([3, 1, 2]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(ids.iter().all(|&id| list.get(id).is_none()));
    assert_eq!(list.rank_of(&3), Some(3));
}

#[test]
fn custom_comparator_descending() {
    let mut list = SkipList::with_comparator(|a: &i32, b: &i32| a > b);
    list.extend([1, 5, 3]);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(list.rank_of(&5), Some(1));
    assert_eq!(list.get_by_rank(3), Some(&1));
}

#[test]
fn tall_and_flat_lists_agree() {
    struct Fixed(usize);

    impl LevelGenerator for Fixed {
        fn random_level(&mut self) -> usize {
            self.0
        }
    }

    let mut flat = SkipList::with_level_generator(Natural, Fixed(1));
    let mut tall = SkipList::with_level_generator(Natural, Fixed(MAX_LEVEL));
    for v in [9, 3, 7, 1, 5, 3] {
        flat.insert(v);
        tall.insert(v);
    }
    flat.delete(&7);
    tall.delete(&7);

    assert_eq!(flat.iter().collect::<Vec<_>>(), tall.iter().collect::<Vec<_>>());
    for rank in 1..=flat.len() {
        assert_eq!(flat.get_by_rank(rank), tall.get_by_rank(rank));
    }
    assert_eq!(flat.rank_of(&5), tall.rank_of(&5));
}

#[test]
fn clone_is_deep() {
    let mut list = SkipList::with_seed(11);
    list.extend([1, 2, 3]);
    let copy = list.clone();
    list.pop_first();

    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
#[should_panic(expected = "rank out of bounds")]
fn index_out_of_bounds_panics() {
    let list = SkipList::from([1, 2, 3]);
    let _ = list[Rank(0)];
}
