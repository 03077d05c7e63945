// ==============================================
// DEPQ PROPERTY TESTS (integration)
// ==============================================
//
// Drives DepqCore with random operation sequences and compares every step
// against a naive Vec model that inserts by linear scan.

use depq::{DepqCore, DepqError};
use proptest::prelude::*;

// ==============================================
// Reference Model
// ==============================================

#[derive(Debug, Clone, Default)]
struct Model {
    entries: Vec<(u32, i32)>,
    max_length: Option<usize>,
}

impl Model {
    fn evict(&mut self) {
        if let Some(max) = self.max_length {
            self.entries.truncate(max);
        }
    }

    fn insert(&mut self, item: u32, priority: i32) {
        let index = self
            .entries
            .iter()
            .position(|(_, p)| priority > *p)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, (item, priority));
        self.evict();
    }

    fn addfirst(&mut self, item: u32) {
        let priority = self.entries.first().map_or(0, |(_, p)| *p);
        self.entries.insert(0, (item, priority));
        self.evict();
    }

    fn addlast(&mut self, item: u32) {
        if self.max_length.is_some_and(|max| self.entries.len() >= max) {
            return;
        }
        let priority = self.entries.last().map_or(0, |(_, p)| *p);
        self.entries.push((item, priority));
    }

    fn remove(&mut self, item: u32, limit: usize) -> Vec<(u32, i32)> {
        let mut removed = Vec::new();
        let mut index = self.entries.len();
        while index > 0 && removed.len() < limit {
            index -= 1;
            if self.entries[index].0 == item {
                removed.push(self.entries.remove(index));
            }
        }
        removed
    }

    fn count(&self, item: u32) -> usize {
        self.entries.iter().filter(|(i, _)| *i == item).count()
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u32, i32),
    AddFirst(u32),
    AddLast(u32),
    PopFirst,
    PopLast,
    Remove(u32, isize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u32..8, -20i32..20).prop_map(|(i, p)| Op::Insert(i, p)),
        1 => (0u32..8).prop_map(Op::AddFirst),
        1 => (0u32..8).prop_map(Op::AddLast),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
        1 => (0u32..8, -1isize..4).prop_map(|(i, n)| Op::Remove(i, n)),
        1 => Just(Op::Clear),
    ]
}

fn apply(depq: &mut DepqCore<u32, i32>, model: &mut Model, op: Op) {
    match op {
        Op::Insert(item, priority) => {
            depq.insert(item, priority);
            model.insert(item, priority);
        },
        Op::AddFirst(item) => {
            depq.addfirst(item, None).unwrap();
            model.addfirst(item);
        },
        Op::AddLast(item) => {
            depq.addlast(item, None).unwrap();
            model.addlast(item);
        },
        Op::PopFirst => {
            let expected = if model.entries.is_empty() {
                Err(DepqError::EmptyContainer)
            } else {
                Ok(model.entries.remove(0))
            };
            assert_eq!(depq.popfirst(), expected);
        },
        Op::PopLast => {
            let expected = model.entries.pop().ok_or(DepqError::EmptyContainer);
            assert_eq!(depq.poplast(), expected);
        },
        Op::Remove(item, count) => {
            let limit = if count == -1 { usize::MAX } else { count as usize };
            let expected = model.remove(item, limit);
            assert_eq!(depq.remove(&item, count), Ok(expected));
        },
        Op::Clear => {
            depq.clear();
            model.entries.clear();
        },
    }
}

proptest! {
    #[test]
    fn prop_matches_linear_insertion(
        ops in prop::collection::vec(op_strategy(), 0..150)
    ) {
        let mut depq = DepqCore::new();
        let mut model = Model::default();
        for op in ops {
            apply(&mut depq, &mut model, op);
            prop_assert_eq!(depq.to_vec(), model.entries.clone());
        }
    }

    #[test]
    fn prop_sorted_after_every_operation(
        ops in prop::collection::vec(op_strategy(), 0..150)
    ) {
        let mut depq = DepqCore::new();
        let mut model = Model::default();
        for op in ops {
            apply(&mut depq, &mut model, op);
            let priorities: Vec<i32> = depq.iter().map(|(_, p)| *p).collect();
            prop_assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn prop_frequency_consistency(
        ops in prop::collection::vec(op_strategy(), 0..150)
    ) {
        let mut depq = DepqCore::new();
        let mut model = Model::default();
        for op in ops {
            apply(&mut depq, &mut model, op);
            for item in 0u32..8 {
                prop_assert_eq!(depq.count(&item), model.count(item));
                prop_assert_eq!(depq.contains(&item), model.count(item) > 0);
            }
            prop_assert!(depq.check_invariants().is_ok());
        }
    }

    #[test]
    fn prop_equal_priorities_keep_insertion_order(
        priorities in prop::collection::vec(0i32..4, 1..80)
    ) {
        let mut depq = DepqCore::new();
        for (seq, priority) in priorities.iter().enumerate() {
            depq.insert(seq, *priority);
        }
        let entries = depq.to_vec();
        for pair in entries.windows(2) {
            let ((a, pa), (b, pb)) = (pair[0], pair[1]);
            if pa == pb {
                prop_assert!(a < b, "{a} inserted before {b} but placed after it");
            }
        }
    }

    #[test]
    fn prop_bound_keeps_highest_entries(
        max_length in 0usize..12,
        inserts in prop::collection::vec((0u32..50, -10i32..10), 0..80)
    ) {
        let mut depq = DepqCore::with_max_length(max_length);
        for (item, priority) in &inserts {
            depq.insert(*item, *priority);
            prop_assert!(depq.len() <= max_length);
        }

        let mut expected = inserts.clone();
        expected.sort_by(|a, b| b.1.cmp(&a.1));
        expected.truncate(max_length);
        prop_assert_eq!(depq.to_vec(), expected);
    }

    #[test]
    fn prop_bounded_ops_match_model(
        max_length in 1usize..10,
        ops in prop::collection::vec(op_strategy(), 0..120)
    ) {
        let mut depq = DepqCore::with_max_length(max_length);
        let mut model = Model { max_length: Some(max_length), ..Model::default() };
        for op in ops {
            apply(&mut depq, &mut model, op);
            prop_assert_eq!(depq.to_vec(), model.entries.clone());
            prop_assert!(depq.len() <= max_length);
        }
    }

    #[test]
    fn prop_export_import_round_trip(
        ops in prop::collection::vec(op_strategy(), 0..100)
    ) {
        let mut depq = DepqCore::new();
        let mut model = Model::default();
        for op in ops {
            apply(&mut depq, &mut model, op);
        }
        let state = depq.export_state();
        let restored = DepqCore::import_state(state.clone());
        prop_assert_eq!(restored.to_vec(), depq.to_vec());
        prop_assert_eq!(restored.export_state(), state);
        prop_assert_eq!(restored.start(), depq.start());
        prop_assert_eq!(restored.max_length(), depq.max_length());
    }
}
