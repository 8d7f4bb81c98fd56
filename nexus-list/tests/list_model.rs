//! Property tests: List checked against a Vec model.

use nexus_list::{Handle, List};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// Operations address nodes by position in the list of every handle ever
/// issued, so stale handles get exercised as well as live ones.
#[derive(Clone, Debug)]
enum Op {
    PushFront,
    PushBack,
    PopFront,
    PopBack,
    InsertBefore(usize),
    InsertAfter(usize),
    Remove(usize),
    MoveToFront(usize),
    MoveToBack(usize),
    MoveBefore(usize, usize),
    MoveAfter(usize, usize),
    Reverse,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::PushBack),
        3 => Just(Op::PushFront),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        2 => any::<usize>().prop_map(Op::InsertBefore),
        2 => any::<usize>().prop_map(Op::InsertAfter),
        2 => any::<usize>().prop_map(Op::Remove),
        2 => any::<usize>().prop_map(Op::MoveToFront),
        2 => any::<usize>().prop_map(Op::MoveToBack),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::MoveBefore(a, b)),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::MoveAfter(a, b)),
        1 => Just(Op::Reverse),
        1 => Just(Op::Clear),
    ]
}

/// Values are insertion ids, so `handles[id]` is the handle issued for `id`.
struct Harness {
    list: List<usize>,
    model: Vec<usize>,
    handles: Vec<Handle>,
}

impl Harness {
    fn new() -> Self {
        Self {
            list: List::new(),
            model: Vec::new(),
            handles: Vec::new(),
        }
    }

    fn pick(&self, n: usize) -> Option<usize> {
        if self.handles.is_empty() {
            None
        } else {
            Some(n % self.handles.len())
        }
    }

    fn pos(&self, id: usize) -> Option<usize> {
        self.model.iter().position(|&v| v == id)
    }

    fn apply(&mut self, op: &Op) {
        let next_id = self.handles.len();
        match *op {
            Op::PushFront => {
                self.handles.push(self.list.push_front(next_id));
                self.model.insert(0, next_id);
            }
            Op::PushBack => {
                self.handles.push(self.list.push_back(next_id));
                self.model.push(next_id);
            }
            Op::PopFront => {
                let expected = if self.model.is_empty() {
                    None
                } else {
                    Some(self.model.remove(0))
                };
                assert_eq!(self.list.pop_front(), expected);
            }
            Op::PopBack => {
                assert_eq!(self.list.pop_back(), self.model.pop());
            }
            Op::InsertBefore(n) | Op::InsertAfter(n) => {
                let Some(mark) = self.pick(n) else { return };
                let after = matches!(op, Op::InsertAfter(_));
                let result = if after {
                    self.list.insert_after(next_id, self.handles[mark])
                } else {
                    self.list.insert_before(next_id, self.handles[mark])
                };
                match self.pos(mark) {
                    Some(pos) => {
                        let handle = result.expect("live mark must be accepted");
                        self.handles.push(handle);
                        self.model.insert(if after { pos + 1 } else { pos }, next_id);
                    }
                    None => assert!(result.is_none()),
                }
            }
            Op::Remove(n) => {
                let Some(id) = self.pick(n) else { return };
                let removed = self.list.remove(self.handles[id]);
                match self.pos(id) {
                    Some(pos) => {
                        self.model.remove(pos);
                        assert_eq!(removed, Some(id));
                    }
                    None => assert_eq!(removed, None),
                }
            }
            Op::MoveToFront(n) => {
                let Some(id) = self.pick(n) else { return };
                self.list.move_to_front(self.handles[id]);
                if let Some(pos) = self.pos(id) {
                    self.model.remove(pos);
                    self.model.insert(0, id);
                }
            }
            Op::MoveToBack(n) => {
                let Some(id) = self.pick(n) else { return };
                self.list.move_to_back(self.handles[id]);
                if let Some(pos) = self.pos(id) {
                    self.model.remove(pos);
                    self.model.push(id);
                }
            }
            Op::MoveBefore(a, b) | Op::MoveAfter(a, b) => {
                let (Some(node), Some(mark)) = (self.pick(a), self.pick(b)) else {
                    return;
                };
                let after = matches!(op, Op::MoveAfter(..));
                if after {
                    self.list.move_after(self.handles[node], self.handles[mark]);
                } else {
                    self.list.move_before(self.handles[node], self.handles[mark]);
                }
                if node == mark {
                    return;
                }
                if let (Some(pos), Some(_)) = (self.pos(node), self.pos(mark)) {
                    self.model.remove(pos);
                    let mark_pos = self.pos(mark).unwrap();
                    self.model
                        .insert(if after { mark_pos + 1 } else { mark_pos }, node);
                }
            }
            Op::Reverse => {
                self.list.reverse();
                self.model.reverse();
            }
            Op::Clear => {
                self.list.clear();
                self.model.clear();
            }
        }
    }

    fn check(&self) {
        assert_eq!(self.list.len(), self.model.len());
        assert_eq!(self.list.to_vec(), self.model);

        let backward: Vec<_> = self.list.iter().rev().copied().collect();
        let mut expected = self.model.clone();
        expected.reverse();
        assert_eq!(backward, expected);

        for (handle, &id) in self.list.handles().zip(&self.model) {
            assert_eq!(handle, self.handles[id]);
            assert_eq!(self.list.get(handle), Some(&id));
        }

        // every handle is live exactly when its id is in the model
        for (id, &handle) in self.handles.iter().enumerate() {
            assert_eq!(self.list.contains_handle(handle), self.model.contains(&id));
        }

        // NodeRef navigation agrees with the model in both directions
        let mut node = self.list.front();
        for &id in &self.model {
            let current = node.expect("model longer than list");
            assert_eq!(*current.value(), id);
            node = current.next();
        }
        assert!(node.is_none());
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any operation sequence leaves the list equal to the model.
    #[test]
    fn list_matches_model(ops in prop::collection::vec(arbitrary_op(), 1..120)) {
        let mut harness = Harness::new();
        for op in &ops {
            harness.apply(op);
            harness.check();
        }
    }

    /// Reversing twice restores the original sequence.
    #[test]
    fn reverse_is_involution(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let mut list = List::from_values(values.clone());
        list.reverse();
        list.reverse();
        prop_assert_eq!(list.to_vec(), values);
    }

    /// N pushes then M pops from the front leave the last N - M values.
    #[test]
    fn push_back_then_pop_front(n in 0usize..200, m_pct in 0.0..=1.0f64) {
        let m = ((n as f64) * m_pct) as usize;
        let mut list = List::new();
        for i in 0..n {
            list.push_back(i);
        }
        for i in 0..m {
            prop_assert_eq!(list.pop_front(), Some(i));
        }
        prop_assert_eq!(list.len(), n - m);
        prop_assert_eq!(list.to_vec(), (m..n).collect::<Vec<_>>());
    }

    /// Filter keeps the matching values in order and leaves the source alone.
    #[test]
    fn filter_matches_vec_filter(values in prop::collection::vec(0u32..100, 0..64)) {
        let list = List::from_values(values.clone());
        let filtered = list.filter(|v| v % 3 == 0);
        let expected: Vec<_> = values.iter().copied().filter(|v| v % 3 == 0).collect();
        prop_assert_eq!(filtered.to_vec(), expected);
        prop_assert_eq!(list.to_vec(), values);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn handles_from_clone_are_foreign() {
    let mut list = List::from_values([1, 2, 3]);
    let mut copy = list.clone();
    let handle = list.front().unwrap().handle();

    assert_eq!(copy.remove(handle), None);
    copy.move_to_back(handle);
    assert_eq!(copy.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.remove(handle), Some(1));
}

#[test]
fn lru_ring() {
    let mut lru = List::with_capacity(3);
    let mut slots = Vec::new();
    for key in ["a", "b", "c"] {
        slots.push(lru.push_front(key));
    }

    // hit on "a"
    lru.move_to_front(slots[0]);
    assert_eq!(lru.to_vec(), vec!["a", "c", "b"]);

    // miss: evict the back, insert the new key
    assert_eq!(lru.pop_back(), Some("b"));
    lru.push_front("d");
    assert_eq!(lru.to_vec(), vec!["d", "a", "c"]);
    assert_eq!(lru.get(slots[1]), None);
}
