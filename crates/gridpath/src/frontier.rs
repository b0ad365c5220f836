use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Cell;

/// One frontier entry: estimated total cost, insertion sequence, cost so
/// far, and the cell itself.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) cost: f64,
    pub(crate) cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // and the earliest insertion among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue with deterministic FIFO tie-breaking.
///
/// A cell may be pushed several times with different costs; callers skip
/// the stale entries when they pop them.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: f64, cost: f64, cell: Cell) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            cost,
            cell,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Total number of pushes so far.
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }
}
