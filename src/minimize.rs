//! `MinimizeIntervals`: greedily collapse an [`IntervalSet`] down to at
//! most `k` intervals by repeatedly merging across the smallest gap
//! (spec.md §4.3).
//!
//! Grounded on the teacher's arena-style interval storage
//! (`concrete/set.rs` keeps a flat `Vec` and never relinks by pointer);
//! here the working set doubles as an index-based doubly-linked list
//! so a merge is an O(1) relink instead of a `Vec::remove` shift, and a
//! [`BinaryHeap`] orders candidate merges by gap size. Heap entries can
//! go stale after a merge changes a gap's neighbors; staleness is
//! handled by lazy deletion (`MergeNode::alive`) rather than by
//! removing from the heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::interval::Interval;
use crate::sets::IntervalSet;

struct MergeNode {
    interval: Interval,
    prev: Option<usize>,
    next: Option<usize>,
    alive: bool,
}

/// Gap to the right of `left`, keyed so the heap pops the smallest
/// gap first; `left` identifies the node whose `next` it measures to,
/// so a merge consumes exactly one heap entry (the survivor gets a
/// fresh one pushed if it still has a right neighbor).
struct GapKey {
    gap: u128,
    left: usize,
}

impl PartialEq for GapKey {
    fn eq(&self, other: &Self) -> bool {
        self.gap == other.gap && self.left == other.left
    }
}
impl Eq for GapKey {}
impl PartialOrd for GapKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for GapKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // spec.md §4.3: "equal distances are broken by lower `lo` first
        // (earlier gap wins)"; `left` is that gap's position, so it's
        // the tiebreak once `gap` ties.
        self.gap.cmp(&other.gap).then(self.left.cmp(&other.left))
    }
}

/// Collapse `set` to at most `k` intervals, preserving soundness
/// (every value the input covers is covered by the output) by only
/// ever widening, never narrowing, a merged span (spec.md §4.3).
///
/// `k == 0` is treated as `k == 1`: a set can't be represented by zero
/// intervals unless it's already empty.
pub fn minimize_intervals(set: &IntervalSet, k: usize) -> IntervalSet {
    let k = k.max(1);
    if set.number_of_intervals() <= k {
        return set.clone();
    }

    let width = set.width();
    let n = set.number_of_intervals();
    let mut nodes: Vec<MergeNode> = set
        .intervals()
        .iter()
        .enumerate()
        .map(|(i, &interval)| MergeNode {
            interval,
            prev: i.checked_sub(1),
            next: if i + 1 < n { Some(i + 1) } else { None },
            alive: true,
        })
        .collect();

    let mut heap: BinaryHeap<Reverse<GapKey>> = BinaryHeap::with_capacity(n);
    for i in 0..n {
        push_gap(&mut heap, &nodes, i);
    }

    let mut live_count = n;
    while live_count > k {
        let Reverse(GapKey { left, .. }) = match heap.pop() {
            Some(entry) => entry,
            None => break,
        };
        if !nodes[left].alive {
            continue;
        }
        let Some(right) = nodes[left].next else { continue };
        if !nodes[right].alive {
            continue;
        }

        let merged = Interval::convex_hull(&nodes[left].interval, &nodes[right].interval);
        nodes[left].interval = merged;
        nodes[left].next = nodes[right].next;
        if let Some(after) = nodes[right].next {
            nodes[after].prev = Some(left);
        }
        nodes[right].alive = false;
        live_count -= 1;

        push_gap(&mut heap, &nodes, left);
        if let Some(prev) = nodes[left].prev {
            push_gap(&mut heap, &nodes, prev);
        }
    }

    let mut result = Vec::with_capacity(live_count);
    let mut cursor = nodes.iter().position(|node| node.alive && node.prev.is_none());
    while let Some(i) = cursor {
        result.push(nodes[i].interval);
        cursor = nodes[i].next;
    }

    IntervalSet::new_unchecked(width, result)
}

fn push_gap(heap: &mut BinaryHeap<Reverse<GapKey>>, nodes: &[MergeNode], left: usize) {
    if !nodes[left].alive {
        return;
    }
    if let Some(right) = nodes[left].next {
        let gap = nodes[right].interval.lo().distance(&nodes[left].interval.hi());
        heap.push(Reverse(GapKey { gap, left }));
    }
}
