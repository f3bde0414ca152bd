use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over a `BinaryHeap` with lazy deletion.
///
/// There is no decrease-key: a better priority for a vertex is pushed as a fresh entry and
/// the old one stays behind. [`pop_fresh`](LazyMinQueue::pop_fresh) discards such stale
/// entries as they surface. Entries of equal priority pop in ascending vertex order.
#[derive(Debug)]
pub struct LazyMinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Entries dropped by `pop_fresh` so far
    discarded: usize,
}

impl<V, P> LazyMinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        LazyMinQueue {
            heap: BinaryHeap::new(),
            discarded: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of stale entries discarded by [`pop_fresh`](LazyMinQueue::pop_fresh)
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Pops entries until one is not stale according to `is_stale`, and returns it
    pub fn pop_fresh<F>(&mut self, mut is_stale: F) -> Option<(V, P)>
    where
        F: FnMut(&V, &P) -> bool,
    {
        while let Some((vertex, priority)) = self.pop() {
            if is_stale(&vertex, &priority) {
                log::trace!("discarding stale entry {:?} at {:?}", vertex, priority);
                self.discarded += 1;
                continue;
            }
            return Some((vertex, priority));
        }
        None
    }

    /// Returns the element with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (vertex, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for LazyMinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
