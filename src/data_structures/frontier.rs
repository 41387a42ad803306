use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-ordered search frontier for Dijkstra's algorithm
///
/// Entries are ordered by (priority, vertex), so equal priorities break
/// ties on the smaller vertex id. This keeps the search deterministic for
/// a fixed graph.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority into the frontier
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Frontier::new()
    }
}
