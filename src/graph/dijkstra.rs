use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::CityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement {
    /// Current lowest cost from origin to this city.
    pub cost: OrderedFloat<f64>,
    pub city: CityId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            // breaking ties in a deterministic way
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Previous hop on the best known path into a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    pub city: CityId,
    /// Index of the route taken, in the outgoing routes of `city`.
    pub route: usize,
}

/// Unpacks the shortest path from destination back to origin.
/// Returns the hops in order from the origin, the destination itself is not included.
pub fn unpack_path(
    previous_map: &FxHashMap<CityId, Predecessor>,
    destination: CityId,
) -> Vec<Predecessor> {
    let mut hops = vec![];
    let mut next = destination;

    while let Some(&hop) = previous_map.get(&next) {
        debug_assert!(hops.len() <= previous_map.len(), "loop into {destination:?}");
        next = hop.city;
        hops.push(hop);
    }

    hops.reverse();
    hops
}
