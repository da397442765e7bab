use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering};

use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::graph::RoadNetwork;
use crate::graph::dijkstra::{HeapElement, Predecessor, unpack_path};
use crate::{CityId, Criterion, RoutingError};

pub mod trip;

pub use trip::{Leg, Totals, Trip, TripSummary};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Weight dimension to minimize.
    pub criterion: Criterion,
    /// Paths costing more than this (in units of the criterion) are not explored.
    pub max_cost: f64,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            criterion: Criterion::Distance,
            max_cost: f64::INFINITY,
        }
    }
}

impl ShortestPathConfig {
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            ..Self::default()
        }
    }
}

/// Signal checked by the search before expanding each city.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Resolves the origin and destination names (ignoring case) and computes the shortest trip
/// between them.
pub fn find_route(
    config: &ShortestPathConfig,
    network: &RoadNetwork,
    origin: &str,
    destination: &str,
) -> Result<Trip, RoutingError> {
    let origin = network.resolve(origin)?;
    let destination = network.resolve(destination)?;
    shortest_path(config, network, origin, destination)
}

/// Computes the trip from origin to destination that minimizes the configured criterion.
pub fn shortest_path(
    config: &ShortestPathConfig,
    network: &RoadNetwork,
    origin: CityId,
    destination: CityId,
) -> Result<Trip, RoutingError> {
    shortest_path_with_cancellation(config, network, origin, destination, &NeverCancelled)
}

/// Same as [`shortest_path`] but the search stops with [`RoutingError::Cancelled`] as soon as the
/// cancellation is signaled.
///
/// Among paths of equal cost the one whose last intermediate city was settled latest is returned.
/// The result only depends on the network (and its insertion order), never on hashing.
pub fn shortest_path_with_cancellation(
    config: &ShortestPathConfig,
    network: &RoadNetwork,
    origin: CityId,
    destination: CityId,
    cancellation: &impl Cancellation,
) -> Result<Trip, RoutingError> {
    for city in [origin, destination] {
        if !network.contains(city) {
            return Err(RoutingError::UnknownCityId(city));
        }
    }

    let criterion = config.criterion;
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    if origin == destination {
        return Trip::from_hops(network, criterion, 0.0, destination, vec![]);
    }

    // (current) lowest cost from origin to this city
    let mut shortest_costs = FxHashMap::from_iter([(origin, OrderedFloat(0.0))]);

    // previous hop (value) on the current best known path from origin to this city (key)
    let mut previous_map: FxHashMap<CityId, Predecessor> = FxHashMap::default();

    // cities whose lowest cost is final
    let mut settled = FxHashSet::default();

    // priority queue of discovered cities that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        cost: OrderedFloat(0.0),
        city: origin,
    }]);

    while let Some(element) = frontier.pop() {
        if cancellation.is_cancelled() {
            debug!("Shortest path {origin:?} -> {destination:?} cancelled");
            return Err(RoutingError::Cancelled);
        }

        if element.city == destination {
            let hops = unpack_path(&previous_map, destination);
            return Trip::from_hops(network, criterion, element.cost.0, destination, hops);
        }

        // check if we already know a cheaper way to get to this city from the origin
        let shortest_cost = shortest_costs
            .get(&element.city)
            .copied()
            .unwrap_or(OrderedFloat(f64::INFINITY));
        if element.cost > shortest_cost || !settled.insert(element.city) {
            continue;
        }

        trace!("Settled {:?} at {}", element.city, element.cost);

        for (index, route) in network.routes_from(element.city).iter().enumerate() {
            let cost = OrderedFloat(element.cost.0 + route.weight(criterion));
            if cost.0 > config.max_cost {
                continue;
            }

            let neighbor = route.destination;
            let hop = Predecessor {
                city: element.city,
                route: index,
            };

            let shortest_cost = shortest_costs
                .get(&neighbor)
                .copied()
                .unwrap_or(OrderedFloat(f64::INFINITY));

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if cost < shortest_cost {
                // Relax: we have now found a better way that we are going to explore
                shortest_costs.insert(neighbor, cost);
                previous_map.insert(neighbor, hop);
                frontier.push(HeapElement {
                    cost,
                    city: neighbor,
                });
            } else if cost == shortest_cost && !settled.contains(&neighbor) {
                // same cost through a city settled later, the queued element is still valid
                previous_map.insert(neighbor, hop);
            }
        }
    }

    let name = |id| {
        network
            .city(id)
            .map(|c| c.name().to_owned())
            .unwrap_or_default()
    };

    debug!(
        "No path {origin:?} -> {destination:?}, {} cities settled",
        settled.len()
    );

    Err(RoutingError::NotReachable {
        origin: name(origin),
        destination: name(destination),
        criterion,
    })
}
