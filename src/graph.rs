use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{City, CityId, NetworkError, Route, RouteWeights, RoutingError};

/// What to do when a route is added between two cities that are already directly connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRoutePolicy {
    /// Fail with [`NetworkError::DuplicateRoute`].
    #[default]
    Reject,
    /// Keep both routes as parallel edges.
    Append,
    /// Overwrite the weights of the existing route (in both directions).
    Replace,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkConfig {
    pub duplicate_routes: DuplicateRoutePolicy,
}

/// Undirected road network between cities.
///
/// Every route is stored as two directed routes with identical weights, one for each direction.
/// The outgoing routes of a city are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    config: NetworkConfig,
    cities: Vec<City>,
    city_ids: FxHashMap<String, CityId>,
    /// Outgoing routes indexed by city.
    routes: Vec<Vec<Route>>,
    route_count: usize,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub const fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Registers a city and returns its identifier.
    /// Registering a name that already exists leaves the network unchanged.
    pub fn add_city(&mut self, name: impl Into<String>) -> CityId {
        let name = name.into();
        if let Some(&id) = self.city_ids.get(&name) {
            return id;
        }

        let id = CityId(self.cities.len() as u32);
        debug!("Adding city {name:?} as {id:?}");

        self.city_ids.insert(name.clone(), id);
        self.cities.push(City::new(name));
        self.routes.push(vec![]);
        id
    }

    /// Adds a bidirectional route between two registered cities.
    ///
    /// The network is left untouched if the route is rejected.
    pub fn add_route(
        &mut self,
        origin: &str,
        destination: &str,
        weights: RouteWeights,
    ) -> Result<(), NetworkError> {
        let a = self
            .city_id(origin)
            .ok_or_else(|| NetworkError::UnknownCity(origin.to_owned()))?;
        let b = self
            .city_id(destination)
            .ok_or_else(|| NetworkError::UnknownCity(destination.to_owned()))?;

        if a == b {
            return Err(NetworkError::SelfLoop(origin.to_owned()));
        }

        if !weights.fuel.is_valid() {
            return Err(NetworkError::InvalidWeight {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
                fuel: weights.fuel.liters(),
            });
        }

        let existing = self.route_index(a, b).zip(self.route_index(b, a));

        match (existing, self.config.duplicate_routes) {
            (Some(_), DuplicateRoutePolicy::Reject) => {
                warn!("Rejecting duplicate route {origin:?} - {destination:?}");
                Err(NetworkError::DuplicateRoute(
                    origin.to_owned(),
                    destination.to_owned(),
                ))
            }
            (Some((ab, ba)), DuplicateRoutePolicy::Replace) => {
                debug!("Replacing route {origin:?} - {destination:?} with {weights:?}");
                self.routes[a.index()][ab].weights = weights;
                self.routes[b.index()][ba].weights = weights;
                Ok(())
            }
            (Some(_), DuplicateRoutePolicy::Append) | (None, _) => {
                debug!("Adding route {origin:?} - {destination:?} with {weights:?}");
                self.routes[a.index()].push(Route {
                    destination: b,
                    weights,
                });
                self.routes[b.index()].push(Route {
                    destination: a,
                    weights,
                });
                self.route_count += 1;
                Ok(())
            }
        }
    }

    /// Gets the outgoing routes of the city with the given name (case-sensitive).
    pub fn neighbors(&self, name: &str) -> Result<&[Route], NetworkError> {
        self.city_id(name)
            .map(|id| self.routes_from(id))
            .ok_or_else(|| NetworkError::CityNotFound(name.to_owned()))
    }

    /// Gets the outgoing routes of the city in insertion order.
    /// Returns an empty slice if the city doesn't belong to the network.
    pub fn routes_from(&self, city: CityId) -> &[Route] {
        self.routes
            .get(city.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Gets the first route (in insertion order) that connects the two cities.
    pub fn route_between(&self, origin: CityId, destination: CityId) -> Option<&Route> {
        self.route_index(origin, destination)
            .map(|i| &self.routes[origin.index()][i])
    }

    fn route_index(&self, origin: CityId, destination: CityId) -> Option<usize> {
        self.routes_from(origin)
            .iter()
            .position(|r| r.destination == destination)
    }

    /// Gets the city registered with exactly this name.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_ids.get(name).copied()
    }

    /// Resolves a free-text city name, ignoring case (full Unicode lowercase folding).
    /// An exact match is preferred, otherwise the first registered city that matches wins.
    pub fn find_city(&self, name: &str) -> Option<CityId> {
        let name = name.trim();
        self.city_id(name).or_else(|| {
            let folded = name.to_lowercase();
            self.cities()
                .find(|(_, city)| city.name().to_lowercase() == folded)
                .map(|(id, _)| id)
        })
    }

    /// Same as [`RoadNetwork::find_city`] but fails with [`RoutingError::CityNotFound`].
    pub fn resolve(&self, name: &str) -> Result<CityId, RoutingError> {
        self.find_city(name)
            .ok_or_else(|| RoutingError::CityNotFound(name.to_owned()))
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    pub fn contains(&self, id: CityId) -> bool {
        id.index() < self.cities.len()
    }

    /// Gets an iterator over all the cities in registration order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, city)| (CityId(i as u32), city))
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of bidirectional routes, each counted once.
    pub const fn route_count(&self) -> usize {
        self.route_count
    }
}

pub mod dijkstra;
