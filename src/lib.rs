#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;
pub mod seed;

pub use error::{NetworkError, RoutingError};
pub use graph::{DuplicateRoutePolicy, NetworkConfig, RoadNetwork};
pub use model::{
    City, CityId, Criterion, Kilometers, Liters, Minutes, Route, RouteWeights, weight_of,
};
pub use routing::{
    Cancellation, Leg, NeverCancelled, ShortestPathConfig, Totals, Trip, TripSummary, find_route,
    shortest_path, shortest_path_with_cancellation,
};
