use thiserror::Error;

use crate::{CityId, Criterion};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum NetworkError {
    #[error("City {0:?} not found")]
    CityNotFound(String),
    #[error("Cannot add route: city {0:?} is not registered")]
    UnknownCity(String),
    #[error("Cannot add route {origin:?} - {destination:?}: fuel must be finite and >= 0, got {fuel}")]
    InvalidWeight {
        origin: String,
        destination: String,
        fuel: f64,
    },
    #[error("Cannot add route from {0:?} to itself")]
    SelfLoop(String),
    #[error("Route {0:?} - {1:?} already exists")]
    DuplicateRoute(String, String),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RoutingError {
    #[error("City {0:?} not found")]
    CityNotFound(String),
    #[error("City {0:?} does not belong to the network")]
    UnknownCityId(CityId),
    #[error("Criterion {0:?} is not valid, expected distance (1), time (2) or fuel (3)")]
    InvalidCriterion(String),
    #[error("No route by {criterion} from {origin:?} to {destination:?}")]
    NotReachable {
        origin: String,
        destination: String,
        criterion: Criterion,
    },
    #[error("Route search cancelled")]
    Cancelled,
}
