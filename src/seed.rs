//! Fixed road network between the main cities of Java.

use crate::graph::{NetworkConfig, RoadNetwork};
use crate::{NetworkError, RouteWeights};

pub const JAVA_CITIES: [&str; 5] = ["Jakarta", "Bandung", "Surabaya", "Yogyakarta", "Semarang"];

/// Routes as (origin, destination, distance km, time minutes, fuel liters).
pub const JAVA_ROUTES: [(&str, &str, u32, u32, f64); 6] = [
    ("Jakarta", "Bandung", 150, 180, 12.5),
    ("Bandung", "Yogyakarta", 400, 480, 33.3),
    ("Yogyakarta", "Surabaya", 325, 390, 27.1),
    ("Jakarta", "Semarang", 450, 540, 37.5),
    ("Semarang", "Surabaya", 350, 420, 29.2),
    ("Bandung", "Semarang", 300, 360, 25.0),
];

pub fn java_network() -> Result<RoadNetwork, NetworkError> {
    java_network_with(NetworkConfig::default())
}

pub fn java_network_with(config: NetworkConfig) -> Result<RoadNetwork, NetworkError> {
    let routes = JAVA_ROUTES.map(|(a, b, distance, time, fuel)| {
        (a, b, RouteWeights::new(distance, time, fuel))
    });
    build_network(config, JAVA_CITIES, routes)
}

/// Builds a network registering all the cities first and then the routes between them.
pub fn build_network<'a>(
    config: NetworkConfig,
    cities: impl IntoIterator<Item = &'a str>,
    routes: impl IntoIterator<Item = (&'a str, &'a str, RouteWeights)>,
) -> Result<RoadNetwork, NetworkError> {
    let mut network = RoadNetwork::with_config(config);

    for city in cities {
        network.add_city(city);
    }

    for (origin, destination, weights) in routes {
        network.add_route(origin, destination, weights)?;
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn java_network_001() {
        let network = java_network().unwrap();

        assert_eq!(network.city_count(), 5);
        assert_eq!(network.route_count(), 6);

        let names: Vec<_> = network.cities().map(|(_, c)| c.name()).collect();
        assert_eq!(names, JAVA_CITIES);
    }

    #[test]
    fn build_network_001() {
        let result = build_network(
            NetworkConfig::default(),
            ["Jakarta"],
            [("Jakarta", "Bandung", RouteWeights::new(150, 180, 12.5))],
        );

        assert_eq!(
            result.unwrap_err(),
            NetworkError::UnknownCity("Bandung".into())
        );
    }
}
