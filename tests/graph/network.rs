use std::sync::LazyLock;

use cityroute::{CityId, Criterion, NetworkConfig, RoadNetwork, RouteWeights, seed};

use super::extended_java::{EXTRA_CITIES, EXTRA_ROUTES};

/// The Java network extended with the northern coast, Solo, Malang, an isolated city (Bogor) and
/// an island that is not connected to Java (Denpasar - Mataram).
pub static NETWORK_GRAPH: LazyLock<RoadNetwork> = LazyLock::new(|| {
    let cities = seed::JAVA_CITIES.into_iter().chain(EXTRA_CITIES);
    let routes = seed::JAVA_ROUTES
        .into_iter()
        .chain(EXTRA_ROUTES)
        .map(|(a, b, distance, time, fuel)| (a, b, RouteWeights::new(distance, time, fuel)));

    seed::build_network(NetworkConfig::default(), cities, routes).unwrap()
});

/// 4x4 grid with pseudo-random weights and a few diagonals.
pub static GRID_GRAPH: LazyLock<RoadNetwork> = LazyLock::new(|| {
    const SIZE: usize = 4;

    // deterministic linear congruential generator
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move |max: u32| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as u32) % max
    };

    let names: Vec<_> = (0..SIZE * SIZE)
        .map(|i| format!("C{}{}", i / SIZE, i % SIZE))
        .collect();

    let mut network = RoadNetwork::new();
    for name in &names {
        network.add_city(name.as_str());
    }

    let mut add = |a: usize, b: usize| {
        let weights = RouteWeights::new(next(100), next(120), f64::from(next(90)) / 10.0);
        network.add_route(&names[a], &names[b], weights).unwrap();
    };

    for row in 0..SIZE {
        for col in 0..SIZE {
            let i = row * SIZE + col;
            if col + 1 < SIZE {
                add(i, i + 1);
            }
            if row + 1 < SIZE {
                add(i, i + SIZE);
            }
            if row + 1 < SIZE && col + 1 < SIZE && (row + col) % 2 == 0 {
                add(i, i + SIZE + 1);
            }
        }
    }

    network
});

/// Lowest cost over all the simple paths from origin to destination, by exhaustive search.
pub fn brute_force_cost(
    network: &RoadNetwork,
    origin: CityId,
    destination: CityId,
    criterion: Criterion,
) -> Option<f64> {
    fn visit(
        network: &RoadNetwork,
        city: CityId,
        destination: CityId,
        criterion: Criterion,
        cost: f64,
        visited: &mut Vec<CityId>,
        best: &mut Option<f64>,
    ) {
        if city == destination {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }

        for route in network.routes_from(city) {
            if visited.contains(&route.destination) {
                continue;
            }

            visited.push(route.destination);
            let cost = cost + route.weight(criterion);
            visit(network, route.destination, destination, criterion, cost, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![origin];
    visit(
        network,
        origin,
        destination,
        criterion,
        0.0,
        &mut visited,
        &mut best,
    );
    best
}
