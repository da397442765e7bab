#[path = "../../src/graph/tests/extended_java.rs"]
mod extended_java;
mod network;

pub use network::{GRID_GRAPH, NETWORK_GRAPH, brute_force_cost};
