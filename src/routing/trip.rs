use std::fmt;

use crate::graph::RoadNetwork;
use crate::graph::dijkstra::Predecessor;
use crate::{CityId, Criterion, Kilometers, Liters, Minutes, RouteWeights, RoutingError};

/// A single route taken by a trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub origin: CityId,
    pub destination: CityId,
    pub weights: RouteWeights,
}

/// Sums of all the weight dimensions over the legs of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub distance: Kilometers,
    pub time: Minutes,
    pub fuel: Liters,
}

impl FromIterator<RouteWeights> for Totals {
    fn from_iter<I: IntoIterator<Item = RouteWeights>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut totals, weights| {
            totals.distance += weights.distance;
            totals.time += weights.time;
            totals.fuel += weights.fuel;
            totals
        })
    }
}

/// Shortest path between two cities for a given criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// The criterion that was minimized.
    pub criterion: Criterion,
    /// Total of the minimized criterion.
    pub cost: f64,
    /// Visited cities, from origin to destination (both included).
    pub cities: Vec<CityId>,
    pub legs: Vec<Leg>,
    /// Totals of every dimension, regardless of the criterion.
    pub totals: Totals,
}

impl Trip {
    /// Builds the trip that follows the given hops (from the origin) and ends at destination.
    pub(crate) fn from_hops(
        network: &RoadNetwork,
        criterion: Criterion,
        cost: f64,
        destination: CityId,
        hops: Vec<Predecessor>,
    ) -> Result<Self, RoutingError> {
        let legs = hops
            .iter()
            .zip(hops.iter().skip(1).map(|h| h.city).chain([destination]))
            .map(|(hop, next)| -> Result<Leg, RoutingError> {
                let route = network
                    .routes_from(hop.city)
                    .get(hop.route)
                    .filter(|r| r.destination == next)
                    .ok_or(RoutingError::UnknownCityId(hop.city))?;

                Ok(Leg {
                    origin: hop.city,
                    destination: next,
                    weights: route.weights,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cities = hops
            .iter()
            .map(|h| h.city)
            .chain([destination])
            .collect();

        let totals = legs.iter().map(|leg| leg.weights).collect();

        Ok(Self {
            criterion,
            cost,
            cities,
            legs,
            totals,
        })
    }

    pub fn origin(&self) -> Option<CityId> {
        self.cities.first().copied()
    }

    pub fn destination(&self) -> Option<CityId> {
        self.cities.last().copied()
    }

    /// Gets the names of the visited cities, from origin to destination.
    pub fn city_names<'a>(&self, network: &'a RoadNetwork) -> impl Iterator<Item = &'a str> {
        self.cities
            .iter()
            .filter_map(|&id| network.city(id))
            .map(|city| city.name())
    }

    /// Gets a printable summary of the trip.
    pub const fn summary<'a>(&'a self, network: &'a RoadNetwork) -> TripSummary<'a> {
        TripSummary {
            trip: self,
            network,
        }
    }
}

/// Human readable rendering of a trip.
///
/// ```text
/// Shortest route by distance:
/// Jakarta → Bandung → Semarang → Surabaya
/// Total distance: 800 km
/// Total time: 960 minutes (16 hours 0 minutes)
/// Total fuel: 66.70 liters
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TripSummary<'a> {
    trip: &'a Trip,
    network: &'a RoadNetwork,
}

impl fmt::Display for TripSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Trip {
            criterion, totals, ..
        } = self.trip;

        let path: Vec<_> = self.trip.city_names(self.network).collect();

        writeln!(f, "Shortest route by {criterion}:")?;
        writeln!(f, "{}", path.join(" → "))?;
        writeln!(f, "Total distance: {} km", totals.distance.km())?;
        writeln!(
            f,
            "Total time: {} minutes ({} hours {} minutes)",
            totals.time.minutes(),
            totals.time.hours(),
            totals.time.minutes_of_hour()
        )?;
        write!(f, "Total fuel: {:.2} liters", totals.fuel.liters())
    }
}
