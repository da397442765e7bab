use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::warn;

use crate::RoutingError;

/// Uniquely identifies a city registered into a road network.
/// Identifiers are dense and assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(pub(crate) u32);

impl CityId {
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A node of the road network, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Distance in whole kilometers.
///
/// Route distances fit in a `u32` (see [`RouteWeights::new`]), the wider representation keeps the
/// totals of long trips exact. Sums saturate instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kilometers(u64);

impl Kilometers {
    pub const ZERO: Self = Self(0);

    pub const fn from_km(km: u64) -> Self {
        Self(km)
    }

    pub const fn km(&self) -> u64 {
        self.0
    }
}

/// Travel time in whole minutes, summed like [`Kilometers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Minutes(u64);

impl Minutes {
    pub const ZERO: Self = Self(0);

    pub const fn from_minutes(minutes: u64) -> Self {
        Self(minutes)
    }

    pub const fn minutes(&self) -> u64 {
        self.0
    }

    /// Whole hours contained in the duration.
    pub const fn hours(&self) -> u64 {
        self.0 / 60
    }

    /// Minutes left over once the whole hours are taken out.
    pub const fn minutes_of_hour(&self) -> u64 {
        self.0 % 60
    }
}

/// Fuel consumption in liters.
/// A valid amount of fuel is finite and non-negative, see [`Liters::is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialOrd)]
pub struct Liters(f64);

impl Liters {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_liters(liters: f64) -> Self {
        Self(liters)
    }

    pub const fn liters(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialEq for Liters {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-9;
        abs_diff_eq!(self.0, other.0, epsilon = EPSILON)
    }
}

macro_rules! impl_sum {
    ($t:ty, $add:expr) => {
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self($add(self.0, rhs.0))
            }
        }

        impl AddAssign for $t {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sum for $t {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }
    };
}

impl_sum!(Kilometers, u64::saturating_add);
impl_sum!(Minutes, u64::saturating_add);
impl_sum!(Liters, |a: f64, b: f64| a + b);

/// The three independent weights carried by every route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteWeights {
    pub distance: Kilometers,
    pub time: Minutes,
    pub fuel: Liters,
}

impl RouteWeights {
    pub const fn new(distance_km: u32, time_minutes: u32, fuel_liters: f64) -> Self {
        Self {
            distance: Kilometers::from_km(distance_km as u64),
            time: Minutes::from_minutes(time_minutes as u64),
            fuel: Liters::from_liters(fuel_liters),
        }
    }
}

/// Directed half of a bidirectional road between two cities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub destination: CityId,
    pub weights: RouteWeights,
}

impl Route {
    /// Gets the scalar weight of the route for the given criterion.
    pub fn weight(&self, criterion: Criterion) -> f64 {
        weight_of(self, criterion)
    }
}

/// The weight dimension a shortest path query optimizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Criterion {
    /// Minimum total distance in kilometers.
    #[default]
    Distance,
    /// Minimum total travel time in minutes.
    Time,
    /// Minimum total fuel consumption in liters.
    Fuel,
}

impl Criterion {
    /// Maps the menu choices 1, 2 and 3 to distance, time and fuel respectively.
    pub fn from_choice(choice: u8) -> Result<Self, RoutingError> {
        match choice {
            1 => Ok(Self::Distance),
            2 => Ok(Self::Time),
            3 => Ok(Self::Fuel),
            _ => Err(RoutingError::InvalidCriterion(choice.to_string())),
        }
    }

    /// Parses a criterion name, case-insensitive.
    pub fn parse(name: &str) -> Result<Self, RoutingError> {
        name.trim()
            .parse()
            .map_err(|_| RoutingError::InvalidCriterion(name.to_owned()))
    }

    /// Parses a criterion name and falls back to [`Criterion::Distance`] when the name is not
    /// recognized. Prefer [`Criterion::parse`], this only exists for callers that depend on the
    /// fallback.
    pub fn parse_lenient(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|_| {
            warn!("Unknown criterion {name:?}, falling back to {}", Self::Distance);
            Self::Distance
        })
    }
}

/// Gets the weight of the route along the given dimension.
pub fn weight_of(route: &Route, criterion: Criterion) -> f64 {
    let RouteWeights {
        distance,
        time,
        fuel,
    } = route.weights;

    match criterion {
        Criterion::Distance => distance.km() as f64,
        Criterion::Time => time.minutes() as f64,
        Criterion::Fuel => fuel.liters(),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_log::test;

    use super::*;

    const ROUTE: Route = Route {
        destination: CityId(1),
        weights: RouteWeights::new(150, 180, 12.5),
    };

    #[test]
    fn weight_of_001() {
        assert_eq!(weight_of(&ROUTE, Criterion::Distance), 150.0);
        assert_eq!(weight_of(&ROUTE, Criterion::Time), 180.0);
        assert_eq!(weight_of(&ROUTE, Criterion::Fuel), 12.5);
        assert_eq!(ROUTE.weight(Criterion::Time), 180.0);
    }

    #[test]
    fn criterion_parse_001() {
        assert_eq!(Criterion::parse("distance").unwrap(), Criterion::Distance);
        assert_eq!(Criterion::parse("TIME").unwrap(), Criterion::Time);
        assert_eq!(Criterion::parse(" Fuel ").unwrap(), Criterion::Fuel);

        assert_eq!(
            Criterion::parse("speed"),
            Err(RoutingError::InvalidCriterion("speed".into()))
        );
        assert_eq!(
            Criterion::parse(""),
            Err(RoutingError::InvalidCriterion("".into()))
        );
    }

    #[test]
    fn criterion_parse_lenient_001() {
        assert_eq!(Criterion::parse_lenient("time"), Criterion::Time);
        assert_eq!(Criterion::parse_lenient("tiem"), Criterion::Distance);
        assert_eq!(Criterion::parse_lenient(""), Criterion::Distance);
    }

    #[test]
    fn criterion_from_choice_001() {
        assert_eq!(Criterion::from_choice(1).unwrap(), Criterion::Distance);
        assert_eq!(Criterion::from_choice(2).unwrap(), Criterion::Time);
        assert_eq!(Criterion::from_choice(3).unwrap(), Criterion::Fuel);
        assert_eq!(
            Criterion::from_choice(4),
            Err(RoutingError::InvalidCriterion("4".into()))
        );
        assert!(Criterion::from_choice(0).is_err());
    }

    #[test]
    fn criterion_display_001() {
        let names: Vec<_> = Criterion::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["distance", "time", "fuel"]);

        for criterion in Criterion::iter() {
            assert_eq!(Criterion::parse(criterion.as_ref()).unwrap(), criterion);
        }
    }

    #[test]
    fn minutes_hours_001() {
        let time = Minutes::from_minutes(960);
        assert_eq!(time.hours(), 16);
        assert_eq!(time.minutes_of_hour(), 0);

        let time = Minutes::from_minutes(1050);
        assert_eq!(time.hours(), 17);
        assert_eq!(time.minutes_of_hour(), 30);

        assert_eq!(Minutes::ZERO.hours(), 0);
        assert_eq!(Minutes::from_minutes(59).minutes_of_hour(), 59);
    }

    #[test]
    fn liters_001() {
        let total: Liters = [12.5, 25.0, 29.2].map(Liters::from_liters).into_iter().sum();
        assert_eq!(total, Liters::from_liters(66.7));
        assert!(total.is_valid());

        assert!(Liters::ZERO.is_valid());
        assert!(!Liters::from_liters(-0.1).is_valid());
        assert!(!Liters::from_liters(f64::NAN).is_valid());
        assert!(!Liters::from_liters(f64::INFINITY).is_valid());
    }

    #[test]
    fn kilometers_sum_001() {
        let total: Kilometers = [150, 300, 350].map(Kilometers::from_km).into_iter().sum();
        assert_eq!(total, Kilometers::from_km(800));

        let mut distance = Kilometers::ZERO;
        distance += Kilometers::from_km(7);
        assert_eq!(distance.km(), 7);
    }

    #[test]
    fn kilometers_sum_002() {
        let total: Kilometers = [u32::MAX; 3]
            .map(|km| RouteWeights::new(km, 0, 0.0).distance)
            .into_iter()
            .sum();
        assert_eq!(total.km(), 3 * u64::from(u32::MAX));

        let mut time = Minutes::from_minutes(u64::MAX - 1);
        time += Minutes::from_minutes(5);
        assert_eq!(time, Minutes::from_minutes(u64::MAX));
    }
}
