use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Distance between two airports, or the absence of any route between them.
///
/// `Unreachable` orders after every finite distance, so the minimum of a set of
/// distances is always a real route when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    Finite(OrderedFloat<f64>),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(OrderedFloat(0.0));

    pub fn finite(value: f64) -> Self {
        Distance::Finite(OrderedFloat(value))
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(d.into_inner()),
            Distance::Unreachable => None,
        }
    }

    /// Converts to the float convention where a missing route is `f64::INFINITY`
    pub fn to_legacy_f64(&self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        if value.is_infinite() && value > 0.0 {
            Distance::Unreachable
        } else {
            Distance::finite(value)
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Saturating: anything plus `Unreachable` stays unreachable
impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
            _ => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Answer to a direct route lookup between two airports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteQuery {
    /// At least one of the airports is not part of the network
    UnknownNode,
    Distance(Distance),
}

impl RouteQuery {
    pub fn distance(&self) -> Option<Distance> {
        match self {
            RouteQuery::UnknownNode => None,
            RouteQuery::Distance(d) => Some(*d),
        }
    }

    /// `-1` for an unknown airport, `f64::INFINITY` for no route, otherwise the distance
    pub fn to_legacy_f64(&self) -> f64 {
        match self {
            RouteQuery::UnknownNode => -1.0,
            RouteQuery::Distance(d) => d.to_legacy_f64(),
        }
    }
}
