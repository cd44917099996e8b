use serde::Serialize;

/// A single directed flight, used to report the network extremes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub distance: f64,
    /// `[origin, destination]`
    pub ports: [String; 2],
}

impl Flight {
    pub fn new(from: &str, to: &str, distance: f64) -> Self {
        Flight {
            distance,
            ports: [from.to_string(), to.to_string()],
        }
    }

    pub fn involves(&self, node: &str) -> bool {
        self.ports.iter().any(|port| port == node)
    }

    /// Ports in code order, convenient when direction does not matter
    pub fn sorted_ports(&self) -> [String; 2] {
        let mut ports = self.ports.clone();
        ports.sort();
        ports
    }
}

/// Aggregates over every directed route stored in the network.
///
/// A bidirectional connection contributes twice: once per direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkStatistics {
    pub total_distance: f64,
    pub route_count: usize,
    pub shortest_flight: Option<Flight>,
    pub longest_flight: Option<Flight>,
}

impl NetworkStatistics {
    /// Folds a newly stored route into the running totals and extremes
    pub(crate) fn record_route(&mut self, from: &str, to: &str, distance: f64) {
        self.total_distance += distance;
        self.route_count += 1;
        self.offer_extreme(from, to, distance);
    }

    pub(crate) fn forget_route(&mut self, distance: f64) {
        self.total_distance -= distance;
        self.route_count = self.route_count.saturating_sub(1);
        if self.route_count == 0 {
            // an empty network totals exactly zero
            self.total_distance = 0.0;
        }
    }

    /// Replaces either extreme when `distance` is strictly more extreme
    pub(crate) fn offer_extreme(&mut self, from: &str, to: &str, distance: f64) {
        match &self.shortest_flight {
            Some(flight) if flight.distance <= distance => {}
            _ => self.shortest_flight = Some(Flight::new(from, to, distance)),
        }
        match &self.longest_flight {
            Some(flight) if flight.distance >= distance => {}
            _ => self.longest_flight = Some(Flight::new(from, to, distance)),
        }
    }

    pub(crate) fn clear_extremes(&mut self) {
        self.shortest_flight = None;
        self.longest_flight = None;
    }

    /// True when `node` is an endpoint of the shortest or the longest flight
    pub(crate) fn touches_extreme(&self, node: &str) -> bool {
        let involves = |flight: &Option<Flight>| flight.as_ref().is_some_and(|f| f.involves(node));
        involves(&self.shortest_flight) || involves(&self.longest_flight)
    }

    pub fn average_distance(&self) -> Option<f64> {
        if self.route_count == 0 {
            None
        } else {
            Some(self.total_distance / self.route_count as f64)
        }
    }
}
