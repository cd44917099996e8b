use log::debug;
use std::collections::BTreeMap;

use crate::algorithm::{
    dijkstra::Dijkstra, path::path_to_token_string, ShortestPathAlgorithm, ShortestPathResult,
    ShortestPathTable,
};
use crate::config::EngineConfig;
use crate::connection::{canonical_token, ConnectionIndex};
use crate::distance::{Distance, RouteQuery};
use crate::graph::statistics::{Flight, NetworkStatistics};
use crate::graph::traits::Adjacency;
use crate::{Error, Result};

type RouteRow = BTreeMap<String, f64>;

/// A flight network: airports keyed by code, directed routes weighted by distance.
///
/// Only routes that exist are stored. Every query answers `Unreachable` for an
/// existing pair of airports without a route, and `RouteQuery::UnknownNode` when
/// either airport is missing.
///
/// Statistics and connection tokens are updated in lock-step with every route mutation.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    /// origin -> (destination -> distance)
    routes: BTreeMap<String, RouteRow>,
    connections: ConnectionIndex,
    statistics: NetworkStatistics,
    config: EngineConfig,
}

impl NetworkGraph {
    /// Creates a new empty network
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        NetworkGraph {
            routes: BTreeMap::new(),
            connections: ConnectionIndex::new(),
            statistics: NetworkStatistics::default(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adds an airport without routes. Does nothing if it already exists.
    pub fn add_node(&mut self, code: &str) {
        if !self.routes.contains_key(code) {
            debug!("Adding airport {}", code);
            self.routes.insert(code.to_string(), RouteRow::new());
        }
    }

    /// Adds a one-way route, creating both airports if necessary.
    ///
    /// Every call is counted as a new flight in the statistics, even when it
    /// overwrites an existing route in the same direction.
    pub fn add_route(&mut self, from: &str, to: &str, distance: f64) {
        self.add_node(from);
        self.add_node(to);

        let previous = self
            .routes
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), distance);
        self.connections.add_connection(from, to);
        self.statistics.record_route(from, to, distance);

        // The overwritten value may still be reported as an extreme
        if previous.is_some_and(|old| old != distance) && self.statistics.touches_extreme(from) {
            self.recalculate_extremes();
        }
    }

    /// Adds a route in both directions. Statistics count two flights.
    pub fn add_connection(&mut self, first: &str, second: &str, distance: f64) {
        self.add_route(first, second, distance);
        self.add_route(second, first, distance);
    }

    /// Gets the one-way distance between two airports.
    ///
    /// * equal airports: `0`
    /// * an airport is missing: `RouteQuery::UnknownNode`
    /// * no route between them: `Distance::Unreachable`
    pub fn get_route(&self, from: &str, to: &str) -> RouteQuery {
        if !self.has_node(from) || !self.has_node(to) {
            RouteQuery::UnknownNode
        } else if from == to {
            RouteQuery::Distance(Distance::ZERO)
        } else {
            RouteQuery::Distance(self.stored_route(from, to))
        }
    }

    /// Gets every route leaving an airport, or `None` if the airport is unknown
    pub fn get_closest(&self, code: &str) -> Option<AdjacencyRow<'_>> {
        let (node, routes) = self.routes.get_key_value(code)?;
        Some(AdjacencyRow {
            node,
            routes,
            network: &self.routes,
        })
    }

    /// Removes a one-way route. Returns false if there was no such route.
    pub fn delete_route(&mut self, from: &str, to: &str) -> bool {
        let removed = self.routes.get_mut(from).and_then(|row| row.remove(to));
        let Some(distance) = removed else {
            return false;
        };

        debug!("Deleting route {}-{} ({})", from, to, distance);
        self.statistics.forget_route(distance);
        if !self.connection_still_routed(from, to) {
            self.connections.remove_connection(from, to);
        }
        // Any extreme on this route has `from` as an endpoint
        if self.statistics.touches_extreme(from) {
            self.recalculate_extremes();
        }
        true
    }

    /// Removes the routes in both directions. Returns true if any route was removed.
    pub fn delete_connection(&mut self, first: &str, second: &str) -> bool {
        let forward = self.delete_route(first, second);
        let backward = self.delete_route(second, first);
        forward || backward
    }

    /// Removes an airport and every route leaving or reaching it
    pub fn delete_node(&mut self, code: &str) -> bool {
        let Some(row) = self.routes.get(code) else {
            return false;
        };
        debug!("Deleting airport {}", code);

        let destinations: Vec<String> = row.keys().cloned().collect();
        for destination in destinations {
            self.delete_route(code, &destination);
        }

        let origins: Vec<String> = self
            .routes
            .iter()
            .filter(|(_, row)| row.contains_key(code))
            .map(|(origin, _)| origin.clone())
            .collect();
        for origin in origins {
            self.delete_route(&origin, code);
        }

        self.routes.remove(code);
        if self.statistics.touches_extreme(code) {
            self.recalculate_extremes();
        }
        true
    }

    pub fn has_node(&self, code: &str) -> bool {
        self.routes.contains_key(code)
    }

    pub fn node_count(&self) -> usize {
        self.routes.len()
    }

    /// Airport codes in code order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    pub fn has_route(&self, from: &str, to: &str) -> bool {
        self.stored_route(from, to).is_finite()
    }

    /// Iterates over every stored route as `(origin, destination, distance)`
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.routes.iter().flat_map(|(from, row)| {
            row.iter()
                .map(move |(to, distance)| (from.as_str(), to.as_str(), *distance))
        })
    }

    /// Average distance per flight, or `Error::EmptyNetwork` when there are no routes
    pub fn average_distance(&self) -> Result<f64> {
        self.statistics
            .average_distance()
            .ok_or(Error::EmptyNetwork)
    }

    /// The shortest stored flight, `None` for a network without routes
    pub fn shortest_flight(&self) -> Option<&Flight> {
        self.statistics.shortest_flight.as_ref()
    }

    /// The longest stored flight, `None` for a network without routes
    pub fn longest_flight(&self) -> Option<&Flight> {
        self.statistics.longest_flight.as_ref()
    }

    pub fn total_distance(&self) -> f64 {
        self.statistics.total_distance
    }

    pub fn route_count(&self) -> usize {
        self.statistics.route_count
    }

    pub fn statistics(&self) -> &NetworkStatistics {
        &self.statistics
    }

    pub fn connections(&self) -> &ConnectionIndex {
        &self.connections
    }

    /// Number of distinct undirected connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Largest number of routes leaving a single airport, 0 without routes
    pub fn most_connections(&self) -> usize {
        self.routes.values().map(RouteRow::len).max().unwrap_or(0)
    }

    /// Airports with `most_connections()` outgoing routes, in code order.
    /// Empty when the network has no routes.
    pub fn hub_airports(&self) -> Vec<&str> {
        let most = self.most_connections();
        if most == 0 {
            return Vec::new();
        }
        self.routes
            .iter()
            .filter(|(_, row)| row.len() == most)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Every connection as `A-B` tokens joined by `,+`, for a route map URL
    pub fn connection_url_string(&self) -> String {
        self.connections.render()
    }

    /// Runs Dijkstra from `source` with the configured frontier
    pub fn shortest_paths_from(&self, source: &str) -> Result<ShortestPathResult> {
        self.algorithm().compute_shortest_paths(self, source)
    }

    /// Airports on a shortest path, both ends included
    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<Vec<String>> {
        if !self.has_node(destination) {
            return Err(Error::UnknownNode(destination.to_string()));
        }
        let result = self.shortest_paths_from(source)?;
        result.path_to(destination).ok_or_else(|| Error::NoPath {
            from: source.to_string(),
            to: destination.to_string(),
        })
    }

    /// A shortest path as directed `from-to` tokens joined by `,+`
    pub fn shortest_path_url(&self, source: &str, destination: &str) -> Result<String> {
        let path = self.shortest_path(source, destination)?;
        Ok(path_to_token_string(&path))
    }

    /// Runs Dijkstra from every airport
    pub fn evaluate_all_shortest_paths(&self) -> Result<ShortestPathTable> {
        ShortestPathTable::evaluate(self, &self.algorithm())
    }

    fn algorithm(&self) -> Dijkstra {
        Dijkstra::with_frontier(self.config.frontier)
    }

    fn stored_route(&self, from: &str, to: &str) -> Distance {
        self.routes
            .get(from)
            .and_then(|row| row.get(to))
            .map_or(Distance::Unreachable, |d| Distance::finite(*d))
    }

    /// True while some stored route still maps to the token of `from`-`to`.
    /// Codes differing only in case share a token, so the reverse route is not enough.
    fn connection_still_routed(&self, from: &str, to: &str) -> bool {
        let token = canonical_token(from, to);
        let ends = [from.to_uppercase(), to.to_uppercase()];
        self.routes
            .iter()
            .filter(|(origin, _)| ends.contains(&origin.to_uppercase()))
            .flat_map(|(origin, row)| row.keys().map(move |destination| (origin, destination)))
            .any(|(origin, destination)| {
                origin != destination && canonical_token(origin, destination) == token
            })
    }

    /// Full rescan of the stored routes for both extremes
    fn recalculate_extremes(&mut self) {
        self.statistics.clear_extremes();
        for (from, row) in &self.routes {
            for (to, distance) in row {
                self.statistics.offer_extreme(from, to, *distance);
            }
        }
        debug!(
            "Recalculated extremes: shortest {:?}, longest {:?}",
            self.statistics.shortest_flight, self.statistics.longest_flight
        );
    }
}

impl Adjacency for NetworkGraph {
    fn node_count(&self) -> usize {
        NetworkGraph::node_count(self)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(NetworkGraph::nodes(self))
    }

    fn has_node(&self, node: &str) -> bool {
        NetworkGraph::has_node(self, node)
    }

    fn outgoing(&self, node: &str) -> Box<dyn Iterator<Item = (&str, f64)> + '_> {
        match self.routes.get(node) {
            Some(row) => Box::new(row.iter().map(|(to, d)| (to.as_str(), *d))),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Routes leaving one airport.
///
/// Lookups answer for every airport in the network: `Unreachable` when there
/// is no direct route, `UnknownNode` for codes outside the network.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyRow<'a> {
    node: &'a str,
    routes: &'a RouteRow,
    network: &'a BTreeMap<String, RouteRow>,
}

impl<'a> AdjacencyRow<'a> {
    pub fn origin(&self) -> &'a str {
        self.node
    }

    pub fn get(&self, destination: &str) -> RouteQuery {
        if !self.network.contains_key(destination) {
            RouteQuery::UnknownNode
        } else if destination == self.node {
            RouteQuery::Distance(Distance::ZERO)
        } else {
            RouteQuery::Distance(
                self.routes
                    .get(destination)
                    .map_or(Distance::Unreachable, |d| Distance::finite(*d)),
            )
        }
    }

    /// Direct routes only
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.routes.iter().map(|(to, d)| (to.as_str(), *d))
    }

    /// Every other airport with its direct distance, `Unreachable` where no route exists
    pub fn full_row(&self) -> impl Iterator<Item = (&'a str, Distance)> + 'a {
        let node = self.node;
        let routes = self.routes;
        self.network
            .keys()
            .filter(move |other| other.as_str() != node)
            .map(move |other| {
                let distance = routes
                    .get(other)
                    .map_or(Distance::Unreachable, |d| Distance::finite(*d));
                (other.as_str(), distance)
            })
    }

    /// Nearest directly connected airport
    pub fn closest(&self) -> Option<(&'a str, f64)> {
        self.iter()
            .filter(|(to, _)| *to != self.node)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
