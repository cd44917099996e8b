use std::fmt::Debug;

/// Read-only view of a weighted directed network keyed by airport code
pub trait Adjacency: Debug {
    /// Returns the number of airports in the network
    fn node_count(&self) -> usize;

    /// Returns an iterator over every airport code, in code order
    fn nodes(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns true if the airport exists in the network
    fn has_node(&self, node: &str) -> bool;

    /// Returns an iterator over the stored outgoing routes from an airport.
    /// Unknown airports have no outgoing routes.
    fn outgoing(&self, node: &str) -> Box<dyn Iterator<Item = (&str, f64)> + '_>;
}
