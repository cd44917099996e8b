//! Boundary between raw route data and the network engine.
//!
//! Route files follow the map data layout:
//!
//! ```json
//! { "routes": [ { "ports": ["SCL", "LIM"], "distance": 2453 } ] }
//! ```
//!
//! Other top-level keys (metros, data sources) are ignored. Every record is
//! validated here; the engine itself trusts its inputs.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::EngineConfig;
use crate::graph::NetworkGraph;
use crate::{Error, Result};

/// One bidirectional connection between two airports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub ports: [String; 2],
    pub distance: f64,
}

impl RouteRecord {
    pub fn new(first: &str, second: &str, distance: f64) -> Self {
        RouteRecord {
            ports: [first.to_string(), second.to_string()],
            distance,
        }
    }

    /// Rejects empty codes and distances that are negative, NaN or infinite
    pub fn validate(&self) -> Result<()> {
        let [first, second] = &self.ports;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "empty airport code in {:?}",
                self.ports
            )));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(Error::InvalidDistance {
                from: first.clone(),
                to: second.clone(),
                distance: self.distance,
            });
        }
        Ok(())
    }
}

impl From<(&str, &str, f64)> for RouteRecord {
    fn from((first, second, distance): (&str, &str, f64)) -> Self {
        RouteRecord::new(first, second, distance)
    }
}

/// Top-level route file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

impl NetworkGraph {
    /// Builds a network from route records, adding each as a connection in both directions
    pub fn from_routes<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<RouteRecord>,
    {
        Self::from_routes_with_config(routes, EngineConfig::default())
    }

    pub fn from_routes_with_config<I>(routes: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<RouteRecord>,
    {
        let mut graph = NetworkGraph::with_config(config);
        graph.extend_routes(routes)?;
        Ok(graph)
    }

    /// Adds every record as a connection. Stops at the first invalid record,
    /// keeping the records before it.
    pub fn extend_routes<I>(&mut self, routes: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<RouteRecord>,
    {
        let mut added = 0;
        for record in routes {
            let record = record.into();
            record.validate()?;
            let [first, second] = &record.ports;
            self.add_connection(first, second, record.distance);
            added += 1;
        }
        debug!("Loaded {} route records", added);
        Ok(added)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RouteDocument = serde_json::from_str(json)?;
        Self::from_routes(document.routes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: RouteDocument = serde_json::from_reader(reader)?;
        Self::from_routes(document.routes)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading routes from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
