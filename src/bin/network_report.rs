use flight_network::{path_to_token_string, Error, Flight, NetworkGraph};
use std::env;
use std::process;

/// Command line configuration: `network_report <routes.json> [source destination]`
#[derive(Debug, Clone)]
struct ReportConfig {
    routes_path: String,
    journey: Option<(String, String)>,
}

impl ReportConfig {
    fn from_args(args: &[String]) -> Option<Self> {
        let routes_path = args.get(1)?.clone();
        let journey = match (args.get(2), args.get(3)) {
            (Some(source), Some(destination)) => Some((source.clone(), destination.clone())),
            _ => None,
        };
        Some(ReportConfig {
            routes_path,
            journey,
        })
    }
}

fn describe(flight: Option<&Flight>) -> String {
    match flight {
        Some(flight) => format!(
            "{} - {}: {}",
            flight.ports[0], flight.ports[1], flight.distance
        ),
        None => "none".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(config) = ReportConfig::from_args(&args) else {
        eprintln!("usage: network_report <routes.json> [source destination]");
        process::exit(2);
    };

    let graph = NetworkGraph::from_path(&config.routes_path)?;

    println!("Airports: {}", graph.node_count());
    println!("Flights: {}", graph.route_count());
    println!("Total distance: {}", graph.total_distance());
    match graph.average_distance() {
        Ok(average) => println!("Average flight distance: {:.0}", average),
        Err(err) => println!("Average flight distance: {}", err),
    }
    println!("Shortest flight: {}", describe(graph.shortest_flight()));
    println!("Longest flight: {}", describe(graph.longest_flight()));
    println!("Connections: {}", graph.connection_url_string());

    if let Some((source, destination)) = &config.journey {
        if !graph.has_node(destination) {
            return Err(Error::UnknownNode(destination.clone()).into());
        }
        let result = graph.shortest_paths_from(source)?;
        let path = result.path_to(destination).ok_or_else(|| Error::NoPath {
            from: source.clone(),
            to: destination.clone(),
        })?;
        println!();
        println!("Shortest path: {}", path.join(" -> "));
        println!("Distance: {}", result.distance_to(destination));
        println!("Path URL: {}", path_to_token_string(&path));
    }

    Ok(())
}
