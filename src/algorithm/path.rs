use log::warn;
use std::collections::{BTreeMap, HashSet};

use crate::connection::TOKEN_SEPARATOR;

/// Walks the predecessor chain back from `destination` to `source`.
///
/// Returns `None` when the chain breaks or loops before reaching the source,
/// which is the case for any destination that was not reached.
pub fn reconstruct_path(
    source: &str,
    destination: &str,
    predecessors: &BTreeMap<String, String>,
) -> Option<Vec<String>> {
    if source == destination {
        return Some(vec![source.to_string()]);
    }

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = destination;

    // Build path in reverse order
    while current != source {
        if !visited.insert(current) {
            warn!("Cycle detected in path reconstruction at {}", current);
            return None;
        }
        path.push(current.to_string());
        current = predecessors.get(current)?.as_str();
    }

    path.push(source.to_string());
    path.reverse();
    Some(path)
}

/// Consecutive `from-to` pairs of a path joined by `,+`.
///
/// Direction is preserved. A path with fewer than two airports yields an empty string.
pub fn path_to_token_string<S: AsRef<str>>(path: &[S]) -> String {
    path.windows(2)
        .map(|pair| format!("{}-{}", pair[0].as_ref(), pair[1].as_ref()))
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}
