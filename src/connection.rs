use std::collections::BTreeSet;

/// Separator between tokens in a route map URL
pub const TOKEN_SEPARATOR: &str = ",+";

/// Set of undirected connections between airports, kept as canonical `"A-B"` tokens.
///
/// A token orders its two codes case-insensitively and upper-cases both, so
/// `("lim", "SCL")` and `("SCL", "LIM")` share the token `LIM-SCL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionIndex {
    tokens: BTreeSet<String>,
}

impl ConnectionIndex {
    pub fn new() -> Self {
        ConnectionIndex {
            tokens: BTreeSet::new(),
        }
    }

    /// Registers the connection between `first` and `second`. Self-connections are ignored.
    pub fn add_connection(&mut self, first: &str, second: &str) {
        if first != second {
            self.tokens.insert(canonical_token(first, second));
        }
    }

    pub fn remove_connection(&mut self, first: &str, second: &str) {
        self.tokens.remove(&canonical_token(first, second));
    }

    pub fn contains(&self, first: &str, second: &str) -> bool {
        self.tokens.contains(&canonical_token(first, second))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Renders every token in sorted order joined by `,+`, e.g. `LIM-SCL,+MEX-SCL`
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(TOKEN_SEPARATOR)
    }
}

/// Canonical token for an undirected connection
pub fn canonical_token(first: &str, second: &str) -> String {
    let (low, high) = if first.to_lowercase() < second.to_lowercase() {
        (first, second)
    } else {
        (second, first)
    };
    format!("{}-{}", low.to_uppercase(), high.to_uppercase())
}
