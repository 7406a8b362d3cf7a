use crate::error::ConfigurationError;
use std::collections::HashMap;

/// Read-only view over the flat parameter namespace of one search request.
///
/// A name maps to one or more string values and lookups are by exact key.
/// The namespace is populated once when the request arrives and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    values: HashMap<String, Vec<String>>,
}

impl SearchParams {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values bound to `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns the first value bound to `name`, or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Returns the first value bound to `name`, failing loudly when absent.
    pub fn require(&self, name: &str) -> Result<&str, ConfigurationError> {
        self.get(name)
            .ok_or_else(|| ConfigurationError::MissingParameter {
                name: name.to_owned(),
            })
    }

    /// Position-aware lookup for indexed facet queries.
    ///
    /// With `index > 0`, a value bound to `name.<index>` takes precedence
    /// over the family-wide `name`. With `index == 0` (the anonymous query)
    /// only the unsuffixed key is consulted.
    #[must_use]
    pub fn get_indexed(&self, name: &str, index: usize) -> Option<&str> {
        if index > 0 {
            if let Some(value) = self.get(&format!("{name}.{index}")) {
                return Some(value);
            }
        }
        self.get(name)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for SearchParams {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in iter {
            values.entry(name.into()).or_default().push(value.into());
        }
        Self { values }
    }
}
