//! Symbol names for raw identifiers.

use std::collections::BTreeMap;

/// Convert a raw identifier into a binding name.
///
/// Uppercases every character and replaces `-` with `_`. Nothing else is
/// touched, so the result is only a valid binding name when the identifier
/// already was one apart from its hyphens.
pub fn symbol_name(identifier: &str) -> String {
    identifier.to_uppercase().replace('-', "_")
}

/// A symbol produced by more than one identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub symbol: String,
    /// Every raw identifier mapping to `symbol`, in input order.
    pub identifiers: Vec<String>,
}

/// Find symbols that more than one identifier maps to.
///
/// Repeated identical identifiers count as a collision too, since they would
/// produce a duplicate binding.
pub fn find_collisions(identifiers: &[String]) -> Vec<Collision> {
    let mut by_symbol: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for identifier in identifiers {
        by_symbol
            .entry(symbol_name(identifier))
            .or_default()
            .push(identifier.clone());
    }

    by_symbol
        .into_iter()
        .filter(|(_, identifiers)| identifiers.len() > 1)
        .map(|(symbol, identifiers)| Collision {
            symbol,
            identifiers,
        })
        .collect()
}
