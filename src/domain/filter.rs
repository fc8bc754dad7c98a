// SPDX-License-Identifier: MPL-2.0
//! Case-insensitive catalog search.

use super::Animal;

/// Keeps the animals whose name or breed contains `term`, ignoring case.
///
/// An empty term matches everything. Original order is preserved.
#[must_use]
pub fn apply(animals: Vec<Animal>, term: &str) -> Vec<Animal> {
    if term.is_empty() {
        return animals;
    }

    let needle = term.to_lowercase();
    animals
        .into_iter()
        .filter(|animal| {
            animal.name.to_lowercase().contains(&needle)
                || animal.breed.to_lowercase().contains(&needle)
        })
        .collect()
}
