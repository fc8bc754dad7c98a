// SPDX-License-Identifier: MPL-2.0
//! The animal record as exposed by the adoption API.
//!
//! Wire field names are the API's Spanish names; the serde renames keep the
//! Rust side readable without breaking the JSON contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier assigned to an animal by the API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AnimalId(u32);

impl AnimalId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A listed pet record with adoption metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Species tag; one of the configured species values (open taxonomy).
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "edad")]
    pub age: u32,
    /// Short description shown on the card.
    #[serde(rename = "descripcion")]
    pub summary: String,
    /// Long detail text shown in the details dialog.
    #[serde(rename = "detalle")]
    pub detail: String,
    /// Photo filename, resolved against the configured image directory.
    #[serde(rename = "foto")]
    pub photo: String,
}

/// Payload for creating a listing; the API assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimal {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "descripcion")]
    pub summary: String,
    #[serde(rename = "detalle")]
    pub detail: String,
    #[serde(rename = "foto")]
    pub photo: String,
}

impl NewAnimal {
    /// Attaches an API-assigned identifier, producing a full record.
    #[must_use]
    pub fn with_id(self, id: AnimalId) -> Animal {
        Animal {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            summary: self.summary,
            detail: self.detail,
            photo: self.photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Animal {
        Animal {
            id: AnimalId::new(7),
            name: "Rex".to_string(),
            species: "Perro".to_string(),
            breed: "Labrador".to_string(),
            age: 3,
            summary: "Friendly and playful".to_string(),
            detail: "Rex gets along with children and other dogs.".to_string(),
            photo: "rex.png".to_string(),
        }
    }

    #[test]
    fn serializes_with_spanish_wire_names() {
        let animal = sample();
        let json = serde_json::to_value(&animal).expect("serialize animal");

        assert_eq!(json["id"], 7);
        assert_eq!(json["nombre"], "Rex");
        assert_eq!(json["tipo"], "Perro");
        assert_eq!(json["raza"], "Labrador");
        assert_eq!(json["edad"], 3);
        assert_eq!(json["descripcion"], "Friendly and playful");
        assert!(json["detalle"].as_str().is_some());
        assert_eq!(json["foto"], "rex.png");
    }

    #[test]
    fn deserializes_from_api_payload() {
        let payload = r#"{
            "id": 12,
            "nombre": "Mimi",
            "tipo": "Gato",
            "raza": "Siamese",
            "edad": 2,
            "descripcion": "Quiet",
            "detalle": "Prefers calm homes.",
            "foto": "mimi.jpg"
        }"#;

        let animal: Animal = serde_json::from_str(payload).expect("deserialize animal");
        assert_eq!(animal.id, AnimalId::new(12));
        assert_eq!(animal.name, "Mimi");
        assert_eq!(animal.species, "Gato");
        assert_eq!(animal.age, 2);
    }

    #[test]
    fn new_animal_with_id_preserves_fields() {
        let animal = sample();
        let draft = NewAnimal {
            name: animal.name.clone(),
            species: animal.species.clone(),
            breed: animal.breed.clone(),
            age: animal.age,
            summary: animal.summary.clone(),
            detail: animal.detail.clone(),
            photo: animal.photo.clone(),
        };

        assert_eq!(draft.with_id(AnimalId::new(7)), animal);
    }

    #[test]
    fn animal_id_displays_raw_value() {
        assert_eq!(AnimalId::new(42).to_string(), "42");
    }
}
