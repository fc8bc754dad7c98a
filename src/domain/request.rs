// SPDX-License-Identifier: MPL-2.0
//! Adoption inquiry payload.

use super::AnimalId;
use serde::Serialize;

/// A visitor's adoption inquiry for one animal.
///
/// Built from the adoption form, submitted to the API, then discarded; the
/// client keeps no copy. Contact fields are free text — the API owns any
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionRequest {
    #[serde(rename = "mascota_id")]
    pub animal_id: AnimalId,
    #[serde(rename = "nombre_solicitante")]
    pub requester_name: String,
    #[serde(rename = "correo_solicitante")]
    pub email: String,
    #[serde(rename = "telefono_solicitante")]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_spanish_wire_names() {
        let request = AdoptionRequest {
            animal_id: AnimalId::new(3),
            requester_name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
        };

        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(json["mascota_id"], 3);
        assert_eq!(json["nombre_solicitante"], "Ana");
        assert_eq!(json["correo_solicitante"], "ana@example.com");
        assert_eq!(json["telefono_solicitante"], "555-0100");
    }
}
