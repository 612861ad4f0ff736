//! Vaccination location records as published by the search backend

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Kind of vaccination location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationType {
    VaccinationCenter,
    Drugstore,
    GeneralPractitioner,
    Other(String),
}

impl LocationType {
    /// Label shown in the "Lieux" metadata row
    pub fn label(&self) -> &str {
        match self {
            LocationType::VaccinationCenter => "Centre de vaccination",
            LocationType::Drugstore => "Pharmacie",
            LocationType::GeneralPractitioner => "Médecin généraliste",
            LocationType::Other(tag) => tag,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            LocationType::VaccinationCenter => "vaccination-center",
            LocationType::Drugstore => "drugstore",
            LocationType::GeneralPractitioner => "general-practitioner",
            LocationType::Other(tag) => tag,
        }
    }
}

impl From<String> for LocationType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "vaccination-center" => LocationType::VaccinationCenter,
            "drugstore" => LocationType::Drugstore,
            "general-practitioner" => LocationType::GeneralPractitioner,
            _ => LocationType::Other(tag),
        }
    }
}

impl From<LocationType> for String {
    fn from(location_type: LocationType) -> Self {
        location_type.tag().to_string()
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact and address details of a location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationMetadata {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<serde_json::Value>,
}

/// A vaccination location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub internal_id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "plateforme", default)]
    pub platform: String,
    #[serde(rename = "prochain_rdv", default, skip_serializing_if = "Option::is_none")]
    pub next_appointment: Option<String>,
    #[serde(default)]
    pub appointment_count: u32,
    #[serde(default)]
    pub appointment_by_phone_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccine_type: Option<String>,
    #[serde(default)]
    pub metadata: LocationMetadata,
}

impl Location {
    /// Phone number, ignoring empty strings
    pub fn phone_number(&self) -> Option<&str> {
        self.metadata
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }

    pub fn vaccine_type(&self) -> Option<&str> {
        self.vaccine_type.as_deref().filter(|v| !v.is_empty())
    }

    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// A location annotated with its distance from the searched place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationWithDistance {
    #[serde(flatten)]
    pub location: Location,
    /// Distance in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Record exactly as the host sent it
    #[serde(skip)]
    record: Option<serde_json::Value>,
}

impl LocationWithDistance {
    pub fn from_json(json: &str) -> Result<Self> {
        let record: serde_json::Value = serde_json::from_str(json).map_err(Error::InvalidLocation)?;
        Self::from_record(record)
    }

    /// Parse a host record, keeping it verbatim for the click events
    pub fn from_record(record: serde_json::Value) -> Result<Self> {
        let mut lieu = Self::deserialize(&record).map_err(Error::InvalidLocation)?;
        lieu.record = Some(record);
        Ok(lieu)
    }

    /// The host's record, or a serialization of the parsed fields when the
    /// location was not built from one
    pub fn to_record(&self) -> serde_json::Result<serde_json::Value> {
        match &self.record {
            Some(record) => Ok(record.clone()),
            None => serde_json::to_value(self),
        }
    }
}

/// Detail payload of the card's click events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationClickContext {
    #[serde(rename = "lieu")]
    pub location: serde_json::Value,
}

impl LocationClickContext {
    pub fn new(lieu: &LocationWithDistance) -> serde_json::Result<Self> {
        Ok(Self { location: lieu.to_record()? })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_location() -> LocationWithDistance {
        LocationWithDistance::from_json(
            r#"{
                "internal_id": "doctolib123",
                "nom": "Centre de vaccination de Lyon 7e",
                "type": "vaccination-center",
                "url": "https://partners.doctolib.fr/centre-lyon-7",
                "plateforme": "Doctolib",
                "prochain_rdv": "2021-04-12T14:30:00+02:00",
                "appointment_count": 42,
                "vaccine_type": "Pfizer-BioNTech",
                "metadata": {
                    "address": "12 Rue de Gerland, 69007 Lyon",
                    "phone_number": "+33478000000"
                },
                "distance": 4.5
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_location_deserialization() {
        let lieu = sample_location();
        assert_eq!(lieu.location.name, "Centre de vaccination de Lyon 7e");
        assert_eq!(lieu.location.location_type, LocationType::VaccinationCenter);
        assert_eq!(lieu.location.platform, "Doctolib");
        assert_eq!(lieu.location.appointment_count, 42);
        assert!(!lieu.location.appointment_by_phone_only);
        assert_eq!(lieu.location.phone_number(), Some("+33478000000"));
        assert_eq!(lieu.distance, Some(4.5));
    }

    #[test]
    fn test_optional_fields_default() {
        let lieu = LocationWithDistance::from_json(
            r#"{"nom": "Pharmacie du Centre", "type": "drugstore"}"#,
        )
        .unwrap();

        assert_eq!(lieu.distance, None);
        assert_eq!(lieu.location.next_appointment, None);
        assert_eq!(lieu.location.phone_number(), None);
        assert_eq!(lieu.location.vaccine_type(), None);
        assert!(!lieu.location.has_url());
        assert_eq!(lieu.location.location_type.label(), "Pharmacie");
    }

    #[test]
    fn test_blank_phone_number_is_absent() {
        let mut lieu = sample_location();
        lieu.location.metadata.phone_number = Some("  ".to_string());
        assert_eq!(lieu.location.phone_number(), None);
    }

    #[test]
    fn test_unknown_location_type_keeps_tag() {
        let lieu = LocationWithDistance::from_json(
            r#"{"nom": "Cabinet", "type": "mobile-unit"}"#,
        )
        .unwrap();

        assert_eq!(
            lieu.location.location_type,
            LocationType::Other("mobile-unit".to_string())
        );
        assert_eq!(lieu.location.location_type.label(), "mobile-unit");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = LocationWithDistance::from_json(r#"{"type": "drugstore"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidLocation(_)));
    }

    #[test]
    fn test_click_context_wire_format() {
        let context = LocationClickContext::new(&sample_location()).unwrap();
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["lieu"]["nom"], "Centre de vaccination de Lyon 7e");
        assert_eq!(json["lieu"]["plateforme"], "Doctolib");
        assert_eq!(json["lieu"]["distance"], 4.5);
    }

    #[test]
    fn test_click_context_keeps_host_record() {
        let input: serde_json::Value = serde_json::from_str(
            r#"{
                "nom": "C",
                "type": "drugstore",
                "url": "u",
                "departement": "69",
                "location": {"longitude": 4.84, "latitude": 45.73, "city": "Lyon"},
                "appointment_schedules": []
            }"#,
        )
        .unwrap();
        let lieu = LocationWithDistance::from_json(&input.to_string()).unwrap();

        let context = serde_json::to_value(LocationClickContext::new(&lieu).unwrap()).unwrap();
        assert_eq!(context["lieu"], input);
        assert!(context["lieu"].get("internal_id").is_none());
        assert!(context["lieu"].get("appointment_by_phone_only").is_none());
    }

    #[test]
    fn test_record_falls_back_to_parsed_fields() {
        let lieu: LocationWithDistance =
            serde_json::from_str(r#"{"nom": "Cabinet", "type": "drugstore"}"#).unwrap();
        let record = lieu.to_record().unwrap();
        assert_eq!(record["nom"], "Cabinet");
        assert_eq!(record["type"], "drugstore");
    }
}
