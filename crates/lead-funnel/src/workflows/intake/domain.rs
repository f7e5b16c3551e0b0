use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::labels;

/// Raw seller-lead payload as posted by the marketing site.
///
/// Every field is optional on the wire; required-field enforcement happens in
/// the validator so that missing data produces a validation error rather than
/// a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub address: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub property_type: Option<String>,
    pub selling_timeline: Option<String>,
    pub relationship: Option<String>,
    /// Honeypot. Hidden from humans; any content marks the submission as bot
    /// traffic.
    pub website: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub visitor_city: Option<String>,
    pub visitor_region: Option<String>,
    pub visitor_country: Option<String>,
    pub visitor_latitude: Option<String>,
    pub visitor_longitude: Option<String>,
}

impl LeadSubmission {
    pub fn honeypot_tripped(&self) -> bool {
        honeypot_tripped(&self.website)
    }
}

/// Raw contact-form payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Honeypot, same contract as on the lead form.
    pub website: Option<String>,
}

impl ContactSubmission {
    pub fn honeypot_tripped(&self) -> bool {
        honeypot_tripped(&self.website)
    }
}

fn honeypot_tripped(website: &Option<String>) -> bool {
    matches!(website, Some(value) if !value.is_empty())
}

/// A validated seller lead ready for the CRM handoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub address: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub property_type: String,
    pub selling_timeline: String,
    pub relationship: String,
    pub coordinates: Option<Coordinates>,
    pub visitor: VisitorGeo,
}

impl Lead {
    /// Address string forwarded to the CRM, suffixed with the map-selected
    /// coordinates when both are known.
    pub fn annotated_address(&self) -> String {
        match self.coordinates {
            Some(Coordinates { lat, lng }) => {
                format!("{} ({:.6}, {:.6})", self.address, lat, lng)
            }
            None => self.address.clone(),
        }
    }

    /// Full CRM property map for this lead: normalized display labels, the
    /// annotated address, and visitor geolocation entries only when present.
    pub fn contact_properties(&self) -> ContactProperties {
        let mut properties = ContactProperties::default();
        properties.insert("email", &self.email);
        properties.insert("firstname", &self.first_name);
        properties.insert("phone", &self.phone);
        properties.insert("address", self.annotated_address());
        properties.insert(
            "selling_timeline",
            labels::selling_timeline_label(&self.selling_timeline),
        );
        properties.insert(
            "property_type",
            labels::property_type_label(&self.property_type),
        );
        properties.insert(
            "relationship_to_property",
            labels::relationship_label(&self.relationship),
        );

        if let Some(city) = present(&self.visitor.city) {
            properties.insert("city", city);
        }
        if let Some(region) = present(&self.visitor.region) {
            properties.insert("state", region);
        }
        if let Some(country) = present(&self.visitor.country) {
            properties.insert("country", country);
        }
        if let Some(latitude) = present(&self.visitor.latitude) {
            properties.insert("ip_latitude", latitude);
        }
        if let Some(longitude) = present(&self.visitor.longitude) {
            properties.insert("ip_longitude", longitude);
        }

        properties
    }
}

/// Map-selected coordinates accompanying a lead address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Proxy-derived visitor geolocation hints attached to a lead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorGeo {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// A validated contact-form message.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// CRM property map for a contact-form message. Optional fields are
    /// forwarded as empty strings and the source is tagged for attribution.
    pub fn contact_properties(&self) -> ContactProperties {
        let mut properties = ContactProperties::default();
        properties.insert("firstname", &self.first_name);
        properties.insert("lastname", self.last_name.clone().unwrap_or_default());
        properties.insert("email", &self.email);
        properties.insert("phone", self.phone.clone().unwrap_or_default());
        properties.insert("message", &self.message);
        properties.insert("lead_source", "Contact Form");
        properties
    }
}

/// Identifier of an existing CRM contact, as resolved by search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(pub String);

/// Property map sent to the CRM on create and update calls.
///
/// Update payloads must never carry `email`: the CRM treats it as the
/// immutable natural key of an existing contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactProperties(BTreeMap<String, String>);

impl ContactProperties {
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this map with the immutable email key removed, for updates.
    pub fn without_email(&self) -> Self {
        let mut copy = self.clone();
        copy.0.remove("email");
        copy
    }
}

/// How a submission landed in the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// A new contact record was created.
    Created,
    /// The email already existed; the record was found and refreshed.
    Updated,
    /// The email already existed and the refresh could not be applied; the
    /// original record stands, which still satisfies the caller contract.
    DuplicateKept,
    /// Honeypot tripped; nothing was sent anywhere.
    Discarded,
}

impl IntakeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            IntakeOutcome::Created => "created",
            IntakeOutcome::Updated => "updated",
            IntakeOutcome::DuplicateKept => "duplicate_kept",
            IntakeOutcome::Discarded => "discarded",
        }
    }
}
