use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Enrichment request: the address the visitor selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyLookup {
    pub address: Option<String>,
}

/// Normalized property record assembled from whatever recognizable fields
/// the upstream source happened to include. Absent fields are omitted from
/// the response body entirely.
///
/// Numeric fields keep the upstream's representation (`3` stays an integer,
/// `2.5` a float), so they are carried as raw JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_sqft: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<Number>,
}

impl PropertyDetails {
    /// True when no source key populated any field; the caller reports this
    /// as "no data" rather than an empty object.
    pub fn is_empty(&self) -> bool {
        self.beds.is_none()
            && self.baths.is_none()
            && self.sqft.is_none()
            && self.year_built.is_none()
            && self.lot_sqft.is_none()
            && self.property_type.is_none()
            && self.estimated_value.is_none()
    }
}
