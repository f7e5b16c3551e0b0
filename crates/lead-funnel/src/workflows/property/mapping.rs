use serde_json::{Number, Value};

use super::domain::PropertyDetails;

/// Target fields a source key can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Beds,
    Baths,
    Sqft,
    YearBuilt,
    LotSqft,
    PropertyType,
    EstimatedValue,
}

/// Recognized source keys in priority order. Later entries overwrite
/// earlier ones, so the canonical name for each target field sits last.
const SOURCE_FIELDS: &[(&str, Field)] = &[
    ("bedrooms", Field::Beds),
    ("beds", Field::Beds),
    ("bathrooms", Field::Baths),
    ("baths", Field::Baths),
    ("square_feet", Field::Sqft),
    ("building_size", Field::Sqft),
    ("sqft", Field::Sqft),
    ("lot_size", Field::LotSqft),
    ("lot_sqft", Field::LotSqft),
    ("year_built", Field::YearBuilt),
    ("property_type", Field::PropertyType),
    ("price", Field::EstimatedValue),
    ("estimated_value", Field::EstimatedValue),
];

/// Scan an upstream payload for recognizable property fields.
///
/// Some sources nest everything under a `property` envelope and some put
/// the fields at the top level; a key with an unusable value never clears a
/// value captured from an earlier key.
pub(crate) fn details_from_payload(payload: &Value) -> PropertyDetails {
    let source = payload
        .get("property")
        .filter(|property| property.is_object())
        .unwrap_or(payload);

    let mut details = PropertyDetails::default();
    for (key, field) in SOURCE_FIELDS {
        let Some(value) = source.get(*key) else {
            continue;
        };
        match field {
            Field::Beds => assign(&mut details.beds, numeric(value)),
            Field::Baths => assign(&mut details.baths, numeric(value)),
            Field::Sqft => assign(&mut details.sqft, numeric(value)),
            Field::YearBuilt => assign(&mut details.year_built, numeric(value)),
            Field::LotSqft => assign(&mut details.lot_sqft, numeric(value)),
            Field::PropertyType => assign(&mut details.property_type, text(value)),
            Field::EstimatedValue => assign(&mut details.estimated_value, numeric(value)),
        }
    }

    details
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Accept JSON numbers as-is and numeric strings, preferring integer
/// parsing so counts stay integers. Non-finite values are unusable.
fn numeric(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => Some(number.clone()),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(int) = trimmed.parse::<i64>() {
                return Some(Number::from(int));
            }
            trimmed.parse::<f64>().ok().and_then(Number::from_f64)
        }
        _ => None,
    }
}

fn text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
