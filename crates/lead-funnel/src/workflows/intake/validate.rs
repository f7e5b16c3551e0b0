use super::domain::{
    ContactMessage, ContactSubmission, Coordinates, Lead, LeadSubmission, VisitorGeo,
};

/// Default selling-timeline code when the form leaves the field blank.
const DEFAULT_TIMELINE: &str = "curious";
/// Default relationship-to-property code when the form leaves the field blank.
const DEFAULT_RELATIONSHIP: &str = "homeowner";

/// Why a submission was rejected before any CRM traffic.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Phone number must contain at least 10 digits")]
    InvalidPhone,
}

/// Check required fields, email shape, and phone digits on a lead form
/// payload, then apply the optional-enum defaults.
pub(crate) fn lead_from_submission(
    submission: LeadSubmission,
) -> Result<Lead, ValidationError> {
    let mut missing = Vec::new();
    let address = required(submission.address, "address", &mut missing);
    let first_name = required(submission.first_name, "firstName", &mut missing);
    let email = required(submission.email, "email", &mut missing);
    let phone = required(submission.phone, "phone", &mut missing);
    let property_type = required(submission.property_type, "propertyType", &mut missing);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if !is_plausible_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if digit_count(&phone) < 10 {
        return Err(ValidationError::InvalidPhone);
    }

    let coordinates = match (submission.lat, submission.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    Ok(Lead {
        address,
        first_name,
        email,
        phone,
        property_type,
        selling_timeline: submission
            .selling_timeline
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TIMELINE.to_string()),
        relationship: submission
            .relationship
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_RELATIONSHIP.to_string()),
        coordinates,
        visitor: VisitorGeo {
            city: submission.visitor_city,
            region: submission.visitor_region,
            country: submission.visitor_country,
            latitude: submission.visitor_latitude,
            longitude: submission.visitor_longitude,
        },
    })
}

/// Check required fields on a contact-form payload. The contact form never
/// applies the email-shape or phone-digit rules.
pub(crate) fn contact_from_submission(
    submission: ContactSubmission,
) -> Result<ContactMessage, ValidationError> {
    let mut missing = Vec::new();
    let first_name = required(submission.first_name, "firstName", &mut missing);
    let email = required(submission.email, "email", &mut missing);
    let message = required(submission.message, "message", &mut missing);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(ContactMessage {
        first_name,
        last_name: submission.last_name,
        email,
        phone: submission.phone,
        message,
    })
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Two-part `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// dot somewhere inside the domain with characters on both sides.
pub(crate) fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(index, byte)| *byte == b'.' && index > 0 && index + 1 < bytes.len())
}

pub(crate) fn digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}
