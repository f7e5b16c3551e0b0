use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw mortgage-estimate payload as posted by the calculator widget.
///
/// Presence is modeled with `Option` so an explicit zero stays
/// distinguishable from an omitted field; range rules live in the request
/// validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateRequest {
    pub home_value: Option<f64>,
    pub downpayment: Option<f64>,
    pub interest_rate: Option<f64>,
    pub duration_years: Option<u32>,
    pub monthly_hoa: Option<f64>,
    pub annual_property_tax: Option<f64>,
    pub annual_home_insurance: Option<f64>,
}

/// Why an estimate request was rejected before any upstream traffic.
#[derive(Debug, thiserror::Error)]
pub enum EstimateValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid value for {field}: {requirement}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
    },
}

/// Validated estimate inputs ready to be forwarded upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateParameters {
    pub home_value: f64,
    pub downpayment: f64,
    pub interest_rate: f64,
    pub duration_years: u32,
    pub monthly_hoa: Option<f64>,
    pub annual_property_tax: Option<f64>,
    pub annual_home_insurance: Option<f64>,
}

impl EstimateParameters {
    /// Query-string pairs for the upstream calculator. Required parameters
    /// are always sent; optional charges only when supplied and non-zero,
    /// since the upstream treats a zero charge the same as an absent one.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("home_value", self.home_value.to_string()),
            ("downpayment", self.downpayment.to_string()),
            ("interest_rate", self.interest_rate.to_string()),
            ("duration_years", self.duration_years.to_string()),
        ];

        let optional = [
            ("monthly_hoa", self.monthly_hoa),
            ("annual_property_tax", self.annual_property_tax),
            ("annual_home_insurance", self.annual_home_insurance),
        ];
        for (name, charge) in optional {
            if let Some(charge) = charge.filter(|charge| *charge != 0.0) {
                pairs.push((name, charge.to_string()));
            }
        }

        pairs
    }
}

/// Check presence and ranges on an estimate request.
pub(crate) fn parameters_from_request(
    request: EstimateRequest,
) -> Result<EstimateParameters, EstimateValidationError> {
    let (home_value, interest_rate, duration_years) = match (
        request.home_value,
        request.interest_rate,
        request.duration_years,
    ) {
        (Some(home_value), Some(interest_rate), Some(duration_years)) => {
            (home_value, interest_rate, duration_years)
        }
        (home_value, interest_rate, duration_years) => {
            let mut missing = Vec::new();
            if home_value.is_none() {
                missing.push("home_value");
            }
            if interest_rate.is_none() {
                missing.push("interest_rate");
            }
            if duration_years.is_none() {
                missing.push("duration_years");
            }
            return Err(EstimateValidationError::MissingFields(missing));
        }
    };

    if !home_value.is_finite() || home_value <= 0.0 {
        return Err(EstimateValidationError::OutOfRange {
            field: "home_value",
            requirement: "must be greater than zero",
        });
    }
    if !interest_rate.is_finite() || interest_rate < 0.0 {
        return Err(EstimateValidationError::OutOfRange {
            field: "interest_rate",
            requirement: "must not be negative",
        });
    }
    if duration_years == 0 {
        return Err(EstimateValidationError::OutOfRange {
            field: "duration_years",
            requirement: "must cover at least one year",
        });
    }

    let downpayment = request.downpayment.unwrap_or(0.0);
    if !downpayment.is_finite() || downpayment < 0.0 {
        return Err(EstimateValidationError::OutOfRange {
            field: "downpayment",
            requirement: "must not be negative",
        });
    }
    if matches!(request.monthly_hoa, Some(hoa) if !hoa.is_finite() || hoa < 0.0) {
        return Err(EstimateValidationError::OutOfRange {
            field: "monthly_hoa",
            requirement: "must not be negative",
        });
    }

    Ok(EstimateParameters {
        home_value,
        downpayment,
        interest_rate,
        duration_years,
        monthly_hoa: request.monthly_hoa,
        annual_property_tax: request.annual_property_tax,
        annual_home_insurance: request.annual_home_insurance,
    })
}

/// One payment breakdown as reported by the calculator.
///
/// The upstream omits charges that were not part of the request and names
/// the insurance component `annual_home_ins` in both breakdowns; the alias
/// and defaults absorb that so callers always see the full shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub mortgage: f64,
    #[serde(default)]
    pub property_tax: f64,
    #[serde(default)]
    pub hoa: f64,
    #[serde(default, alias = "annual_home_ins")]
    pub home_insurance: f64,
    pub total: f64,
}

/// Full calculator response forwarded to the caller under a `data` key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageEstimate {
    pub monthly_payment: PaymentBreakdown,
    pub annual_payment: PaymentBreakdown,
    pub total_interest_paid: f64,
}

/// Latest weekly average rates. Fields the upstream did not report
/// serialize as explicit nulls so the widget can render placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateQuote {
    pub frm_30: Option<f64>,
    pub frm_15: Option<f64>,
    pub week: Option<String>,
}

impl RateQuote {
    /// Pick the first element of the upstream rate array; anything else
    /// (empty array, non-array payload) yields an all-null quote.
    pub fn from_upstream(payload: &Value) -> Self {
        let Some(latest) = payload.as_array().and_then(|rates| rates.first()) else {
            return Self::default();
        };

        Self {
            frm_30: latest.get("frm_30").and_then(Value::as_f64),
            frm_15: latest.get("frm_15").and_then(Value::as_f64),
            week: latest
                .get("week")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
