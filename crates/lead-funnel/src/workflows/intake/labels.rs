use std::collections::HashMap;
use std::sync::OnceLock;

static TIMELINE_LABELS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static PROPERTY_TYPE_LABELS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static RELATIONSHIP_LABELS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Display label for a selling-timeline code. Unknown codes pass through
/// unchanged so a new form option never breaks submission.
pub(crate) fn selling_timeline_label(code: &str) -> String {
    lookup(timeline_labels(), code)
}

/// Display label for a property-type code; unknown codes pass through.
pub(crate) fn property_type_label(code: &str) -> String {
    lookup(property_type_labels(), code)
}

/// Display label for a relationship-to-property code; unknown codes pass
/// through.
pub(crate) fn relationship_label(code: &str) -> String {
    lookup(relationship_labels(), code)
}

fn lookup(table: &HashMap<&'static str, &'static str>, code: &str) -> String {
    table.get(code).copied().unwrap_or(code).to_string()
}

fn timeline_labels() -> &'static HashMap<&'static str, &'static str> {
    TIMELINE_LABELS.get_or_init(|| {
        const LABELS: &[(&str, &str)] = &[
            ("asap", "ASAP - Ready now"),
            ("1-3months", "1-3 months"),
            ("3-6months", "3-6 months"),
            ("6-12months", "6-12 months"),
            ("curious", "Just curious about my value"),
        ];
        LABELS.iter().copied().collect()
    })
}

fn property_type_labels() -> &'static HashMap<&'static str, &'static str> {
    PROPERTY_TYPE_LABELS.get_or_init(|| {
        const LABELS: &[(&str, &str)] = &[
            ("single-family", "Single Family Home"),
            ("townhouse", "Townhouse"),
            ("condo", "Condo"),
            ("multi-family", "Multi-Family"),
            ("land", "Land"),
            ("other", "Other"),
        ];
        LABELS.iter().copied().collect()
    })
}

fn relationship_labels() -> &'static HashMap<&'static str, &'static str> {
    RELATIONSHIP_LABELS.get_or_init(|| {
        const LABELS: &[(&str, &str)] = &[
            ("homeowner", "Homeowner"),
            ("co-owner", "Co-owner"),
            ("family-member", "Family member of owner"),
            ("agent", "Real estate agent"),
            ("other", "Other"),
        ];
        LABELS.iter().copied().collect()
    })
}
