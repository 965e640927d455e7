use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DescriptorList, FieldDescriptor, FieldKind};

use super::draft::Draft;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url pattern compiles"));
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("date pattern compiles")
});
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("time pattern compiles"));

/// Required descriptors whose draft value is absent, `null` or blank.
pub fn missing_required<'a>(descriptors: &'a DescriptorList, draft: &Draft) -> Vec<&'a FieldDescriptor> {
    descriptors
        .required()
        .filter(|field| draft.is_blank(&field.name))
        .collect()
}

pub fn is_draft_valid(descriptors: &DescriptorList, draft: &Draft) -> bool {
    descriptors
        .required()
        .all(|field| !draft.is_blank(&field.name))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    pub field: String,
    pub message: String,
}

/// Soft format checks for `url`, `date` and `time` fields.
///
/// These never gate saving; blank values are left to the required check.
pub fn format_warnings(descriptors: &DescriptorList, draft: &Draft) -> Vec<FormatWarning> {
    descriptors
        .iter()
        .filter_map(|field| {
            let text = draft.text(&field.name)?.trim();
            if text.is_empty() {
                return None;
            }
            let (pattern, expected) = match field.kind {
                FieldKind::Url => (&*URL_PATTERN, "http(s)://…"),
                FieldKind::Date => (&*DATE_PATTERN, "YYYY-MM-DD"),
                FieldKind::Time => (&*TIME_PATTERN, "HH:MM"),
                FieldKind::Text | FieldKind::LongText | FieldKind::Choice(_) => return None,
            };
            (!pattern.is_match(text)).then(|| FormatWarning {
                field: field.name.clone(),
                message: format!("{} should look like {expected}", field.label),
            })
        })
        .collect()
}

pub fn missing_notice(missing: &[&FieldDescriptor]) -> String {
    let labels = missing
        .iter()
        .map(|field| field.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Required field(s) missing: {labels}")
}
