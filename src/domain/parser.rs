use serde::Deserialize;
use serde_json::Value;

use super::descriptor::{ChoiceOption, DescriptorError, DescriptorList, FieldDescriptor, FieldKind};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawDescriptor {
    name: String,
    label: String,
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    layout_full_width: bool,
    #[serde(default)]
    choices: Option<Vec<RawChoice>>,
}

#[derive(Deserialize)]
struct RawChoice {
    value: String,
    label: String,
}

impl RawDescriptor {
    fn into_descriptor(self, index: usize) -> Result<FieldDescriptor, DescriptorError> {
        if self.choices.is_some() && self.kind != "choice" {
            return Err(DescriptorError::Malformed {
                index,
                message: format!(
                    "field `{}` of kind `{}` must not declare choices",
                    self.name, self.kind
                ),
            });
        }
        let kind = match self.kind.as_str() {
            "text" => FieldKind::Text,
            "url" => FieldKind::Url,
            "date" => FieldKind::Date,
            "time" => FieldKind::Time,
            "longText" => FieldKind::LongText,
            "choice" => {
                let options = self
                    .choices
                    .unwrap_or_default()
                    .into_iter()
                    .map(|raw| ChoiceOption::new(raw.value, raw.label))
                    .collect();
                FieldKind::Choice(options)
            }
            _ => {
                return Err(DescriptorError::UnknownKind {
                    name: self.name,
                    kind: self.kind,
                });
            }
        };
        Ok(FieldDescriptor {
            name: self.name,
            label: self.label,
            kind,
            required: self.required,
            placeholder: self.placeholder,
            full_width: self.layout_full_width,
        })
    }
}

/// Parse a JSON array of field descriptors into a validated list.
///
/// Unknown kinds and malformed entries fail here, before any editor exists.
pub fn parse_descriptors(value: &Value) -> Result<DescriptorList, DescriptorError> {
    let entries = value.as_array().ok_or(DescriptorError::Malformed {
        index: 0,
        message: "expected an array of descriptors".to_string(),
    })?;
    let fields = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            RawDescriptor::deserialize(entry)
                .map_err(|err| DescriptorError::Malformed {
                    index,
                    message: err.to_string(),
                })
                .and_then(|raw| raw.into_descriptor(index))
        })
        .collect::<Result<Vec<_>, _>>()?;
    DescriptorList::new(fields)
}

/// Parse descriptor lists keyed by collection name, e.g. `{"links": [...]}`.
pub fn parse_descriptor_sets(
    value: &Value,
) -> Result<Vec<(String, DescriptorList)>, DescriptorError> {
    let object = value.as_object().ok_or(DescriptorError::Malformed {
        index: 0,
        message: "expected an object of descriptor lists".to_string(),
    })?;
    object
        .iter()
        .map(|(name, list)| parse_descriptors(list).map(|parsed| (name.clone(), parsed)))
        .collect()
}
