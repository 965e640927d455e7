use indexmap::IndexMap;
use thiserror::Error;

/// Raised when a descriptor list cannot describe a closed schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("descriptor list must declare at least one field")]
    Empty,
    #[error("field name must not be blank (descriptor #{index})")]
    BlankName { index: usize },
    #[error("duplicate field name `{0}`")]
    DuplicateName(String),
    #[error("choice field `{0}` declares no choices")]
    MissingChoices(String),
    #[error("field `{name}` has unknown kind `{kind}`")]
    UnknownKind { name: String, kind: String },
    #[error("descriptor #{index} is malformed: {message}")]
    Malformed { index: usize, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Date,
    Time,
    LongText,
    Choice(Vec<ChoiceOption>),
}

impl FieldKind {
    pub fn key(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Url => "url",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::LongText => "longText",
            FieldKind::Choice(_) => "choice",
        }
    }

    pub fn choices(&self) -> Option<&[ChoiceOption]> {
        match self {
            FieldKind::Choice(options) => Some(options),
            _ => None,
        }
    }
}

/// Static metadata for one editable attribute of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub full_width: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            full_width: false,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn url(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn time(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Time)
    }

    pub fn long_text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub fn choice<I, V, L>(name: impl Into<String>, label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let options = choices
            .into_iter()
            .map(|(value, label)| ChoiceOption::new(value, label))
            .collect();
        Self::new(name, label, FieldKind::Choice(options))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Ordered, validated set of field descriptors for one collection.
///
/// Construction rejects empty lists, blank or duplicate names and choice
/// fields without options, so everything downstream can index by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorList {
    fields: IndexMap<String, FieldDescriptor>,
}

impl DescriptorList {
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, DescriptorError> {
        if fields.is_empty() {
            return Err(DescriptorError::Empty);
        }
        let mut map = IndexMap::with_capacity(fields.len());
        for (index, field) in fields.into_iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(DescriptorError::BlankName { index });
            }
            if let FieldKind::Choice(options) = &field.kind
                && options.is_empty()
            {
                return Err(DescriptorError::MissingChoices(field.name));
            }
            if map.contains_key(&field.name) {
                return Err(DescriptorError::DuplicateName(field.name));
            }
            map.insert(field.name.clone(), field);
        }
        Ok(Self { fields: map })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn get_index(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get_index(index).map(|(_, field)| field)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values().filter(|field| field.required)
    }
}

impl<'a> IntoIterator for &'a DescriptorList {
    type Item = &'a FieldDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
