use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("category field must not be empty")]
    EmptyCategoryField,

    #[error("at least one value field is required")]
    NoValueFields,

    #[error("value field \"{0}\" is listed more than once")]
    DuplicateValueField(String),
}

/// How to read a dataset: which field labels the x-axis or slices, and which
/// fields carry the plotted measures (in legend order).
///
/// Construction only checks the selection itself; whether the fields exist in
/// the rows is checked at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct FieldSelection {
    category_field: String,
    value_fields: Vec<String>,
}

#[derive(Deserialize)]
struct RawSelection {
    category_field: String,
    value_fields: Vec<String>,
}

impl TryFrom<RawSelection> for FieldSelection {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        FieldSelection::new(raw.category_field, raw.value_fields)
    }
}

impl FieldSelection {
    pub fn new(
        category_field: impl Into<String>,
        value_fields: Vec<String>,
    ) -> Result<Self, SelectionError> {
        let category_field = category_field.into();
        if category_field.is_empty() {
            return Err(SelectionError::EmptyCategoryField);
        }
        if value_fields.is_empty() {
            return Err(SelectionError::NoValueFields);
        }
        for (index, field) in value_fields.iter().enumerate() {
            if value_fields[..index].contains(field) {
                return Err(SelectionError::DuplicateValueField(field.clone()));
            }
        }

        Ok(Self {
            category_field,
            value_fields,
        })
    }

    pub fn category_field(&self) -> &str {
        &self.category_field
    }

    pub fn value_fields(&self) -> &[String] {
        &self.value_fields
    }

    /// Category field followed by every value field.
    pub fn required_fields(&self) -> Vec<&str> {
        std::iter::once(self.category_field.as_str())
            .chain(self.value_fields.iter().map(String::as_str))
            .collect()
    }
}
