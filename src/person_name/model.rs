use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One segment of a person's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Middle,
    Last,
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NamePart::First => "first name",
            NamePart::Middle => "middle name",
            NamePart::Last => "last name",
        };
        f.write_str(label)
    }
}

/// A person's name split into first, optional middle, and last components.
///
/// Every component is trimmed and guaranteed non-empty. A missing middle name
/// is `None`; an empty middle name is rejected rather than treated as missing.
///
/// # Example
/// ```
/// use person_names::PersonName;
///
/// let person = PersonName::new("John", Some("Junior"), "Smith").unwrap();
/// assert_eq!(person.first_name(), "John");
/// assert_eq!(person.middle_name(), Some("Junior"));
/// assert_eq!(person.last_name(), "Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonNameRecord", into = "PersonNameRecord")]
pub struct PersonName {
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
}

/// Wire shape of a person record, validated on the way into `PersonName`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonNameRecord {
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "middleName", default, skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    #[serde(rename = "lastName")]
    last_name: String,
}

impl PersonName {
    /// Builds a name from its components.
    ///
    /// Surrounding whitespace is trimmed from every component before it is
    /// stored, so `" John "` is kept as `"John"`.
    ///
    /// # Errors
    /// `AppError::InvalidNameComponent` naming the offending part when the
    /// first or last name is blank, or when a middle name is supplied but blank.
    pub fn new(
        first_name: &str,
        middle_name: Option<&str>,
        last_name: &str,
    ) -> Result<Self, AppError> {
        let first_name = validated(NamePart::First, first_name)?;
        let middle_name = middle_name
            .map(|middle| validated(NamePart::Middle, middle))
            .transpose()?;
        let last_name = validated(NamePart::Last, last_name)?;

        Ok(Self {
            first_name,
            middle_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Present components in display order.
    pub(crate) fn components(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

fn validated(part: NamePart, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        debug!(%part, "Rejected blank name component");
        return Err(AppError::invalid_name_component(part));
    }
    Ok(trimmed.to_string())
}

impl TryFrom<PersonNameRecord> for PersonName {
    type Error = AppError;

    fn try_from(record: PersonNameRecord) -> Result<Self, Self::Error> {
        PersonName::new(
            &record.first_name,
            record.middle_name.as_deref(),
            &record.last_name,
        )
    }
}

impl From<PersonName> for PersonNameRecord {
    fn from(name: PersonName) -> Self {
        PersonNameRecord {
            first_name: name.first_name,
            middle_name: name.middle_name,
            last_name: name.last_name,
        }
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
