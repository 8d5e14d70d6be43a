//! Name formatting queries for `PersonName`.
//!
//! This module provides:
//! - The full name, with or without the middle name abbreviated
//! - Initials for every present component
//! - The shared initial rule: first character, upper-cased, no period

use super::model::{NamePart, PersonName};
use super::style::NameStyle;
use crate::error::AppError;

impl PersonName {
    /// Returns first, middle (if present) and last name separated by single spaces.
    ///
    /// # Examples
    /// ```
    /// use person_names::PersonName;
    ///
    /// let person = PersonName::new("John", Some("Junior"), "Smith").unwrap();
    /// assert_eq!(person.full_name(), "John Junior Smith");
    ///
    /// let person = PersonName::new("John", None, "Smith").unwrap();
    /// assert_eq!(person.full_name(), "John Smith");
    /// ```
    pub fn full_name(&self) -> String {
        self.components().collect::<Vec<_>>().join(" ")
    }

    /// Returns the full name with the middle name reduced to its initial.
    ///
    /// Without a middle name this is the same as [`PersonName::full_name`].
    ///
    /// # Examples
    /// ```
    /// use person_names::PersonName;
    ///
    /// let person = PersonName::new("John", Some("Junior"), "Smith").unwrap();
    /// assert_eq!(person.full_name_with_middle_initial(), "John J Smith");
    ///
    /// let person = PersonName::new("John", None, "Smith").unwrap();
    /// assert_eq!(person.full_name_with_middle_initial(), "John Smith");
    /// ```
    pub fn full_name_with_middle_initial(&self) -> String {
        match self.middle_name() {
            Some(middle) => format!(
                "{} {} {}",
                self.first_name(),
                component_initial(middle),
                self.last_name()
            ),
            None => self.full_name(),
        }
    }

    /// Returns the initial of every present component separated by single spaces.
    ///
    /// # Examples
    /// ```
    /// use person_names::PersonName;
    ///
    /// let person = PersonName::new("John", Some("Junior"), "Smith").unwrap();
    /// assert_eq!(person.initials(), "J J S");
    ///
    /// let person = PersonName::new("John", None, "Smith").unwrap();
    /// assert_eq!(person.initials(), "J S");
    /// ```
    pub fn initials(&self) -> String {
        self.components()
            .map(component_initial)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats the name in the given style.
    pub fn format(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Full => self.full_name(),
            NameStyle::MiddleInitial => self.full_name_with_middle_initial(),
            NameStyle::Initials => self.initials(),
        }
    }
}

/// First character of `word`, upper-cased. `None` when `word` is empty.
fn initial_of(word: &str) -> Option<String> {
    word.chars().next().map(|c| c.to_uppercase().to_string())
}

// PersonName components are non-empty by construction.
fn component_initial(component: &str) -> String {
    initial_of(component).unwrap_or_default()
}

/// Extracts the initial of a single name component.
///
/// Surrounding whitespace is ignored. Multi-character upper-case mappings are
/// kept whole, so `"ßa"` yields `"SS"`.
///
/// # Errors
/// `AppError::InvalidNameComponent` for `part` when `word` is blank.
///
/// # Examples
/// ```
/// use person_names::{NamePart, extract_initial};
///
/// assert_eq!(extract_initial("junior", NamePart::Middle).unwrap(), "J");
/// assert_eq!(extract_initial("Äkäslompolo", NamePart::First).unwrap(), "Ä");
/// assert!(extract_initial("   ", NamePart::Last).is_err());
/// ```
pub fn extract_initial(word: &str, part: NamePart) -> Result<String, AppError> {
    initial_of(word.trim()).ok_or_else(|| AppError::invalid_name_component(part))
}
