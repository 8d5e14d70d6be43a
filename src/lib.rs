//! Person name formatting library
//!
//! This library provides a validated `PersonName` value with an optional middle
//! name and formats it as a full name, a full name with middle initial, or
//! initials.
//!
//! # Examples
//!
//! ```rust
//! use person_names::{NameStyle, PersonName};
//! use person_names::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let person = PersonName::new("John", Some("Junior"), "Smith")?;
//!
//!     assert_eq!(person.full_name(), "John Junior Smith");
//!     assert_eq!(person.full_name_with_middle_initial(), "John J Smith");
//!     assert_eq!(person.initials(), "J J S");
//!     assert_eq!(person.format(NameStyle::Initials), "J J S");
//!
//!     let no_middle = PersonName::new("John", None, "Smith")?;
//!     assert_eq!(no_middle.initials(), "J S");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod person_name;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use person_name::{NamePart, NameStyle, PersonName, extract_initial};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
