//! Person name model and formatting.
//!
//! This module provides:
//! - `PersonName`, a validated, immutable first/middle/last name record
//! - Formatting queries: full name, full name with middle initial, initials
//! - `NameStyle` for choosing one of those formats at runtime
//!
//! The middle name is optional. When it is absent every format omits it
//! together with the space that would separate it.

mod formatting;
mod model;
mod style;

pub use formatting::extract_initial;
pub use model::{NamePart, PersonName};
pub use style::NameStyle;
