//! # Naming Module
//!
//! Derives the canonical names of a resource from the identifier a caller
//! declares it with:
//!
//! - **singular**: `widget` (used for route names such as `edit_widget`)
//! - **plural**: `widgets` (used for path segments and the index route name)
//! - **default handler group**: `WidgetHandler`
//!
//! Inflection itself is delegated to an [`Inflector`], so applications with
//! domain vocabulary can plug in their own rules. [`EnglishInflector`] is the
//! default.
//!
//! ## Example
//!
//! ```rust
//! use resourceful::naming::{resolve, EnglishInflector};
//!
//! let names = resolve(&EnglishInflector, "Categories");
//! assert_eq!(names.singular, "category");
//! assert_eq!(names.plural, "categories");
//! assert_eq!(names.default_handler_group, "CategoryHandler");
//! ```

mod inflect;

pub use inflect::{EnglishInflector, Inflector};

/// Suffix appended to the capitalized singular to form a handler group name
pub const HANDLER_SUFFIX: &str = "Handler";

/// Names derived once per resource identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub singular: String,
    pub plural: String,
    pub default_handler_group: String,
}

/// Resolve singular, plural and handler group names for `identifier`
///
/// The identifier is lower-cased before inflection. Callers must reject empty
/// identifiers beforehand; the option normalizer does.
#[must_use]
pub fn resolve(inflector: &dyn Inflector, identifier: &str) -> ResourceNames {
    let lowered = identifier.to_lowercase();
    let singular = inflector.singularize(&lowered);
    let plural = inflector.pluralize(&singular);
    let default_handler_group = format!("{}{}", capitalize(&singular), HANDLER_SUFFIX);
    ResourceNames {
        singular,
        plural,
        default_handler_group,
    }
}

/// Upper-case the first character, leaving the rest untouched
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
