//! # Builder Module
//!
//! The route table builder turns one normalized [`RouteOptions`] record and a
//! [`ModePolicy`] into the ordered list of [`RouteRule`]s for that resource
//! level. It is pure: no registry access, no I/O, no failure modes.
//!
//! A root resource and a nested child go through the same builder. The only
//! differences are the child's non-empty path prefix (`posts/{pid}/`) and its
//! extra "all across parents" index rule.
//!
//! ## Example
//!
//! ```rust
//! use resourceful::builder::build_rules;
//! use resourceful::mode::Mode;
//! use resourceful::options::{Normalizer, ResourceOptions};
//!
//! let opts = Normalizer::default()
//!     .normalize("widget", &ResourceOptions::new().mode(Mode::Strict), None)
//!     .unwrap();
//! let rules = build_rules(&opts, Mode::Strict.policy());
//!
//! let index = rules.last().unwrap();
//! assert_eq!(index.path_template, "widgets");
//! assert_eq!(index.name.as_deref(), Some("widgets"));
//! assert_eq!(index.handler_ref().unwrap().to_string(), "WidgetHandler@index");
//! ```
//!
//! [`RouteOptions`]: crate::options::RouteOptions
//! [`ModePolicy`]: crate::mode::ModePolicy

mod build;
mod rule;
#[cfg(test)]
mod tests;

pub use build::build_rules;
pub use rule::{HandlerRef, RouteRule, RouteTarget};
