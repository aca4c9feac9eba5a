//! # Resource Declarations
//!
//! The public entry point: declare a root resource with [`route`] and attach
//! nested children with [`RouteSet::with`].
//!
//! ```rust
//! use resourceful::options::ResourceOptions;
//! use resourceful::registry::RecordingRegistry;
//! use resourceful::resource::route;
//!
//! # fn main() -> Result<(), resourceful::ResourcefulError> {
//! let mut registry = RecordingRegistry::new();
//! let set = route(&mut registry, "post", ResourceOptions::new().mode("strict"))?
//!     .with("comment", ResourceOptions::new())?
//!     .with("image", ResourceOptions::new().embed(true))?;
//!
//! assert!(set
//!     .rules()
//!     .iter()
//!     .any(|r| r.path_template == "posts/{pid}/comments/{id}"));
//! # Ok(())
//! # }
//! ```
//!
//! Nesting is one level deep: every `.with()` attaches another child to the
//! same root. Children are declared in call order, and each one's rules are
//! registered before the next child is normalized.

use crate::builder::{build_rules, RouteRule};
use crate::config::ResourcefulConfig;
use crate::error::Result;
use crate::options::{Normalizer, ResourceOptions, RouteOptions};
use crate::registry::{register_rule, RouteRegistry};
use tracing::info;

/// Handle for one root resource and its children
///
/// Rules are registered immediately; the handle mirrors them, in emission
/// order, so callers can inspect what a declaration chain produced.
pub struct RouteSet<'r, R: RouteRegistry + ?Sized> {
    registry: &'r mut R,
    normalizer: Normalizer,
    root: RouteOptions,
    rules: Vec<RouteRule>,
}

/// Declare a root resource; a missing `mode` falls back to `RESOURCEFUL_MODE`
///
/// The environment is read on every call. Use [`route_with`] to inject a
/// fixed configuration instead.
///
/// # Errors
///
/// Fails with [`InvalidOptions`](crate::ResourcefulError::InvalidOptions) or
/// [`InvalidMode`](crate::ResourcefulError::InvalidMode) when the declaration
/// is malformed; nothing is registered in that case.
pub fn route<'r, R: RouteRegistry + ?Sized>(
    registry: &'r mut R,
    identifier: &str,
    options: ResourceOptions,
) -> Result<RouteSet<'r, R>> {
    route_with(
        &Normalizer::new(ResourcefulConfig::from_env()),
        registry,
        identifier,
        options,
    )
}

/// Declare a root resource with an explicit normalizer (config and inflector)
///
/// # Errors
///
/// Same as [`route`].
pub fn route_with<'r, R: RouteRegistry + ?Sized>(
    normalizer: &Normalizer,
    registry: &'r mut R,
    identifier: &str,
    options: ResourceOptions,
) -> Result<RouteSet<'r, R>> {
    let root = normalizer.normalize(identifier, &options, None)?;
    let mut set = RouteSet {
        registry,
        normalizer: normalizer.clone(),
        root,
        rules: Vec::new(),
    };
    let root = set.root.clone();
    set.declare(&root);
    Ok(set)
}

impl<'r, R: RouteRegistry + ?Sized> RouteSet<'r, R> {
    /// Attach a nested child resource to the root
    ///
    /// The child's paths are prefixed with `<root plural>/{pid}/`.
    ///
    /// # Errors
    ///
    /// Same as [`route`]. Rules registered by earlier calls stay registered.
    pub fn with(mut self, identifier: &str, options: ResourceOptions) -> Result<Self> {
        let child = self
            .normalizer
            .normalize(identifier, &options, Some(&self.root))?;
        self.declare(&child);
        Ok(self)
    }

    /// Normalized options of the root resource
    #[must_use]
    pub fn root(&self) -> &RouteOptions {
        &self.root
    }

    /// Every rule registered by this chain, in emission order
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    #[must_use]
    pub fn into_rules(self) -> Vec<RouteRule> {
        self.rules
    }

    fn declare(&mut self, options: &RouteOptions) {
        let policy = options.mode.policy();
        let rules = build_rules(options, policy);

        match options.filters.as_ref() {
            Some(filters) => {
                self.registry.register_group(filters, &mut |registry| {
                    for rule in &rules {
                        register_rule(registry, rule);
                    }
                });
            }
            None => {
                for rule in &rules {
                    register_rule(self.registry, rule);
                }
            }
        }

        info!(
            resource = %options.plural_name,
            handler_group = %options.handler_group,
            mode = %options.mode,
            is_root = options.is_root,
            rules_count = rules.len(),
            "Resource routes registered"
        );

        self.rules.extend(rules);
    }
}
