//! # Registry Module
//!
//! The seam between route declarations and whatever HTTP router actually
//! serves them. Declarations hand every rule to a [`RouteRegistry`] as soon as
//! it is built; redirects go through the [`RedirectEmitter`] half of the same
//! object.
//!
//! ## Threading
//!
//! Registries are populated once, single-threaded, during startup. Nothing in
//! this crate locks: a [`RouteSet`](crate::resource::RouteSet) holds the
//! registry by `&mut` for its whole declaration chain. Sharing one registry
//! between threads while routes are still being declared is the caller's
//! responsibility.
//!
//! ## Recording Registry
//!
//! [`RecordingRegistry`] keeps every registration in order together with the
//! filter groups that were active, which is what tests and the
//! `resourceful-gen` CLI inspect.

use crate::builder::{HandlerRef, RouteRule, RouteTarget};
use crate::options::Filters;
use http::Method;
use serde::Serialize;
use tracing::debug;

/// Receives trailing-slash redirects
pub trait RedirectEmitter {
    /// Redirect `path_template` to `target_template` with HTTP `status`
    fn register_redirect(&mut self, path_template: &str, target_template: &str, status: u16);
}

/// Receives handler rules, optionally inside a filter group
pub trait RouteRegistry: RedirectEmitter {
    /// Register one handler rule
    fn register(
        &mut self,
        method: &Method,
        path_template: &str,
        name: Option<&str>,
        handler: &HandlerRef,
        format_constraint: Option<&[String]>,
    );

    /// Run `block` with `filters` applied to every rule it registers
    fn register_group(&mut self, filters: &Filters, block: &mut dyn FnMut(&mut dyn RouteRegistry));
}

/// Hand one rule to the registry, as a handler or as a redirect
pub fn register_rule<R: RouteRegistry + ?Sized>(registry: &mut R, rule: &RouteRule) {
    debug!(
        method = %rule.method,
        path = %rule.path_template,
        name = rule.name.as_deref().unwrap_or(""),
        target = %rule.target,
        "Registering route"
    );
    match &rule.target {
        RouteTarget::Handler(handler) => registry.register(
            &rule.method,
            &rule.path_template,
            rule.name.as_deref(),
            handler,
            rule.format_constraint.as_deref(),
        ),
        RouteTarget::Redirect { to, status } => {
            registry.register_redirect(&rule.path_template, to, *status)
        }
    }
}

/// A registration captured by [`RecordingRegistry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredRoute {
    #[serde(flatten)]
    pub rule: RouteRule,
    /// Filter groups active at registration time, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filters>,
}

/// In-memory registry that records registrations in order
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistry {
    entries: Vec<RegisteredRoute>,
    groups: Vec<Filters>,
}

impl RecordingRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[RegisteredRoute] {
        &self.entries
    }

    pub fn rules(&self) -> impl Iterator<Item = &RouteRule> + '_ {
        self.entries.iter().map(|e| &e.rule)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<RegisteredRoute> {
        self.entries
    }

    fn record(&mut self, rule: RouteRule) {
        self.entries.push(RegisteredRoute {
            rule,
            filters: self.groups.clone(),
        });
    }
}

impl RedirectEmitter for RecordingRegistry {
    fn register_redirect(&mut self, path_template: &str, target_template: &str, status: u16) {
        self.record(RouteRule::redirect(path_template, target_template, status));
    }
}

impl RouteRegistry for RecordingRegistry {
    fn register(
        &mut self,
        method: &Method,
        path_template: &str,
        name: Option<&str>,
        handler: &HandlerRef,
        format_constraint: Option<&[String]>,
    ) {
        let mut rule = RouteRule::handler(method.clone(), path_template, handler.clone());
        rule.name = name.map(str::to_string);
        rule.format_constraint = format_constraint.map(<[String]>::to_vec);
        self.record(rule);
    }

    fn register_group(&mut self, filters: &Filters, block: &mut dyn FnMut(&mut dyn RouteRegistry)) {
        self.groups.push(filters.clone());
        block(self);
        self.groups.pop();
    }
}
