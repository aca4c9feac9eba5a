use http::Method;
use serde::{Serialize, Serializer};
use std::fmt;

/// Handler method on a handler group, rendered as `Group@method`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HandlerRef {
    pub group: String,
    pub method: String,
}

impl HandlerRef {
    #[must_use]
    pub fn new(group: impl Into<String>, method: impl Into<String>) -> Self {
        HandlerRef {
            group: group.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.group, self.method)
    }
}

/// What a matched rule does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteTarget {
    /// Dispatch to a handler method
    Handler(HandlerRef),
    /// Redirect to the canonical path template with `status`
    Redirect { to: String, status: u16 },
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::Handler(handler) => write!(f, "{}", handler),
            RouteTarget::Redirect { to, status } => write!(f, "-> {} ({})", to, status),
        }
    }
}

/// One registered route: the atomic output of the builder
///
/// Path templates carry no leading slash and may contain the `{id}`, `{pid}`
/// and `{format}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRule {
    #[serde(serialize_with = "serialize_method")]
    pub method: Method,
    pub path_template: String,
    pub name: Option<String>,
    pub target: RouteTarget,
    /// Allowed values of `{format}`, when the template has one
    pub format_constraint: Option<Vec<String>>,
}

impl RouteRule {
    #[must_use]
    pub fn handler(method: Method, path_template: impl Into<String>, handler: HandlerRef) -> Self {
        RouteRule {
            method,
            path_template: path_template.into(),
            name: None,
            target: RouteTarget::Handler(handler),
            format_constraint: None,
        }
    }

    #[must_use]
    pub fn redirect(from: impl Into<String>, to: impl Into<String>, status: u16) -> Self {
        RouteRule {
            method: Method::GET,
            path_template: from.into(),
            name: None,
            target: RouteTarget::Redirect {
                to: to.into(),
                status,
            },
            format_constraint: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn handler_ref(&self) -> Option<&HandlerRef> {
        match &self.target {
            RouteTarget::Handler(handler) => Some(handler),
            RouteTarget::Redirect { .. } => None,
        }
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect { .. })
    }

    /// Target template of a redirect rule
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect { to, .. } => Some(to),
            RouteTarget::Handler(_) => None,
        }
    }

    #[must_use]
    pub fn redirect_status(&self) -> Option<u16> {
        match &self.target {
            RouteTarget::Redirect { status, .. } => Some(*status),
            RouteTarget::Handler(_) => None,
        }
    }
}

impl fmt::Display for RouteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<7} {} {}",
            self.method.as_str(),
            self.path_template,
            self.target
        )?;
        if let Some(name) = &self.name {
            write!(f, " [{}]", name)?;
        }
        if let Some(formats) = &self.format_constraint {
            write!(f, " format={}", formats.join("|"))?;
        }
        Ok(())
    }
}

fn serialize_method<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(method.as_str())
}
