use super::types::{ActionNameMap, Filters, PipeList, ResourceOptions, RouteOptions};
use crate::config::ResourcefulConfig;
use crate::error::{ResourcefulError, Result};
use crate::mode::Mode;
use crate::naming::{self, EnglishInflector, Inflector};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Format extensions: letters, digits, `_` and `-`
static FORMAT_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("format extension regex should be valid")
});

/// Collapses caller-supplied [`ResourceOptions`] into a [`RouteOptions`]
///
/// Holds the injected configuration (default mode) and the naming service, so
/// nothing is read from ambient global state while routes are declared.
#[derive(Clone)]
pub struct Normalizer {
    config: ResourcefulConfig,
    inflector: Arc<dyn Inflector>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ResourcefulConfig::default())
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    /// Normalizer using `config` and the [`EnglishInflector`]
    #[must_use]
    pub fn new(config: ResourcefulConfig) -> Self {
        Self {
            config,
            inflector: Arc::new(EnglishInflector),
        }
    }

    /// Replace the naming service
    #[must_use]
    pub fn with_inflector(mut self, inflector: impl Inflector + 'static) -> Self {
        self.inflector = Arc::new(inflector);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ResourcefulConfig {
        &self.config
    }

    /// Normalize the options of one resource level
    ///
    /// `parent` is `None` for a root resource. For a child it supplies the
    /// path prefix (`<parent prefix><parent plural>/{pid}/`), the handler group
    /// used when the child is embedded, and the inherited mode and formats.
    ///
    /// # Errors
    ///
    /// - [`ResourcefulError::InvalidOptions`] for an empty identifier, an empty
    ///   `uses`/`resources` value, or a malformed `formats` list
    /// - [`ResourcefulError::InvalidMode`] for an unrecognized `mode`
    pub fn normalize(
        &self,
        identifier: &str,
        raw: &ResourceOptions,
        parent: Option<&RouteOptions>,
    ) -> Result<RouteOptions> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ResourcefulError::invalid_options(
                identifier,
                "resource identifier must not be empty",
            ));
        }

        let embed = raw.embed.unwrap_or(false);

        let (singular_name, plural_name, handler_group) = match raw.uses.as_deref() {
            Some(group) => {
                let group = non_empty(identifier, "uses", group)?;
                let singular = identifier.to_lowercase();
                let plural = match raw.resources.as_deref() {
                    Some(plural) => non_empty(identifier, "resources", plural)?.to_lowercase(),
                    None => singular.clone(),
                };
                (singular, plural, group.to_string())
            }
            None => {
                let names = naming::resolve(self.inflector.as_ref(), identifier);
                let group = match parent {
                    Some(parent) if embed => parent.handler_group.clone(),
                    _ => names.default_handler_group,
                };
                (names.singular, names.plural, group)
            }
        };

        let mode = match raw.mode.as_deref() {
            Some(mode) => mode.parse::<Mode>()?,
            None => parent
                .map(|p| p.mode)
                .unwrap_or_else(|| self.config.default_mode()),
        };

        let extra_actions: Vec<String> = [raw.action.as_ref(), raw.adds.as_ref()]
            .into_iter()
            .flatten()
            .flat_map(PipeList::items)
            .collect();

        let filters = if raw.before.is_some() || raw.after.is_some() {
            Some(Filters {
                before: raw.before.as_ref().map(PipeList::items).unwrap_or_default(),
                after: raw.after.as_ref().map(PipeList::items).unwrap_or_default(),
            })
        } else {
            None
        };

        let format_extensions = match raw.formats.as_ref() {
            Some(formats) => Some(format_extensions(identifier, formats)?),
            None => parent.and_then(|p| p.format_extensions.clone()),
        };

        let namespace = raw
            .handles
            .as_deref()
            .or(raw.namespace.as_deref())
            .map(namespace_prefix)
            .unwrap_or_default();

        let path_prefix = match parent {
            None => namespace.clone(),
            Some(parent) => format!("{}{}/{{pid}}/", parent.path_prefix, parent.plural_name),
        };

        let action_names = if embed {
            ActionNameMap::embedded(&singular_name, &plural_name)
        } else {
            ActionNameMap::standard()
        };

        debug!(
            resource = %singular_name,
            plural = %plural_name,
            handler_group = %handler_group,
            mode = %mode,
            embed,
            path_prefix = %path_prefix,
            is_root = parent.is_none(),
            "Normalized resource options"
        );

        Ok(RouteOptions {
            singular_name,
            plural_name,
            handler_group,
            mode,
            extra_actions,
            filters,
            embed,
            format_extensions,
            namespace,
            path_prefix,
            is_root: parent.is_none(),
            action_names,
        })
    }
}

fn non_empty<'a>(identifier: &str, option: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ResourcefulError::invalid_options(
            identifier,
            format!("'{}' must not be empty", option),
        ));
    }
    Ok(value)
}

fn format_extensions(identifier: &str, formats: &PipeList) -> Result<Vec<String>> {
    let items = formats.items();
    if items.is_empty() {
        return Err(ResourcefulError::invalid_options(
            identifier,
            "'formats' must list at least one extension",
        ));
    }

    let mut extensions: Vec<String> = Vec::with_capacity(items.len());
    for ext in items {
        if !FORMAT_EXTENSION_REGEX.is_match(&ext) {
            return Err(ResourcefulError::invalid_options(
                identifier,
                format!(
                    "invalid format extension '{}' (expected letters, digits, '_' or '-')",
                    ext
                ),
            ));
        }
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }
    Ok(extensions)
}

/// `"admin//"` → `"admin/"`, `"/"` → `""`
fn namespace_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}
