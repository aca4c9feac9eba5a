use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A list option given either as `"a|b|c"` or as an explicit list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipeList {
    Piped(String),
    List(Vec<String>),
}

impl PipeList {
    /// Entries in declaration order, trimmed, empty segments dropped
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            PipeList::Piped(s) => s.split('|').collect(),
            PipeList::List(v) => v.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for PipeList {
    fn from(s: &str) -> Self {
        PipeList::Piped(s.to_string())
    }
}

impl From<String> for PipeList {
    fn from(s: String) -> Self {
        PipeList::Piped(s)
    }
}

impl From<Vec<String>> for PipeList {
    fn from(v: Vec<String>) -> Self {
        PipeList::List(v)
    }
}

impl From<&[&str]> for PipeList {
    fn from(v: &[&str]) -> Self {
        PipeList::List(v.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Options a caller may attach to a resource declaration
///
/// Every field is optional; the normalizer fills in conventions for whatever
/// is missing. The struct deserializes from the same keys a declaration file
/// or JSON blob would use:
///
/// ```rust
/// use resourceful::options::ResourceOptions;
///
/// let opts: ResourceOptions =
///     serde_json::from_str(r#"{"mode": "strict", "action": "publish|archive"}"#).unwrap();
/// assert_eq!(opts.mode.as_deref(), Some("strict"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceOptions {
    /// Explicit handler group; disables inflection of the identifier
    pub uses: Option<String>,
    /// Plural name override, honored together with `uses`
    pub resources: Option<String>,
    /// Extra GET-only member actions
    pub action: Option<PipeList>,
    /// Synonym for `action`
    pub adds: Option<PipeList>,
    /// Routing mode name (`strict`, `moderate`, `permissive`, `fuzzy`)
    pub mode: Option<String>,
    /// Filters run before every handler of this level
    pub before: Option<PipeList>,
    /// Filters run after every handler of this level
    pub after: Option<PipeList>,
    /// Route this resource through the parent's handler group
    pub embed: Option<bool>,
    /// Allowed `.{format}` extensions
    pub formats: Option<PipeList>,
    /// Path prefix for this resource
    pub namespace: Option<String>,
    /// Path prefix for this resource; wins over `namespace`
    pub handles: Option<String>,
}

impl ResourceOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn uses(mut self, group: impl Into<String>) -> Self {
        self.uses = Some(group.into());
        self
    }

    #[must_use]
    pub fn resources(mut self, plural: impl Into<String>) -> Self {
        self.resources = Some(plural.into());
        self
    }

    #[must_use]
    pub fn action(mut self, actions: impl Into<PipeList>) -> Self {
        self.action = Some(actions.into());
        self
    }

    #[must_use]
    pub fn adds(mut self, actions: impl Into<PipeList>) -> Self {
        self.adds = Some(actions.into());
        self
    }

    /// Accepts either a [`Mode`] or a raw mode name
    #[must_use]
    pub fn mode(mut self, mode: impl ToString) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    #[must_use]
    pub fn before(mut self, filters: impl Into<PipeList>) -> Self {
        self.before = Some(filters.into());
        self
    }

    #[must_use]
    pub fn after(mut self, filters: impl Into<PipeList>) -> Self {
        self.after = Some(filters.into());
        self
    }

    #[must_use]
    pub fn embed(mut self, embed: bool) -> Self {
        self.embed = Some(embed);
        self
    }

    #[must_use]
    pub fn formats(mut self, formats: impl Into<PipeList>) -> Self {
        self.formats = Some(formats.into());
        self
    }

    #[must_use]
    pub fn namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespace = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn handles(mut self, prefix: impl Into<String>) -> Self {
        self.handles = Some(prefix.into());
        self
    }
}

/// Before/after filter names applied to a whole resource level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// The nine logical actions every resource level maps to handler methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Index,
    IndexAll,
    Show,
    New,
    Edit,
    Create,
    Store,
    Update,
    Destroy,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Index,
        Action::IndexAll,
        Action::Show,
        Action::New,
        Action::Edit,
        Action::Create,
        Action::Store,
        Action::Update,
        Action::Destroy,
    ];

    /// Handler method name when the resource has its own handler group
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::IndexAll => "indexAll",
            Action::Show => "show",
            Action::New => "new",
            Action::Edit => "edit",
            Action::Create => "create",
            Action::Store => "store",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Action::Index => 0,
            Action::IndexAll => 1,
            Action::Show => 2,
            Action::New => 3,
            Action::Edit => 4,
            Action::Create => 5,
            Action::Store => 6,
            Action::Update => 7,
            Action::Destroy => 8,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical action → handler method name, total over [`Action::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNameMap {
    names: [String; 9],
}

impl ActionNameMap {
    /// Every action maps to its own bare name (`show` → `show`)
    #[must_use]
    pub fn standard() -> Self {
        Self {
            names: Action::ALL.map(|a| a.as_str().to_string()),
        }
    }

    /// Names for a resource served by a shared handler group
    ///
    /// `show` → `show<Singular>`, `index` → `<plural>Index`,
    /// `indexAll` → `all<Plural>Index`.
    #[must_use]
    pub fn embedded(singular: &str, plural: &str) -> Self {
        let singular = crate::naming::capitalize(singular);
        let names = Action::ALL.map(|a| match a {
            Action::Index => format!("{}Index", plural.to_lowercase()),
            Action::IndexAll => format!("all{}Index", crate::naming::capitalize(plural)),
            other => format!("{}{}", other.as_str(), singular),
        });
        Self { names }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, action: Action) -> &str {
        &self.names[action.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &str)> + '_ {
        Action::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

/// Fully resolved configuration for one resource level
///
/// Produced by the [`Normalizer`](super::Normalizer); the route builder reads
/// it without further defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOptions {
    /// Lower-cased, non-empty
    pub singular_name: String,
    /// Lower-cased, non-empty
    pub plural_name: String,
    /// Handler group every rule of this level dispatches to
    pub handler_group: String,
    pub mode: Mode,
    /// Custom GET-only member actions, in declaration order
    pub extra_actions: Vec<String>,
    pub filters: Option<Filters>,
    pub embed: bool,
    /// Allowed `.{format}` extensions; `None` means no format routes
    pub format_extensions: Option<Vec<String>>,
    /// This level's own namespace (`""` or ending in `/`)
    pub namespace: String,
    /// Prefix of every path of this level (`""` or ending in `/`)
    pub path_prefix: String,
    pub is_root: bool,
    pub action_names: ActionNameMap,
}
