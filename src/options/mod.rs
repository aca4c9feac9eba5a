//! # Options Module
//!
//! Turns the loose, overlapping options a caller attaches to a resource
//! declaration into one fully determined [`RouteOptions`] record per resource
//! level, so the route builder never has to default or disambiguate anything.
//!
//! ## Recognized Options
//!
//! | option | meaning |
//! |---|---|
//! | `uses` | explicit handler group; the identifier is used literally |
//! | `resources` | plural override (with `uses`) |
//! | `action` / `adds` | extra GET member actions, `"publish\|archive"` or a list |
//! | `mode` | `strict`, `moderate`, `permissive` or `fuzzy` |
//! | `before` / `after` | filters wrapped around every rule of the level |
//! | `embed` | serve the resource from its parent's handler group |
//! | `formats` | allowed `.{format}` extensions, `"json\|xml"` or a list |
//! | `namespace` / `handles` | path prefix |
//!
//! ## Action Names
//!
//! Each level carries an [`ActionNameMap`] covering the nine logical actions.
//! A resource with its own handler group uses the bare names (`show`,
//! `index`, ...). An embedded resource shares its parent's group, so its
//! methods are disambiguated by name: `showPhoto`, `photosIndex`,
//! `allPhotosIndex`.

mod normalize;
mod types;
#[cfg(test)]
mod tests;

pub use normalize::Normalizer;
pub use types::{Action, ActionNameMap, Filters, PipeList, ResourceOptions, RouteOptions};
