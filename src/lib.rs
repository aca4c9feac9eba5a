//! # Resourceful
//!
//! **Resourceful** generates the full family of HTTP route rules for a REST
//! resource from a single declaration, and hands them to whatever router the
//! host application uses.
//!
//! ## Overview
//!
//! Declaring `post` yields the canonical create, edit, show, delete, store,
//! update and index routes under `posts/...`, all dispatched to the
//! `PostHandler` group. Options add extra member actions, `.{format}` variants,
//! filter groups, namespaces and trailing-slash behaviour. Nested children
//! (`post` → `comment`) get routes under `posts/{pid}/comments/...`.
//!
//! ## Architecture
//!
//! - **[`naming`]** - singular/plural resolution and handler group names
//! - **[`options`]** - raw declaration options and their normalization
//! - **[`mode`]** - the four routing modes and their trailing-slash policies
//! - **[`builder`]** - pure route table emission, in a fixed order
//! - **[`registry`]** - the seam to the host router ([`RouteRegistry`])
//! - **[`resource`]** - the public `route(...).with(...)` surface
//! - **[`linter`]** - shadowed template and duplicate name checks
//! - **[`config`]** - default mode from the environment
//! - **[`cli`]** / **[`logging`]** - the `resourceful-gen` binary
//!
//! ### Declaration Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Resource as resource::route
//!     participant Norm as options::Normalizer
//!     participant Build as builder::build_rules
//!     participant Reg as RouteRegistry
//!
//!     App->>Resource: route(&mut registry, "post", options)
//!     Resource->>Norm: normalize("post", options, None)
//!     Norm-->>Resource: RouteOptions (root)
//!     Resource->>Build: build_rules(root, mode.policy())
//!     Build-->>Resource: Vec<RouteRule>
//!     Resource->>Reg: register / register_redirect (inside register_group if filtered)
//!     App->>Resource: .with("comment", options)
//!     Resource->>Norm: normalize("comment", options, Some(root))
//!     Resource->>Build: build_rules(child, policy)
//!     Resource->>Reg: register child rules
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use resourceful::{route, Mode, RecordingRegistry, ResourceOptions};
//!
//! # fn main() -> Result<(), resourceful::ResourcefulError> {
//! let mut registry = RecordingRegistry::new();
//! route(
//!     &mut registry,
//!     "post",
//!     ResourceOptions::new().mode(Mode::Strict).action("publish"),
//! )?
//! .with("comment", ResourceOptions::new())?;
//!
//! for rule in registry.rules() {
//!     println!("{rule}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Routing Modes
//!
//! | Mode         | Trailing slash | Redirect | `{id}/destroy`, `new` aliases |
//! |--------------|----------------|----------|-------------------------------|
//! | `strict`     | rejected       | -        | no                            |
//! | `moderate`   | redirected     | 301      | no                            |
//! | `permissive` | redirected     | 302      | no                            |
//! | `fuzzy`      | redirected     | 302      | yes                           |
//!
//! `fuzzy` is the default unless `RESOURCEFUL_MODE` says otherwise.
//!
//! ## Logging
//!
//! The library emits `tracing` events (`debug` per rule, `info` per resource
//! level) and never installs a subscriber itself.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod linter;
pub mod logging;
pub mod mode;
pub mod naming;
pub mod options;
pub mod registry;
pub mod resource;

pub use builder::{HandlerRef, RouteRule, RouteTarget};
pub use config::ResourcefulConfig;
pub use error::{ResourcefulError, Result};
pub use mode::{Mode, ModePolicy};
pub use options::{ResourceOptions, RouteOptions};
pub use registry::{RecordingRegistry, RedirectEmitter, RouteRegistry};
pub use resource::{route, route_with, RouteSet};
