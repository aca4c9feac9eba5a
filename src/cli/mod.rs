//! # CLI Module
//!
//! Command-line front end for inspecting the route table a resource
//! declaration produces, without wiring it into an application.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! ```bash
//! resourceful-gen routes --resource post \
//!     --options '{"mode":"strict","formats":"json|xml"}' \
//!     --with comment \
//!     --with 'image={"embed":true}' \
//!     --output yaml
//! ```
//!
//! Options:
//! - `--resource <ID>` - Root resource identifier (required)
//! - `--options <JSON>` - Root options, same keys as [`ResourceOptions`]
//! - `--with <ID>[=<JSON>]` - Child resource, repeatable
//! - `--default-mode <MODE>` - Mode for declarations that set none
//! - `--output <FORMAT>` - `table` (default), `json` or `yaml`
//!
//! ### `lint`
//!
//! Same declaration flags, plus `--fail-on-error` and `--errors-only`:
//!
//! ```bash
//! resourceful-gen lint --resource post --options '{"action":"edit"}' --fail-on-error
//! ```
//!
//! Without `--default-mode`, the default comes from `RESOURCEFUL_MODE`
//! (see [`ResourcefulConfig::from_env`]). Logging is configured through
//! `RESOURCEFUL_LOG_LEVEL` and `RESOURCEFUL_LOG_FORMAT` and goes to stderr.
//!
//! [`ResourceOptions`]: crate::options::ResourceOptions
//! [`ResourcefulConfig::from_env`]: crate::config::ResourcefulConfig::from_env

mod commands;


pub use commands::{
    declare, execute, run_cli, ChildDeclaration, Cli, Commands, Declaration, OutputFormat,
};
