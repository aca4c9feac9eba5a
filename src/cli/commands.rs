use crate::config::ResourcefulConfig;
use crate::linter::{has_errors, lint_rules, print_lint_issues, LintSeverity};
use crate::mode::Mode;
use crate::options::{Filters, Normalizer, ResourceOptions};
use crate::registry::{RecordingRegistry, RegisteredRoute};
use crate::resource::route_with;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tracing::debug;

/// Command-line interface for resourceful route tables
///
/// Declares one root resource (plus optional children) against an in-memory
/// registry and prints or lints the resulting route table.
#[derive(Parser)]
#[command(name = "resourceful-gen")]
#[command(about = "Resourceful route table generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the route table for a resource declaration
    Routes {
        #[command(flatten)]
        declaration: Declaration,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Check a resource declaration for shadowed templates and duplicate names
    Lint {
        #[command(flatten)]
        declaration: Declaration,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// A root resource and its children, as given on the command line
#[derive(Args, Debug, Clone)]
pub struct Declaration {
    /// Root resource identifier (e.g. `post`)
    #[arg(short, long)]
    pub resource: String,

    /// Root options as a JSON object (e.g. '{"mode":"strict","formats":"json"}')
    #[arg(long, value_parser = parse_options)]
    pub options: Option<ResourceOptions>,

    /// Nested child resource: NAME or NAME=JSON (repeatable, declared in order)
    #[arg(short, long = "with", value_parser = parse_child)]
    pub with: Vec<ChildDeclaration>,

    /// Mode for declarations that set none (overrides RESOURCEFUL_MODE)
    #[arg(long)]
    pub default_mode: Option<Mode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDeclaration {
    pub identifier: String,
    pub options: ResourceOptions,
}

/// Route table output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn parse_options(s: &str) -> std::result::Result<ResourceOptions, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid resource options: {e}"))
}

fn parse_child(s: &str) -> std::result::Result<ChildDeclaration, String> {
    let (identifier, options) = match s.split_once('=') {
        Some((identifier, json)) => (identifier, parse_options(json)?),
        None => (s, ResourceOptions::default()),
    };
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("child resource name must not be empty".to_string());
    }
    Ok(ChildDeclaration {
        identifier: identifier.to_string(),
        options,
    })
}

/// Parse arguments and run the selected command against stdout
///
/// # Errors
///
/// Returns an error when the declaration is invalid, output fails, or
/// `lint --fail-on-error` finds error-level issues.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &mut out)
}

/// Run one command, writing the route table to `out`
///
/// # Errors
///
/// See [`run_cli`].
pub fn execute(command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Routes {
            declaration,
            output,
        } => {
            let entries = declare(declaration)?;
            write_routes(&entries, *output, out)
        }
        Commands::Lint {
            declaration,
            fail_on_error,
            errors_only,
        } => {
            let entries = declare(declaration)?;
            let rules: Vec<_> = entries.into_iter().map(|e| e.rule).collect();
            let mut issues = lint_rules(&rules);
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);

            if *fail_on_error && has_errors(&issues) {
                let count = issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .count();
                bail!("{count} lint error(s) in routes for '{}'", declaration.resource);
            }
            Ok(())
        }
    }
}

/// Declare the resources against a fresh recording registry
///
/// # Errors
///
/// Propagates normalization errors with the offending resource as context.
pub fn declare(declaration: &Declaration) -> Result<Vec<RegisteredRoute>> {
    let mut config = ResourcefulConfig::from_env();
    if let Some(mode) = declaration.default_mode {
        config = config.with_default_mode(mode);
    }
    debug!(default_mode = %config.default_mode(), "Declaring resources");

    let normalizer = Normalizer::new(config);
    let mut registry = RecordingRegistry::new();
    let mut set = route_with(
        &normalizer,
        &mut registry,
        &declaration.resource,
        declaration.options.clone().unwrap_or_default(),
    )
    .with_context(|| format!("Failed to declare resource '{}'", declaration.resource))?;

    for child in &declaration.with {
        set = set
            .with(&child.identifier, child.options.clone())
            .with_context(|| {
                format!(
                    "Failed to declare child '{}' of '{}'",
                    child.identifier, declaration.resource
                )
            })?;
    }

    Ok(registry.into_entries())
}

fn write_routes(entries: &[RegisteredRoute], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for entry in entries {
                writeln!(out, "{}{}", entry.rule, filter_suffix(&entry.filters))?;
            }
            writeln!(out, "{} route(s)", entries.len())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries).context("Failed to write JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(entries).context("Failed to render YAML")?;
            out.write_all(yaml.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

fn filter_suffix(groups: &[Filters]) -> String {
    let mut suffix = String::new();
    for group in groups {
        if !group.before.is_empty() {
            suffix.push_str(&format!(" before={}", group.before.join("|")));
        }
        if !group.after.is_empty() {
            suffix.push_str(&format!(" after={}", group.after.join("|")));
        }
    }
    suffix
}
