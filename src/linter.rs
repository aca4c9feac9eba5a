//! # Route-Set Linter Module
//!
//! Checks a generated route table for registrations that cannot both be
//! reached or that would confuse reverse routing.
//!
//! ## Checks Performed
//!
//! 1. **shadowed_template** - the same method and path template registered
//!    more than once; first-match registries never reach the later rule
//! 2. **duplicate_route_name** - two rules share a route name
//!
//! ## Usage
//!
//! ```rust
//! use resourceful::linter::{has_errors, lint_rules};
//! use resourceful::options::ResourceOptions;
//! use resourceful::registry::RecordingRegistry;
//! use resourceful::resource::route;
//!
//! let mut registry = RecordingRegistry::new();
//! let set = route(&mut registry, "widget", ResourceOptions::new().mode("strict")).unwrap();
//! let issues = lint_rules(set.rules());
//! assert!(issues.is_empty());
//! assert!(!has_errors(&issues));
//! ```

use crate::builder::RouteRule;
use std::collections::HashMap;
use std::fmt;

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - the route table is ambiguous
    Error,
    /// Warning - a rule is unreachable but the table still works
    Warning,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
        };
        f.write_str(label)
    }
}

/// A lint issue found in a route table
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "GET posts/{id}/edit", "name:edit_post")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "shadowed_template")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a route table in emission order
///
/// Each repeated registration is reported once, against the later rule.
#[must_use]
pub fn lint_rules(rules: &[RouteRule]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut templates: HashMap<(&str, &str), usize> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();

    for (position, rule) in rules.iter().enumerate() {
        let key = (rule.method.as_str(), rule.path_template.as_str());
        if let Some(first) = templates.get(&key) {
            issues.push(
                LintIssue::new(
                    format!("{} {}", rule.method, rule.path_template),
                    LintSeverity::Warning,
                    "shadowed_template",
                    format!(
                        "Rule #{} ({}) is shadowed by rule #{} ({})",
                        position, rule.target, first, rules[*first].target
                    ),
                )
                .with_suggestion("Rename the extra action or drop the duplicate declaration"),
            );
        } else {
            templates.insert(key, position);
        }

        let Some(name) = rule.name.as_deref() else {
            continue;
        };
        if let Some(first) = names.get(name) {
            issues.push(
                LintIssue::new(
                    format!("name:{name}"),
                    LintSeverity::Error,
                    "duplicate_route_name",
                    format!(
                        "Route name '{}' is used by rule #{} ({}) and rule #{} ({})",
                        name, first, rules[*first].path_template, position, rule.path_template
                    ),
                )
                .with_suggestion("Route names must be unique for reverse routing"),
            );
        } else {
            names.insert(name, position);
        }
    }

    issues
}

/// Whether any issue is error-level
#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues to stderr, grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        eprintln!("✅ No lint issues found!");
        return;
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();
    eprintln!("\n📋 Lint Results:");
    eprintln!(
        "   {} error(s), {} warning(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning)
    );

    let sections = [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
    ];
    for (severity, heading) in sections {
        let mut matching = issues.iter().filter(|i| i.severity == severity).peekable();
        if matching.peek().is_none() {
            continue;
        }
        eprintln!("{heading}");
        for issue in matching {
            eprintln!("   [{}] {}", issue.kind, issue.location);
            eprintln!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("      💡 Suggestion: {}", suggestion);
            }
        }
        eprintln!();
    }
}
