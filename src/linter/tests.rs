#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the route-set linter

use crate::builder::{HandlerRef, RouteRule};
use crate::linter::{has_errors, lint_rules, LintIssue, LintSeverity};
use crate::options::ResourceOptions;
use crate::registry::RecordingRegistry;
use crate::resource::route;
use http::Method;

fn declare(options: ResourceOptions, children: &[(&str, ResourceOptions)]) -> Vec<LintIssue> {
    let mut registry = RecordingRegistry::new();
    let mut set = route(&mut registry, "post", options).expect("root");
    for (identifier, child) in children {
        set = set.with(identifier, child.clone()).expect("child");
    }
    lint_rules(set.rules())
}

#[test]
fn test_lint_clean_tables() {
    for mode in ["strict", "moderate", "permissive", "fuzzy"] {
        let issues = declare(
            ResourceOptions::new().mode(mode).formats("json"),
            &[
                ("comment", ResourceOptions::new()),
                ("image", ResourceOptions::new().embed(true)),
            ],
        );
        assert!(issues.is_empty(), "{mode}: {issues:?}");
    }
}

#[test]
fn test_lint_extra_action_shadowing_canonical_rule() {
    let issues = declare(ResourceOptions::new().mode("strict").action("edit"), &[]);

    let shadowed: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "shadowed_template")
        .collect();
    assert_eq!(shadowed.len(), 1);
    assert_eq!(shadowed[0].severity, LintSeverity::Warning);
    assert_eq!(shadowed[0].location, "GET posts/{id}/edit");
    assert!(shadowed[0].message.contains("PostHandler@edit"));

    // `edit_post` is both the extra action's name and the canonical edit name
    let duplicate: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "duplicate_route_name")
        .collect();
    assert_eq!(duplicate.len(), 1);
    assert_eq!(duplicate[0].location, "name:edit_post");
    assert!(has_errors(&issues));
}

#[test]
fn test_lint_child_named_like_root() {
    let issues = declare(
        ResourceOptions::new().mode("strict"),
        &[("post", ResourceOptions::new())],
    );

    let names: Vec<&str> = issues
        .iter()
        .filter(|i| i.kind == "duplicate_route_name")
        .map(|i| i.location.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["name:create_post", "name:edit_post", "name:post", "name:posts"]
    );
    // the child's unprefixed all-index lands on the root collection path
    assert!(issues
        .iter()
        .any(|i| i.kind == "shadowed_template" && i.location == "GET posts"));
}

#[test]
fn test_lint_different_methods_do_not_shadow() {
    let group = HandlerRef::new("PostHandler", "update");
    let rules = vec![
        RouteRule::handler(Method::PUT, "posts/{id}", group.clone()),
        RouteRule::handler(Method::PATCH, "posts/{id}", group),
    ];
    assert!(lint_rules(&rules).is_empty());
}

#[test]
fn test_lint_issue_builder() {
    let issue = LintIssue::new("name:x", LintSeverity::Warning, "kind", "message")
        .with_suggestion("do this");
    assert_eq!(issue.suggestion.as_deref(), Some("do this"));
    assert_eq!(issue.severity.to_string(), "warning");
    assert!(!has_errors(&[issue]));
}
