#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for route table emission

use super::{build_rules, RouteRule, RouteTarget};
use crate::mode::Mode;
use crate::options::{Normalizer, ResourceOptions, RouteOptions};
use http::Method;

fn normalize(identifier: &str, raw: ResourceOptions, parent: Option<&RouteOptions>) -> RouteOptions {
    Normalizer::default()
        .normalize(identifier, &raw, parent)
        .expect("normalize")
}

fn summary(rules: &[RouteRule]) -> Vec<String> {
    rules
        .iter()
        .map(|r| format!("{} {} {}", r.method, r.path_template, r.target))
        .collect()
}

#[test]
fn test_strict_root_sequence() {
    let opts = normalize("widget", ResourceOptions::new().mode("strict"), None);
    let rules = build_rules(&opts, opts.mode.policy());

    assert_eq!(
        summary(&rules),
        vec![
            "GET widgets/create WidgetHandler@create",
            "GET widgets/{id}/edit WidgetHandler@edit",
            "GET widgets/{id} WidgetHandler@show",
            "GET widgets/{id}/delete WidgetHandler@destroy",
            "DELETE widgets/{id} WidgetHandler@destroy",
            "POST widgets WidgetHandler@store",
            "PUT widgets/{id} WidgetHandler@update",
            "PATCH widgets/{id} WidgetHandler@update",
            "GET widgets WidgetHandler@index",
        ]
    );

    let names: Vec<Option<&str>> = rules.iter().map(|r| r.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![
            Some("create_widget"),
            Some("edit_widget"),
            Some("widget"),
            None,
            None,
            None,
            None,
            None,
            Some("widgets"),
        ]
    );
    assert!(rules.iter().all(|r| !r.is_redirect()));
}

#[test]
fn test_fuzzy_root_full_sequence() {
    let opts = normalize(
        "widget",
        ResourceOptions::new().action("publish").formats("json|xml"),
        None,
    );
    let rules = build_rules(&opts, Mode::Fuzzy.policy());

    assert_eq!(
        summary(&rules),
        vec![
            "GET widgets/{id}/publish WidgetHandler@publish",
            "GET widgets/create.{format} WidgetHandler@create",
            "GET widgets/{id}/edit.{format} WidgetHandler@edit",
            "GET widgets/{id}.{format} WidgetHandler@show",
            "GET widgets.{format} WidgetHandler@index",
            "GET widgets/create WidgetHandler@create",
            "GET widgets/{id}/edit WidgetHandler@edit",
            "GET widgets/{id} WidgetHandler@show",
            "GET widgets/{id}/delete WidgetHandler@destroy",
            "DELETE widgets/{id} WidgetHandler@destroy",
            "POST widgets WidgetHandler@store",
            "PUT widgets/{id} WidgetHandler@update",
            "PATCH widgets/{id} WidgetHandler@update",
            "GET widgets WidgetHandler@index",
            "GET widgets/{id}/destroy WidgetHandler@destroy",
            "GET widgets/new WidgetHandler@create",
            "GET widgets/{id}/edit/ -> widgets/{id}/edit (302)",
            "GET widgets/create/ -> widgets/create (302)",
            "GET widgets/{id}/ -> widgets/{id} (302)",
            "GET widgets/ -> widgets (302)",
            "DELETE widgets/{id}/ WidgetHandler@destroy",
            "PUT widgets/{id}/ WidgetHandler@update",
            "PATCH widgets/{id}/ WidgetHandler@update",
        ]
    );

    assert_eq!(rules[0].name.as_deref(), Some("publish_widget"));
    let json_xml = Some(vec!["json".to_string(), "xml".to_string()]);
    for rule in &rules[1..5] {
        assert_eq!(rule.format_constraint, json_xml);
        assert_eq!(rule.name, None);
    }
    assert!(rules[5..].iter().all(|r| r.format_constraint.is_none()));
}

#[test]
fn test_moderate_redirects_without_aliases() {
    let opts = normalize("widget", ResourceOptions::new(), None);
    let rules = build_rules(&opts, Mode::Moderate.policy());

    let redirects: Vec<&RouteRule> = rules.iter().filter(|r| r.is_redirect()).collect();
    assert_eq!(redirects.len(), 4);
    assert!(redirects.iter().all(|r| r.redirect_status() == Some(301)));
    assert!(!rules.iter().any(|r| r.path_template.ends_with("/destroy")));
    assert!(!rules.iter().any(|r| r.path_template.ends_with("/new")));
    assert!(!rules
        .iter()
        .any(|r| !r.is_redirect() && r.path_template.ends_with('/')));
}

#[test]
fn test_permissive_uses_temporary_redirects() {
    let opts = normalize("widget", ResourceOptions::new(), None);
    let rules = build_rules(&opts, Mode::Permissive.policy());
    let statuses: Vec<u16> = rules.iter().filter_map(RouteRule::redirect_status).collect();
    assert_eq!(statuses, vec![302, 302, 302, 302]);
}

#[test]
fn test_child_index_pair_and_prefix() {
    let parent = normalize("post", ResourceOptions::new(), None);
    let child = normalize("comment", ResourceOptions::new(), Some(&parent));
    let rules = build_rules(&child, Mode::Strict.policy());

    assert_eq!(rules[0].path_template, "posts/{pid}/comments/create");
    let index: Vec<(&str, Option<&str>, String)> = rules
        .iter()
        .filter(|r| r.method == Method::GET && r.path_template.ends_with("comments"))
        .map(|r| {
            (
                r.path_template.as_str(),
                r.name.as_deref(),
                r.target.to_string(),
            )
        })
        .collect();
    assert_eq!(
        index,
        vec![
            (
                "comments",
                Some("all_comments"),
                "CommentHandler@indexAll".to_string()
            ),
            (
                "posts/{pid}/comments",
                Some("comments"),
                "CommentHandler@index".to_string()
            ),
        ]
    );
}

#[test]
fn test_child_redirects_keep_parent_prefix() {
    let parent = normalize("post", ResourceOptions::new(), None);
    let child = normalize("comment", ResourceOptions::new(), Some(&parent));
    let rules = build_rules(&child, Mode::Fuzzy.policy());

    let redirects: Vec<(&str, &str)> = rules
        .iter()
        .filter_map(|r| r.redirect_target().map(|to| (r.path_template.as_str(), to)))
        .collect();
    assert_eq!(
        redirects,
        vec![
            ("posts/{pid}/comments/{id}/edit/", "posts/{pid}/comments/{id}/edit"),
            ("posts/{pid}/comments/create/", "posts/{pid}/comments/create"),
            ("posts/{pid}/comments/{id}/", "posts/{pid}/comments/{id}"),
            ("posts/{pid}/comments/", "posts/{pid}/comments"),
        ]
    );
}

#[test]
fn test_child_namespace_prefixes_all_index_only() {
    let parent = normalize("post", ResourceOptions::new().namespace("blog"), None);
    let child = normalize(
        "comment",
        ResourceOptions::new().namespace("feed"),
        Some(&parent),
    );
    let rules = build_rules(&child, Mode::Strict.policy());

    let all = rules
        .iter()
        .find(|r| r.name.as_deref() == Some("all_comments"))
        .unwrap();
    assert_eq!(all.path_template, "feed/comments");
    let per_parent = rules
        .iter()
        .find(|r| r.name.as_deref() == Some("comments"))
        .unwrap();
    assert_eq!(per_parent.path_template, "blog/posts/{pid}/comments");
}

#[test]
fn test_embedded_child_dispatches_to_parent_group() {
    let parent = normalize("widget", ResourceOptions::new().embed(true), None);
    let child = normalize(
        "photo",
        ResourceOptions::new().embed(true).action("rotate"),
        Some(&parent),
    );
    let rules = build_rules(&child, Mode::Strict.policy());

    let show = rules
        .iter()
        .find(|r| r.name.as_deref() == Some("photo"))
        .unwrap();
    assert_eq!(show.target.to_string(), "WidgetHandler@showPhoto");
    let rotate = rules
        .iter()
        .find(|r| r.name.as_deref() == Some("rotate_photo"))
        .unwrap();
    assert_eq!(rotate.target.to_string(), "WidgetHandler@rotate");
    let all = rules
        .iter()
        .find(|r| r.name.as_deref() == Some("all_photos"))
        .unwrap();
    assert_eq!(all.target.to_string(), "WidgetHandler@allPhotosIndex");
    assert!(rules
        .iter()
        .filter_map(RouteRule::handler_ref)
        .all(|h| h.group == "WidgetHandler"));
}

#[test]
fn test_rule_display_and_serialization() {
    let opts = normalize("widget", ResourceOptions::new().formats("json"), None);
    let rules = build_rules(&opts, Mode::Fuzzy.policy());

    assert_eq!(
        rules[0].to_string(),
        "GET     widgets/create.{format} WidgetHandler@create format=json"
    );
    let json = serde_json::to_value(&rules[4]).unwrap();
    assert_eq!(json["method"], "GET");
    assert_eq!(json["name"], "create_widget");
    assert_eq!(json["target"]["kind"], "handler");
    assert_eq!(json["target"]["group"], "WidgetHandler");

    let redirect = rules.iter().find(|r| r.is_redirect()).unwrap();
    let json = serde_json::to_value(redirect).unwrap();
    assert_eq!(
        json["target"],
        serde_json::json!({"kind": "redirect", "to": "widgets/{id}/edit", "status": 302})
    );
    assert!(matches!(redirect.target, RouteTarget::Redirect { status: 302, .. }));
}
