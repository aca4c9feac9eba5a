#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for option normalization

use super::{Action, ActionNameMap, Filters, Normalizer, ResourceOptions, RouteOptions};
use crate::config::ResourcefulConfig;
use crate::error::ResourcefulError;
use crate::mode::Mode;
use crate::naming::Inflector;

fn root(identifier: &str, raw: ResourceOptions) -> RouteOptions {
    Normalizer::default()
        .normalize(identifier, &raw, None)
        .expect("normalize root")
}

#[test]
fn test_defaults_for_plain_resource() {
    let opts = root("Widget", ResourceOptions::new());
    assert_eq!(opts.singular_name, "widget");
    assert_eq!(opts.plural_name, "widgets");
    assert_eq!(opts.handler_group, "WidgetHandler");
    assert_eq!(opts.mode, Mode::Fuzzy);
    assert!(opts.extra_actions.is_empty());
    assert_eq!(opts.filters, None);
    assert!(!opts.embed);
    assert_eq!(opts.format_extensions, None);
    assert_eq!(opts.path_prefix, "");
    assert!(opts.is_root);
    assert_eq!(opts.action_names, ActionNameMap::standard());
}

#[test]
fn test_uses_skips_inflection() {
    let opts = root("media", ResourceOptions::new().uses("LibraryHandler"));
    assert_eq!(opts.singular_name, "media");
    assert_eq!(opts.plural_name, "media");
    assert_eq!(opts.handler_group, "LibraryHandler");

    let opts = root(
        "Goose",
        ResourceOptions::new().uses("FlockHandler").resources("Geese"),
    );
    assert_eq!(opts.singular_name, "goose");
    assert_eq!(opts.plural_name, "geese");
}

#[test]
fn test_resources_without_uses_is_ignored() {
    let opts = root("widget", ResourceOptions::new().resources("gizmos"));
    assert_eq!(opts.plural_name, "widgets");
}

#[test]
fn test_empty_identifier_is_rejected() {
    let err = Normalizer::default()
        .normalize("  ", &ResourceOptions::new(), None)
        .unwrap_err();
    assert!(matches!(err, ResourcefulError::InvalidOptions { .. }));
}

#[test]
fn test_empty_uses_is_rejected() {
    let err = Normalizer::default()
        .normalize("widget", &ResourceOptions::new().uses(""), None)
        .unwrap_err();
    assert!(matches!(err, ResourcefulError::InvalidOptions { .. }));
}

#[test]
fn test_explicit_mode_wins_over_config() {
    let normalizer = Normalizer::new(ResourcefulConfig::default().with_default_mode(Mode::Moderate));
    let configured = normalizer
        .normalize("widget", &ResourceOptions::new(), None)
        .unwrap();
    assert_eq!(configured.mode, Mode::Moderate);

    let explicit = normalizer
        .normalize("widget", &ResourceOptions::new().mode(Mode::Strict), None)
        .unwrap();
    assert_eq!(explicit.mode, Mode::Strict);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = Normalizer::default()
        .normalize("widget", &ResourceOptions::new().mode("bogus"), None)
        .unwrap_err();
    assert_eq!(
        err,
        ResourcefulError::InvalidMode {
            value: "bogus".to_string()
        }
    );
}

#[test]
fn test_extra_actions_from_pipes_and_lists() {
    let opts = root(
        "post",
        ResourceOptions::new()
            .action("publish||archive")
            .adds(vec!["preview".to_string()]),
    );
    assert_eq!(opts.extra_actions, vec!["publish", "archive", "preview"]);
}

#[test]
fn test_filters_present_only_when_given() {
    let opts = root("post", ResourceOptions::new().before("auth|csrf"));
    assert_eq!(
        opts.filters,
        Some(Filters {
            before: vec!["auth".to_string(), "csrf".to_string()],
            after: vec![],
        })
    );

    let opts = root("post", ResourceOptions::new().after("audit"));
    assert_eq!(opts.filters.unwrap().after, vec!["audit"]);
}

#[test]
fn test_formats_are_validated_and_deduplicated() {
    let opts = root("report", ResourceOptions::new().formats("json|csv|json"));
    assert_eq!(
        opts.format_extensions,
        Some(vec!["json".to_string(), "csv".to_string()])
    );

    for bad in ["", "|", "json|x.y", "a/b"] {
        let err = Normalizer::default()
            .normalize("report", &ResourceOptions::new().formats(bad), None)
            .unwrap_err();
        assert!(
            matches!(err, ResourcefulError::InvalidOptions { .. }),
            "formats {:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_namespace_and_handles() {
    let opts = root("widget", ResourceOptions::new().namespace("admin//"));
    assert_eq!(opts.namespace, "admin/");
    assert_eq!(opts.path_prefix, "admin/");

    let opts = root(
        "widget",
        ResourceOptions::new().namespace("admin").handles("api/v1/"),
    );
    assert_eq!(opts.path_prefix, "api/v1/");

    let opts = root("widget", ResourceOptions::new().namespace("/"));
    assert_eq!(opts.path_prefix, "");
}

#[test]
fn test_embedded_action_names() {
    let opts = root("photo", ResourceOptions::new().embed(true));
    assert_eq!(opts.action_names.get(Action::Show), "showPhoto");
    assert_eq!(opts.action_names.get(Action::Destroy), "destroyPhoto");
    assert_eq!(opts.action_names.get(Action::Index), "photosIndex");
    assert_eq!(opts.action_names.get(Action::IndexAll), "allPhotosIndex");
    assert_eq!(opts.action_names.iter().count(), 9);
}

#[test]
fn test_standard_action_names() {
    let names = ActionNameMap::standard();
    assert_eq!(names.get(Action::IndexAll), "indexAll");
    assert_eq!(names.get(Action::New), "new");
    assert_eq!(names.iter().count(), 9);
}

#[test]
fn test_child_prefix_and_inheritance() {
    let normalizer = Normalizer::default();
    let parent = normalizer
        .normalize(
            "post",
            &ResourceOptions::new()
                .namespace("blog")
                .mode(Mode::Moderate)
                .formats("json"),
            None,
        )
        .unwrap();

    let child = normalizer
        .normalize("comment", &ResourceOptions::new(), Some(&parent))
        .unwrap();
    assert!(!child.is_root);
    assert_eq!(child.path_prefix, "blog/posts/{pid}/");
    assert_eq!(child.namespace, "");
    assert_eq!(child.mode, Mode::Moderate);
    assert_eq!(child.format_extensions, Some(vec!["json".to_string()]));
    assert_eq!(child.handler_group, "CommentHandler");

    let own = normalizer
        .normalize(
            "comment",
            &ResourceOptions::new().mode("strict").formats("xml"),
            Some(&parent),
        )
        .unwrap();
    assert_eq!(own.mode, Mode::Strict);
    assert_eq!(own.format_extensions, Some(vec!["xml".to_string()]));
}

#[test]
fn test_embedded_child_uses_parent_group() {
    let normalizer = Normalizer::default();
    let parent = normalizer
        .normalize("widget", &ResourceOptions::new().embed(true), None)
        .unwrap();
    let child = normalizer
        .normalize("photo", &ResourceOptions::new().embed(true), Some(&parent))
        .unwrap();
    assert_eq!(child.handler_group, "WidgetHandler");
    assert_eq!(child.action_names.get(Action::Show), "showPhoto");
}

struct ShoutingInflector;

impl Inflector for ShoutingInflector {
    fn singularize(&self, word: &str) -> String {
        word.trim_end_matches('z').to_string()
    }

    fn pluralize(&self, word: &str) -> String {
        format!("{word}z")
    }
}

#[test]
fn test_custom_inflector_is_used() {
    let opts = Normalizer::default()
        .with_inflector(ShoutingInflector)
        .normalize("gadgetz", &ResourceOptions::new(), None)
        .unwrap();
    assert_eq!(opts.singular_name, "gadget");
    assert_eq!(opts.plural_name, "gadgetz");
    assert_eq!(opts.handler_group, "GadgetHandler");
}

#[test]
fn test_options_deserialize_from_json() {
    let raw: ResourceOptions = serde_json::from_str(
        r#"{"uses": "PageHandler", "formats": ["json", "xml"], "embed": true, "before": "auth"}"#,
    )
    .unwrap();
    assert_eq!(raw.uses.as_deref(), Some("PageHandler"));
    assert_eq!(raw.embed, Some(true));
    let opts = root("page", raw);
    assert_eq!(
        opts.format_extensions,
        Some(vec!["json".to_string(), "xml".to_string()])
    );

    let unknown = serde_json::from_str::<ResourceOptions>(r#"{"colour": "blue"}"#);
    assert!(unknown.is_err());
}
