use super::rule::{HandlerRef, RouteRule};
use crate::mode::ModePolicy;
use crate::options::{Action, RouteOptions};
use http::Method;

/// Emit the ordered rule list for one resource level
///
/// The order is fixed; registries with first-match semantics rely on it:
///
/// 1. extra GET member actions (`posts/{id}/publish`)
/// 2. `.{format}` variants of create, edit, show and index
/// 3. canonical rules: create, edit, show, `{id}/delete`, DELETE, POST,
///    PUT and PATCH
/// 4. index: one collection rule for a root, an unprefixed `all_<plural>`
///    rule plus the per-parent collection rule for a child
/// 5. fuzzy aliases `{id}/destroy` and `new`
/// 6. trailing-slash redirects for edit, create, show and the collection
/// 7. trailing-slash handlers for DELETE/PUT/PATCH on the member path
///
/// Duplicate templates across steps are kept; resolving them is the
/// registry's business. The builder cannot fail on normalized options.
#[must_use]
pub fn build_rules(options: &RouteOptions, policy: ModePolicy) -> Vec<RouteRule> {
    let mut emitter = RuleEmitter::new(options);

    emitter.extra_actions();
    if let Some(formats) = options.format_extensions.as_ref() {
        emitter.format_variants(formats);
    }
    emitter.canonical();
    emitter.index();
    if policy.fuzzy_matching {
        emitter.fuzzy_aliases();
    }
    if policy.preserve_slashes {
        if let Some(status) = policy.redirect_code {
            emitter.slash_redirects(status);
        }
        if policy.fuzzy_matching {
            emitter.slash_tolerant_handlers();
        }
    }

    emitter.rules
}

struct RuleEmitter<'a> {
    options: &'a RouteOptions,
    /// `<prefix><plural>`
    collection: String,
    /// `<prefix><plural>/{id}`
    member: String,
    rules: Vec<RouteRule>,
}

impl<'a> RuleEmitter<'a> {
    fn new(options: &'a RouteOptions) -> Self {
        let collection = format!("{}{}", options.path_prefix, options.plural_name);
        let member = format!("{}/{{id}}", collection);
        RuleEmitter {
            options,
            collection,
            member,
            rules: Vec::with_capacity(24),
        }
    }

    fn target(&self, action: Action) -> HandlerRef {
        HandlerRef::new(
            self.options.handler_group.as_str(),
            self.options.action_names.get(action),
        )
    }

    fn push(&mut self, method: Method, path: String, action: Action) -> &mut RouteRule {
        let rule = RouteRule::handler(method, path, self.target(action));
        self.rules.push(rule);
        let last = self.rules.len() - 1;
        &mut self.rules[last]
    }

    fn push_named(&mut self, method: Method, path: String, action: Action, name: String) {
        self.push(method, path, action).name = Some(name);
    }

    fn extra_actions(&mut self) {
        let options = self.options;
        for action in &options.extra_actions {
            let rule = RouteRule::handler(
                Method::GET,
                format!("{}/{}", self.member, action),
                HandlerRef::new(options.handler_group.as_str(), action.as_str()),
            )
            .named(format!("{}_{}", action, options.singular_name));
            self.rules.push(rule);
        }
    }

    fn format_variants(&mut self, formats: &[String]) {
        let variants = [
            (format!("{}/create.{{format}}", self.collection), Action::Create),
            (format!("{}/edit.{{format}}", self.member), Action::Edit),
            (format!("{}.{{format}}", self.member), Action::Show),
            (format!("{}.{{format}}", self.collection), Action::Index),
        ];
        for (path, action) in variants {
            self.push(Method::GET, path, action).format_constraint = Some(formats.to_vec());
        }
    }

    fn canonical(&mut self) {
        let options = self.options;
        let singular = options.singular_name.as_str();
        let collection = self.collection.clone();
        let member = self.member.clone();

        self.push_named(
            Method::GET,
            format!("{}/create", collection),
            Action::Create,
            format!("create_{}", singular),
        );
        self.push_named(
            Method::GET,
            format!("{}/edit", member),
            Action::Edit,
            format!("edit_{}", singular),
        );
        self.push_named(Method::GET, member.clone(), Action::Show, singular.to_string());
        self.push(Method::GET, format!("{}/delete", member), Action::Destroy);
        self.push(Method::DELETE, member.clone(), Action::Destroy);
        self.push(Method::POST, collection, Action::Store);
        self.push(Method::PUT, member.clone(), Action::Update);
        self.push(Method::PATCH, member, Action::Update);
    }

    fn index(&mut self) {
        let options = self.options;
        let plural = options.plural_name.as_str();
        if !options.is_root {
            self.push_named(
                Method::GET,
                format!("{}{}", options.namespace, plural),
                Action::IndexAll,
                format!("all_{}", plural),
            );
        }
        self.push_named(
            Method::GET,
            self.collection.clone(),
            Action::Index,
            plural.to_string(),
        );
    }

    fn fuzzy_aliases(&mut self) {
        self.push(Method::GET, format!("{}/destroy", self.member), Action::Destroy);
        self.push(Method::GET, format!("{}/new", self.collection), Action::Create);
    }

    /// Redirect targets keep the full prefix, so nested paths stay nested.
    fn slash_redirects(&mut self, status: u16) {
        let canonical = [
            format!("{}/edit", self.member),
            format!("{}/create", self.collection),
            self.member.clone(),
            self.collection.clone(),
        ];
        for to in canonical {
            self.rules
                .push(RouteRule::redirect(format!("{}/", to), to, status));
        }
    }

    fn slash_tolerant_handlers(&mut self) {
        let path = format!("{}/", self.member);
        self.push(Method::DELETE, path.clone(), Action::Destroy);
        self.push(Method::PUT, path.clone(), Action::Update);
        self.push(Method::PATCH, path, Action::Update);
    }
}
