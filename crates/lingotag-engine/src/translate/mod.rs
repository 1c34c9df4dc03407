use std::collections::HashMap;

use crate::catalog::{Catalog, interpolate};
use crate::parsing::ParseError;
use crate::render::{ComponentMap, render_text};

/// When a translation cannot be rendered, decides whether the caller's
/// fallback is used or the failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fall back on a missing resource and on any parse failure.
    #[default]
    OnAnyFailure,
    /// Fall back only on a missing resource; malformed markup is returned
    /// as an error so it can be fixed instead of silently hidden.
    OnMissingResource,
}

/// Renders translated, tag-marked text against a component map, falling
/// back to a caller-supplied alternative when the resource cannot be
/// rendered.
///
/// A missing resource always uses the fallback (there is nothing to show
/// otherwise). Whether a parse failure also does is the [`FallbackPolicy`].
#[derive(Debug)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    policy: FallbackPolicy,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_policy(catalog, FallbackPolicy::default())
    }

    pub fn with_policy(catalog: &'a Catalog, policy: FallbackPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Looks up `namespace`/`key`, interpolates `vars`, parses the result,
    /// and renders it through `components`.
    pub fn render<R>(
        &self,
        namespace: &str,
        key: &str,
        vars: &HashMap<String, String>,
        components: &ComponentMap<R>,
        fallback: impl FnOnce() -> Vec<R>,
    ) -> Result<Vec<R>, ParseError> {
        let Some(template) = self.catalog.resource(namespace, key) else {
            return Ok(fallback());
        };
        let text = interpolate(template, vars);

        match render_text(&text, components) {
            Ok(rendered) => Ok(rendered),
            Err(err) => match self.policy {
                FallbackPolicy::OnAnyFailure => Ok(fallback()),
                FallbackPolicy::OnMissingResource => Err(err),
            },
        }
    }
}
