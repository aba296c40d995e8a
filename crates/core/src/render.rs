//! Instance rendering.
//!
//! Turns a registered template plus a caller-supplied content map into an
//! isolated subtree. Resolution is per-slot: a supplied non-empty fragment
//! wins, anything else falls back to the contract's default content. Content
//! supplied for a slot the contract does not declare is dropped (logged at
//! debug level), matching the forgiving behaviour of the whole mechanism.

use crate::error::RenderResult;
use crate::kind::CardKind;
use crate::registry::Registry;
use crate::scope::{scope_markup, scope_style};
use cardkit_types::SlotName;
use std::collections::HashMap;

/// Content supplied for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text; HTML-escaped on insertion.
    Text(String),
    /// Pre-built markup; inserted verbatim. The caller vouches for it.
    Html(String),
    /// A previously rendered subtree, enabling nested composition.
    Tree(Subtree),
}

impl Fragment {
    /// Whether this fragment counts as "empty" for fallback purposes.
    ///
    /// Whitespace-only text and markup are treated as absent, triggering the
    /// slot's default content.
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Text(text) => text.trim().is_empty(),
            Fragment::Html(html) => html.trim().is_empty(),
            Fragment::Tree(_) => false,
        }
    }

    fn to_html(&self) -> String {
        match self {
            Fragment::Text(text) => escape_html(text),
            Fragment::Html(html) => html.clone(),
            Fragment::Tree(subtree) => subtree.as_html().to_string(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<Subtree> for Fragment {
    fn from(subtree: Subtree) -> Self {
        Fragment::Tree(subtree)
    }
}

/// Slot name to supplied content, for one render call.
pub type ContentMap = HashMap<SlotName, Fragment>;

/// One rendered, isolated subtree.
///
/// Self-contained: carries its own scoped stylesheet inside the scope root
/// element, so it can be embedded anywhere (including inside another
/// subtree's slot) without styling leaking in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtree {
    kind: CardKind,
    html: String,
}

impl Subtree {
    /// The kind this subtree was rendered from.
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// The complete subtree markup, scoped style included.
    pub fn as_html(&self) -> &str {
        &self.html
    }

    /// Consumes the subtree, returning its markup.
    pub fn into_html(self) -> String {
        self.html
    }
}

impl std::fmt::Display for Subtree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.html)
    }
}

impl Registry {
    /// Renders one instance of `kind` with the supplied content.
    ///
    /// Rendering is pure: the same kind and content map always produce a
    /// byte-identical subtree. Each call owns its output; no state is shared
    /// between instances.
    ///
    /// # Arguments
    ///
    /// * `kind` - The card kind to instantiate.
    /// * `content` - Supplied slot content; entries for slots the template
    ///   does not declare are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::NotRegistered`] if no template is
    /// registered for `kind`.
    pub fn render(&self, kind: CardKind, content: &ContentMap) -> RenderResult<Subtree> {
        let template = self.get(kind)?;

        for name in content.keys() {
            if template.slot(name).is_none() {
                tracing::debug!(%kind, slot = %name, "dropping content for undeclared slot");
            }
        }

        let scope = kind.scope();
        let mut markup = scope_markup(template.markup(), scope);

        // Resolve slots after class scoping so injected content (escaped text
        // or an already-scoped nested subtree) is never rewritten.
        for spec in template.slots() {
            let marker = format!("<slot name=\"{}\"/>", spec.name);
            let resolved = match content.get(&spec.name) {
                Some(fragment) if !fragment.is_empty() => fragment.to_html(),
                _ => spec.default.clone(),
            };
            markup = markup.replace(&marker, &resolved);
        }

        let style = scope_style(template.style(), scope);
        let html = format!("<div class=\"{scope}\"><style>{style}</style>{markup}</div>");

        Ok(Subtree { kind, html })
    }
}

/// Escapes text for safe insertion into markup.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(ch),
        }
    }
    output
}
