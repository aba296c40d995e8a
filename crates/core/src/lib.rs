//! # Cardkit Core
//!
//! The card component model: kinds, templates, slot contracts, the template
//! registry, and the instance renderer.
//!
//! A [`Template`] pairs a markup string containing named slot markers with a
//! style string and an ordered slot contract (each slot carries default
//! content). Templates are registered once per [`CardKind`] in a [`Registry`],
//! then instantiated via [`Registry::render`], which resolves supplied content
//! against the contract (per-slot default fallback) and emits an isolated
//! [`Subtree`]: the template's style rules are rewritten into a kind-scoped
//! class namespace so they cannot match anything outside the subtree, and
//! ambient rules cannot match the template's internals. The only sanctioned
//! inbound styling surface is the template's declared set of inherited theme
//! tokens, consumed through `var(--token, fallback)`.
//!
//! **No content concerns**: the built-in card templates and their typed
//! wrappers live in `cardkit-cards`; demo data and page composition live in
//! `cardkit-site`.

pub mod error;
pub mod kind;
pub mod registry;
pub mod render;
mod scope;
pub mod template;

pub use error::{RenderError, RenderResult};
pub use kind::CardKind;
pub use registry::Registry;
pub use render::{escape_html, ContentMap, Fragment, Subtree};
pub use template::{SlotSpec, Template};

pub use cardkit_types::{SlotName, SlotNameError};
