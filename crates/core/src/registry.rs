//! Template registry.
//!
//! One template per card kind, built once at process start and queried by the
//! renderer. Registration is idempotent so repeated start-up paths (tests,
//! embedders re-running init) are harmless. Lookup of an unregistered kind is
//! a programmer error surfaced as [`RenderError::NotRegistered`]; there is no
//! retry story because everything here is an in-memory map.

use crate::error::{RenderError, RenderResult};
use crate::kind::CardKind;
use crate::template::Template;
use std::collections::HashMap;

/// Registry of card templates, keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: HashMap<CardKind, Template>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template for `kind`.
    ///
    /// If the kind is already registered this is a no-op: the existing
    /// template is kept and no validation is repeated.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidTemplate`] if the template's markup,
    /// contract, and declared tokens are inconsistent.
    pub fn register(&mut self, kind: CardKind, template: Template) -> RenderResult<()> {
        if self.templates.contains_key(&kind) {
            tracing::debug!(%kind, "kind already registered, keeping existing template");
            return Ok(());
        }
        template
            .validate()
            .map_err(|reason| RenderError::InvalidTemplate { kind, reason })?;
        self.templates.insert(kind, template);
        Ok(())
    }

    /// Looks up the template for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotRegistered`] if `kind` was never registered.
    pub fn get(&self, kind: CardKind) -> RenderResult<&Template> {
        self.templates
            .get(&kind)
            .ok_or(RenderError::NotRegistered(kind))
    }

    /// Whether a template is registered for `kind`.
    pub fn contains(&self, kind: CardKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Registered kinds, in [`CardKind::ALL`] order.
    pub fn kinds(&self) -> impl Iterator<Item = CardKind> + '_ {
        CardKind::ALL
            .into_iter()
            .filter(|kind| self.templates.contains_key(kind))
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SlotSpec;
    use cardkit_types::SlotName;

    fn simple_template(default: &str) -> Template {
        Template::new(
            "<div><slot name=\"text\"/></div>",
            "",
            vec![SlotSpec {
                name: SlotName::new("text").unwrap(),
                default: default.to_string(),
            }],
            vec![],
        )
    }

    #[test]
    fn register_and_get() {
        let mut registry = Registry::new();
        registry
            .register(CardKind::Indicator, simple_template("Active"))
            .unwrap();
        let template = registry.get(CardKind::Indicator).unwrap();
        assert_eq!(template.slots().len(), 1);
    }

    #[test]
    fn get_unregistered_fails() {
        let registry = Registry::new();
        let err = registry
            .get(CardKind::MetricCard)
            .expect_err("should fail for unregistered kind");
        assert!(matches!(err, RenderError::NotRegistered(CardKind::MetricCard)));
    }

    #[test]
    fn double_registration_keeps_first_template() {
        let mut registry = Registry::new();
        registry
            .register(CardKind::Indicator, simple_template("first"))
            .unwrap();
        registry
            .register(CardKind::Indicator, simple_template("second"))
            .unwrap();
        assert_eq!(registry.len(), 1);
        let template = registry.get(CardKind::Indicator).unwrap();
        assert_eq!(template.slots()[0].default, "first");
    }

    #[test]
    fn double_registration_matches_single_registration() {
        let mut once = Registry::new();
        once.register(CardKind::Indicator, simple_template("Active"))
            .unwrap();

        let mut twice = Registry::new();
        twice
            .register(CardKind::Indicator, simple_template("Active"))
            .unwrap();
        twice
            .register(CardKind::Indicator, simple_template("Active"))
            .unwrap();

        assert_eq!(
            once.get(CardKind::Indicator).unwrap(),
            twice.get(CardKind::Indicator).unwrap()
        );
    }

    #[test]
    fn register_rejects_inconsistent_template() {
        let mut registry = Registry::new();
        let template = Template::new("<div/>", "", simple_template("x").slots().to_vec(), vec![]);
        let err = registry
            .register(CardKind::Indicator, template)
            .expect_err("should reject template whose slot is missing from markup");
        assert!(matches!(
            err,
            RenderError::InvalidTemplate {
                kind: CardKind::Indicator,
                ..
            }
        ));
        assert!(!registry.contains(CardKind::Indicator));
    }

    #[test]
    fn kinds_iterates_registered_only() {
        let mut registry = Registry::new();
        registry
            .register(CardKind::DoctorCard, simple_template(""))
            .unwrap();
        registry
            .register(CardKind::Indicator, simple_template(""))
            .unwrap();
        let kinds: Vec<CardKind> = registry.kinds().collect();
        assert_eq!(kinds, vec![CardKind::DoctorCard, CardKind::Indicator]);
    }
}
