//! Built-in card templates and their typed wrappers.
//!
//! One module per card kind. Each module owns its template definition (markup,
//! style, slot contract, inherited theme tokens) and a declarative wrapper
//! that maps a typed parameter record onto the generic content-map render
//! surface of `cardkit-core`. Wrappers are pure functions; optional parameters
//! left as `None` fall back to the template's per-slot defaults.
//!
//! The five kinds share an ambient theme surface of custom properties
//! (`--primary`, `--accent`, `--foreground`, `--background`, `--card`,
//! `--border`); each template declares the subset it consumes.

pub mod appointment;
pub mod doctor;
pub mod indicator;
pub mod medication;
pub mod metric;

use cardkit_core::{CardKind, Registry, RenderResult, SlotName};
use once_cell::sync::Lazy;

/// Builds a slot name from a built-in identifier.
pub(crate) fn slot_name(raw: &'static str) -> SlotName {
    SlotName::new(raw).expect("built-in slot names are valid")
}

/// Registers all built-in templates into `registry`.
///
/// Safe to call more than once; registration is idempotent per kind.
///
/// # Errors
///
/// Returns a `RenderError` if any built-in template fails validation, which
/// indicates a defect in this crate rather than a caller error.
pub fn register_builtins(registry: &mut Registry) -> RenderResult<()> {
    registry.register(CardKind::MetricCard, metric::template())?;
    registry.register(CardKind::AppointmentCard, appointment::template())?;
    registry.register(CardKind::MedicationCard, medication::template())?;
    registry.register(CardKind::DoctorCard, doctor::template())?;
    registry.register(CardKind::Indicator, indicator::template())?;
    Ok(())
}

static BUILTINS: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    register_builtins(&mut registry).expect("built-in templates are valid");
    registry
});

/// The process-wide registry of built-in templates.
///
/// Built once on first use and never mutated afterwards.
pub fn builtins() -> &'static Registry {
    &BUILTINS
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardkit_core::ContentMap;

    #[test]
    fn all_kinds_are_registered() {
        let registry = builtins();
        for kind in CardKind::ALL {
            assert!(registry.contains(kind), "missing builtin for {kind}");
        }
    }

    #[test]
    fn every_kind_renders_with_empty_content() {
        let registry = builtins();
        for kind in CardKind::ALL {
            let subtree = registry
                .render(kind, &ContentMap::new())
                .unwrap_or_else(|e| panic!("render {kind} failed: {e}"));
            assert!(subtree.as_html().contains(kind.scope()));
        }
    }

    #[test]
    fn repeated_registration_is_a_no_op() {
        let mut registry = Registry::new();
        register_builtins(&mut registry).unwrap();
        register_builtins(&mut registry).unwrap();
        assert_eq!(registry.len(), CardKind::ALL.len());
    }

    #[test]
    fn defaults_cover_every_slot() {
        let registry = builtins();
        for kind in CardKind::ALL {
            let template = registry.get(kind).unwrap();
            let subtree = registry.render(kind, &ContentMap::new()).unwrap();
            for spec in template.slots() {
                if !spec.default.is_empty() {
                    assert!(
                        subtree.as_html().contains(&spec.default),
                        "{kind} slot '{}' default missing from output",
                        spec.name
                    );
                }
            }
        }
    }
}
