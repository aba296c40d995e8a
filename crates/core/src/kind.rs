//! Card kind enumeration.
//!
//! The set of card variants the renderer knows how to instantiate. Kinds are
//! fixed at compile time; each carries a stable kebab-case tag used for
//! parsing, display, and as the style scope prefix of rendered subtrees.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};

/// One of the fixed set of card variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    MetricCard,
    AppointmentCard,
    MedicationCard,
    DoctorCard,
    Indicator,
}

impl CardKind {
    /// All kinds, in registration order.
    pub const ALL: [CardKind; 5] = [
        CardKind::MetricCard,
        CardKind::AppointmentCard,
        CardKind::MedicationCard,
        CardKind::DoctorCard,
        CardKind::Indicator,
    ];

    /// Stable kebab-case tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            CardKind::MetricCard => "metric-card",
            CardKind::AppointmentCard => "appointment-card",
            CardKind::MedicationCard => "medication-card",
            CardKind::DoctorCard => "doctor-card",
            CardKind::Indicator => "indicator",
        }
    }

    /// Class-name prefix under which this kind's styles are scoped.
    ///
    /// Every class the template declares is rewritten to live under this
    /// prefix, so two kinds can never share a selector namespace.
    pub fn scope(&self) -> &'static str {
        match self {
            CardKind::MetricCard => "ck-metric-card",
            CardKind::AppointmentCard => "ck-appointment-card",
            CardKind::MedicationCard => "ck-medication-card",
            CardKind::DoctorCard => "ck-doctor-card",
            CardKind::Indicator => "ck-indicator",
        }
    }

    /// Parses a kebab-case tag into a `CardKind`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnknownKind` if the input matches no known tag.
    pub fn parse(input: &str) -> RenderResult<Self> {
        match input.trim() {
            "metric-card" => Ok(CardKind::MetricCard),
            "appointment-card" => Ok(CardKind::AppointmentCard),
            "medication-card" => Ok(CardKind::MedicationCard),
            "doctor-card" => Ok(CardKind::DoctorCard),
            "indicator" => Ok(CardKind::Indicator),
            other => Err(RenderError::UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_all_kinds() {
        for kind in CardKind::ALL {
            assert_eq!(CardKind::parse(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = CardKind::parse("banner-card").expect_err("should reject unknown tag");
        assert!(matches!(err, RenderError::UnknownKind(tag) if tag == "banner-card"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&CardKind::MetricCard).unwrap();
        assert_eq!(json, "\"metric-card\"");
    }

    #[test]
    fn scopes_are_distinct() {
        let mut scopes: Vec<&str> = CardKind::ALL.iter().map(|k| k.scope()).collect();
        scopes.sort();
        scopes.dedup();
        assert_eq!(scopes.len(), CardKind::ALL.len());
    }
}
