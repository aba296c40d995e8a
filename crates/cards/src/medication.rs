//! Medication card: icon block beside name, dosage, frequency, and quantity,
//! with a `nested-med` slot for embedding an indicator.

use crate::slot_name;
use cardkit_core::{
    CardKind, ContentMap, Registry, RenderResult, SlotSpec, Subtree, Template,
};
use serde::{Deserialize, Serialize};

const MARKUP: &str = "\
<div class=\"medication-card\">\
<div class=\"med-icon\"><slot name=\"icon\"/></div>\
<div class=\"med-info\">\
<h4 class=\"med-name\"><slot name=\"name\"/></h4>\
<div class=\"med-dosage\"><slot name=\"dosage\"/></div>\
<div class=\"med-frequency\"><slot name=\"frequency\"/></div>\
<div class=\"med-quantity\"><slot name=\"quantity\"/></div>\
<div class=\"med-nested\"><slot name=\"nested-med\"/></div>\
</div>\
</div>";

const STYLE: &str = "\
:host { display: block; \
--med-primary: var(--primary, #3b5cc4); \
--med-bg: var(--card, #ffffff); \
--med-text: var(--foreground, #1a1a1a); \
--med-border: var(--border, #e5e7eb); } \
.medication-card { background: var(--med-bg); border: 1px solid var(--med-border); \
border-radius: 10px; padding: 14px; margin: 8px 0; display: flex; gap: 12px; align-items: flex-start; } \
.med-icon { width: 40px; height: 40px; border-radius: 8px; background: var(--med-primary); \
display: flex; align-items: center; justify-content: center; color: white; font-size: 20px; flex-shrink: 0; } \
.med-info { flex: 1; } \
.med-name { font-weight: 600; font-size: 14px; color: var(--med-text); margin: 0; } \
.med-dosage { font-size: 12px; color: var(--med-text); opacity: 0.7; margin: 4px 0; } \
.med-frequency { font-size: 12px; color: var(--med-primary); font-weight: 500; } \
.med-quantity { padding: 4px 8px; background: rgba(59, 92, 196, 0.1); border-radius: 6px; \
font-size: 11px; color: var(--med-primary); font-weight: 600; display: inline-block; margin-top: 6px; } \
.med-nested { margin-top: 8px; }";

pub fn template() -> Template {
    Template::new(
        MARKUP,
        STYLE,
        vec![
            SlotSpec {
                name: slot_name("icon"),
                default: "💊".to_string(),
            },
            SlotSpec {
                name: slot_name("name"),
                default: "Medication Name".to_string(),
            },
            SlotSpec {
                name: slot_name("dosage"),
                default: "Dosage".to_string(),
            },
            SlotSpec {
                name: slot_name("frequency"),
                default: "Frequency".to_string(),
            },
            SlotSpec {
                name: slot_name("quantity"),
                default: "Quantity".to_string(),
            },
            SlotSpec {
                name: slot_name("nested-med"),
                default: String::new(),
            },
        ],
        vec![
            "primary".to_string(),
            "card".to_string(),
            "foreground".to_string(),
            "border".to_string(),
        ],
    )
}

/// Typed parameters for a medication card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationCardParams {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Renders a medication card, optionally embedding `nested` under the info
/// column.
pub fn render(
    registry: &Registry,
    params: &MedicationCardParams,
    nested: Option<Subtree>,
) -> RenderResult<Subtree> {
    let mut content = ContentMap::new();
    content.insert(slot_name("name"), params.name.as_str().into());
    content.insert(slot_name("dosage"), params.dosage.as_str().into());
    content.insert(slot_name("frequency"), params.frequency.as_str().into());
    content.insert(slot_name("quantity"), params.quantity.as_str().into());
    if let Some(icon) = &params.icon {
        content.insert(slot_name("icon"), icon.as_str().into());
    }
    if let Some(subtree) = nested {
        content.insert(slot_name("nested-med"), subtree.into());
    }
    registry.render(CardKind::MedicationCard, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn lisinopril_scenario_uses_default_icon() {
        let params = MedicationCardParams {
            name: "Lisinopril".to_string(),
            dosage: "10mg".to_string(),
            frequency: "Once daily".to_string(),
            quantity: "30 tablets".to_string(),
            icon: None,
        };
        let subtree = render(builtins(), &params, None).unwrap();
        let html = subtree.as_html();
        assert!(html.contains("Lisinopril"));
        assert!(html.contains("10mg"));
        assert!(html.contains("Once daily"));
        assert!(html.contains("30 tablets"));
        // No icon supplied, so the default pill icon applies.
        assert!(html.contains("💊"));
    }

    #[test]
    fn custom_icon_replaces_default() {
        let params = MedicationCardParams {
            name: "Vitamin D3".to_string(),
            dosage: "2000 IU".to_string(),
            frequency: "Once daily".to_string(),
            quantity: "60 capsules".to_string(),
            icon: Some("🔶".to_string()),
        };
        let subtree = render(builtins(), &params, None).unwrap();
        assert!(subtree.as_html().contains("🔶"));
        assert!(!subtree.as_html().contains("💊"));
    }
}
