//! Health metric card.
//!
//! The outermost card in the nesting hierarchy: title and badge in a header
//! row, a large value with unit and description below, and a designated
//! nesting slot (`nested-content`) for embedding another card underneath a
//! divider.

use crate::slot_name;
use cardkit_core::{
    CardKind, ContentMap, Registry, RenderResult, SlotSpec, Subtree, Template,
};
use serde::{Deserialize, Serialize};

const MARKUP: &str = "\
<div class=\"metric-container\">\
<div class=\"metric-header\">\
<h3 class=\"metric-title\"><slot name=\"title\"/></h3>\
<span class=\"metric-badge\"><slot name=\"badge\"/></span>\
</div>\
<div class=\"metric-content\">\
<div class=\"metric-value\"><slot name=\"value\"/></div>\
<div class=\"metric-unit\"><slot name=\"unit\"/></div>\
<div class=\"metric-description\"><slot name=\"description\"/></div>\
<div class=\"metric-nested\"><slot name=\"nested-content\"/></div>\
</div>\
</div>";

const STYLE: &str = "\
:host { display: block; \
--metric-primary: var(--primary, #3b5cc4); \
--metric-text: var(--foreground, #1a1a1a); \
--metric-bg: var(--background, #ffffff); \
--metric-border: var(--border, #e5e7eb); } \
.metric-container { background: var(--metric-bg); border: 1px solid var(--metric-border); \
border-radius: 12px; padding: 24px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); } \
.metric-header { display: flex; justify-content: space-between; align-items: center; \
margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--metric-border); } \
.metric-title { font-size: 16px; font-weight: 600; color: var(--metric-text); margin: 0; } \
.metric-badge { background: var(--metric-primary); color: white; padding: 4px 12px; \
border-radius: 20px; font-size: 12px; font-weight: 600; } \
.metric-value { font-size: 32px; font-weight: 700; color: var(--metric-primary); margin: 8px 0; } \
.metric-unit { font-size: 14px; color: var(--metric-text); opacity: 0.7; } \
.metric-description { font-size: 13px; color: var(--metric-text); opacity: 0.6; margin-top: 8px; } \
.metric-nested { margin-top: 16px; padding-top: 16px; border-top: 1px solid var(--metric-border); }";

/// The metric card template.
pub fn template() -> Template {
    Template::new(
        MARKUP,
        STYLE,
        vec![
            SlotSpec {
                name: slot_name("title"),
                default: "Metric".to_string(),
            },
            SlotSpec {
                name: slot_name("badge"),
                default: "INFO".to_string(),
            },
            SlotSpec {
                name: slot_name("value"),
                default: "--".to_string(),
            },
            SlotSpec {
                name: slot_name("unit"),
                default: String::new(),
            },
            SlotSpec {
                name: slot_name("description"),
                default: String::new(),
            },
            SlotSpec {
                name: slot_name("nested-content"),
                default: String::new(),
            },
        ],
        vec![
            "primary".to_string(),
            "foreground".to_string(),
            "background".to_string(),
            "border".to_string(),
        ],
    )
}

/// Typed parameters for a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCardParams {
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Renders a metric card, optionally embedding `nested` in its nesting slot.
///
/// # Errors
///
/// Fails only if `registry` has no metric card template.
pub fn render(
    registry: &Registry,
    params: &MetricCardParams,
    nested: Option<Subtree>,
) -> RenderResult<Subtree> {
    let mut content = ContentMap::new();
    content.insert(slot_name("title"), params.title.as_str().into());
    content.insert(slot_name("value"), params.value.as_str().into());
    if let Some(unit) = &params.unit {
        content.insert(slot_name("unit"), unit.as_str().into());
    }
    if let Some(badge) = &params.badge {
        content.insert(slot_name("badge"), badge.as_str().into());
    }
    if let Some(description) = &params.description {
        content.insert(slot_name("description"), description.as_str().into());
    }
    if let Some(subtree) = nested {
        content.insert(slot_name("nested-content"), subtree.into());
    }
    registry.render(CardKind::MetricCard, &content)
}
