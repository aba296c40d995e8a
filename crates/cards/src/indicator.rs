//! Health indicator: the innermost badge in the nesting hierarchy, a dot and
//! a short status text.

use crate::slot_name;
use cardkit_core::{CardKind, ContentMap, Registry, RenderResult, SlotSpec, Subtree, Template};
use serde::{Deserialize, Serialize};

const MARKUP: &str = "\
<div class=\"health-indicator\">\
<span class=\"indicator-dot\"></span>\
<span class=\"indicator-text\"><slot name=\"text\"/></span>\
</div>";

const STYLE: &str = "\
:host { display: block; --indicator-text: var(--foreground, #1a1a1a); } \
.health-indicator { display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; \
background: rgba(16, 185, 129, 0.1); border-radius: 6px; font-size: 12px; font-weight: 500; } \
.indicator-dot { width: 8px; height: 8px; border-radius: 50%; background: #10b981; } \
.indicator-text { color: var(--indicator-text); }";

pub fn template() -> Template {
    Template::new(
        MARKUP,
        STYLE,
        vec![SlotSpec {
            name: slot_name("text"),
            default: "Active".to_string(),
        }],
        vec!["foreground".to_string()],
    )
}

/// Typed parameters for a health indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub text: String,
}

pub fn render(registry: &Registry, params: &IndicatorParams) -> RenderResult<Subtree> {
    let mut content = ContentMap::new();
    content.insert(slot_name("text"), params.text.as_str().into());
    registry.render(CardKind::Indicator, &content)
}
