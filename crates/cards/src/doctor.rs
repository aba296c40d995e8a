//! Doctor card: centred avatar, name, specialty, star rating with review
//! count, and experience line. No nesting slot.

use crate::slot_name;
use cardkit_core::{
    CardKind, ContentMap, Registry, RenderResult, SlotSpec, Subtree, Template,
};
use serde::{Deserialize, Serialize};

const MARKUP: &str = "\
<div class=\"doctor-card\">\
<div class=\"doctor-avatar\"><slot name=\"avatar\"/></div>\
<h3 class=\"doctor-name\"><slot name=\"name\"/></h3>\
<p class=\"doctor-specialty\"><slot name=\"specialty\"/></p>\
<div class=\"doctor-rating\">\
<span class=\"doctor-stars\"><slot name=\"rating\"/></span>\
<span class=\"doctor-reviews\">(<slot name=\"reviews\"/>)</span>\
</div>\
<div class=\"doctor-info\"><slot name=\"experience\"/></div>\
</div>";

const STYLE: &str = "\
:host { display: block; \
--doctor-bg: var(--card, #ffffff); \
--doctor-text: var(--foreground, #1a1a1a); \
--doctor-border: var(--border, #e5e7eb); \
--doctor-accent: var(--accent, #008b9f); } \
.doctor-card { background: var(--doctor-bg); border: 1px solid var(--doctor-border); \
border-radius: 12px; padding: 20px; text-align: center; } \
.doctor-avatar { width: 80px; height: 80px; border-radius: 50%; background: var(--doctor-accent); \
display: flex; align-items: center; justify-content: center; font-size: 36px; \
margin: 0 auto 16px; color: white; } \
.doctor-name { font-size: 16px; font-weight: 700; color: var(--doctor-text); margin: 0 0 4px; } \
.doctor-specialty { font-size: 13px; color: var(--doctor-accent); font-weight: 600; margin: 0 0 12px; } \
.doctor-rating { font-size: 12px; color: var(--doctor-text); margin: 8px 0; } \
.doctor-stars { color: #fbbf24; letter-spacing: 2px; } \
.doctor-info { font-size: 12px; color: var(--doctor-text); opacity: 0.7; margin: 8px 0; line-height: 1.4; }";

pub fn template() -> Template {
    Template::new(
        MARKUP,
        STYLE,
        vec![
            SlotSpec {
                name: slot_name("avatar"),
                default: "👨‍⚕️".to_string(),
            },
            SlotSpec {
                name: slot_name("name"),
                default: "Dr. Name".to_string(),
            },
            SlotSpec {
                name: slot_name("specialty"),
                default: "Specialty".to_string(),
            },
            SlotSpec {
                name: slot_name("rating"),
                default: "★★★★★".to_string(),
            },
            SlotSpec {
                name: slot_name("reviews"),
                default: "0".to_string(),
            },
            SlotSpec {
                name: slot_name("experience"),
                default: "Years of experience".to_string(),
            },
        ],
        vec![
            "card".to_string(),
            "foreground".to_string(),
            "border".to_string(),
            "accent".to_string(),
        ],
    )
}

/// Typed parameters for a doctor card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorCardParams {
    pub name: String,
    pub specialty: String,
    pub rating: String,
    pub reviews: u32,
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

pub fn render(registry: &Registry, params: &DoctorCardParams) -> RenderResult<Subtree> {
    let mut content = ContentMap::new();
    content.insert(slot_name("name"), params.name.as_str().into());
    content.insert(slot_name("specialty"), params.specialty.as_str().into());
    content.insert(slot_name("rating"), params.rating.as_str().into());
    content.insert(slot_name("reviews"), params.reviews.to_string().into());
    content.insert(slot_name("experience"), params.experience.as_str().into());
    if let Some(avatar) = &params.avatar {
        content.insert(slot_name("avatar"), avatar.as_str().into());
    }
    registry.render(CardKind::DoctorCard, &content)
}
