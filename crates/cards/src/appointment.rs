//! Appointment card: doctor and status header, then date, time, and location
//! rows, plus a `nested` slot below a divider.

use crate::slot_name;
use cardkit_core::{
    CardKind, ContentMap, Registry, RenderResult, SlotSpec, Subtree, Template,
};
use serde::{Deserialize, Serialize};

const MARKUP: &str = "\
<div class=\"appointment-card\">\
<div class=\"appt-header\">\
<div class=\"appt-doctor\"><slot name=\"doctor\"/></div>\
<span class=\"appt-status\"><slot name=\"status\"/></span>\
</div>\
<div class=\"appt-details\">\
<div class=\"appt-row\"><span class=\"appt-icon\">📅</span><slot name=\"date\"/></div>\
<div class=\"appt-row\"><span class=\"appt-icon\">🕐</span><slot name=\"time\"/></div>\
<div class=\"appt-row\"><span class=\"appt-icon\">📍</span><slot name=\"location\"/></div>\
</div>\
<div class=\"appt-nested\"><slot name=\"nested\"/></div>\
</div>";

const STYLE: &str = "\
:host { display: block; \
--appt-bg: var(--card, #ffffff); \
--appt-border: var(--border, #e5e7eb); \
--appt-accent: var(--accent, #008b9f); \
--appt-text: var(--foreground, #1a1a1a); } \
.appointment-card { background: var(--appt-bg); border: 2px solid var(--appt-border); \
border-left: 4px solid var(--appt-accent); border-radius: 10px; padding: 16px; margin: 8px 0; } \
.appt-header { display: flex; justify-content: space-between; align-items: start; margin-bottom: 12px; } \
.appt-doctor { font-weight: 600; color: var(--appt-text); font-size: 14px; } \
.appt-status { padding: 4px 8px; border-radius: 6px; font-size: 11px; font-weight: 600; \
background: var(--appt-accent); color: white; } \
.appt-details { display: grid; gap: 8px; font-size: 13px; color: var(--appt-text); } \
.appt-row { display: flex; align-items: center; gap: 8px; } \
.appt-icon { width: 18px; height: 18px; border-radius: 50%; background: var(--appt-accent); \
display: flex; align-items: center; justify-content: center; color: white; font-size: 12px; } \
.appt-nested { margin-top: 12px; padding-top: 12px; border-top: 1px solid var(--appt-border); }";

pub fn template() -> Template {
    Template::new(
        MARKUP,
        STYLE,
        vec![
            SlotSpec {
                name: slot_name("doctor"),
                default: "Dr. Name".to_string(),
            },
            SlotSpec {
                name: slot_name("status"),
                default: "Scheduled".to_string(),
            },
            SlotSpec {
                name: slot_name("date"),
                default: "Date".to_string(),
            },
            SlotSpec {
                name: slot_name("time"),
                default: "Time".to_string(),
            },
            SlotSpec {
                name: slot_name("location"),
                default: "Location".to_string(),
            },
            SlotSpec {
                name: slot_name("nested"),
                default: String::new(),
            },
        ],
        vec![
            "card".to_string(),
            "border".to_string(),
            "accent".to_string(),
            "foreground".to_string(),
        ],
    )
}

/// Typed parameters for an appointment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCardParams {
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Renders an appointment card, optionally embedding `nested` below the
/// detail rows.
pub fn render(
    registry: &Registry,
    params: &AppointmentCardParams,
    nested: Option<Subtree>,
) -> RenderResult<Subtree> {
    let mut content = ContentMap::new();
    content.insert(slot_name("doctor"), params.doctor.as_str().into());
    content.insert(slot_name("date"), params.date.as_str().into());
    content.insert(slot_name("time"), params.time.as_str().into());
    content.insert(slot_name("location"), params.location.as_str().into());
    if let Some(status) = &params.status {
        content.insert(slot_name("status"), status.as_str().into());
    }
    if let Some(subtree) = nested {
        content.insert(slot_name("nested"), subtree.into());
    }
    registry.render(CardKind::AppointmentCard, &content)
}
