//! Card template model and YAML template files.
//!
//! A template is the static definition of one card kind: a markup string with
//! `<slot name="..."/>` markers, a style string, an ordered slot contract
//! (slot name plus default content), and the declared list of inherited theme
//! tokens that form the template's only customisation surface.
//!
//! Templates are immutable after registration. Validation happens at
//! registration time, not construction time, so a template read from a YAML
//! file can be inspected before it is accepted.
//!
//! The YAML wire model (`read_yaml`/`write_yaml`) is strict: unknown keys are
//! rejected and parse failures report the path to the failing field.

use crate::error::{RenderError, RenderResult};
use cardkit_types::SlotName;
use serde::{Deserialize, Serialize};

/// One entry in a template's slot contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    /// Insertion point identifier, unique within the template.
    pub name: SlotName,
    /// Content rendered when the caller supplies nothing for this slot.
    /// May be empty, in which case the slot renders as nothing.
    pub default: String,
}

/// Static markup + style + slot contract for one card kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    markup: String,
    style: String,
    slots: Vec<SlotSpec>,
    inherited_tokens: Vec<String>,
}

impl Template {
    /// Creates a new template.
    ///
    /// No validation is performed here; a template is validated when it is
    /// registered (see [`crate::Registry::register`]).
    ///
    /// # Arguments
    ///
    /// * `markup` - Markup containing one `<slot name="..."/>` marker per
    ///   contract entry.
    /// * `style` - Style rules using class selectors and `:host`.
    /// * `slots` - Ordered slot contract.
    /// * `inherited_tokens` - Names (without the `--` prefix) of the ambient
    ///   custom properties the style consumes via `var(--token, fallback)`.
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        slots: Vec<SlotSpec>,
        inherited_tokens: Vec<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            slots,
            inherited_tokens,
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// The slot contract, in document order.
    pub fn slots(&self) -> &[SlotSpec] {
        &self.slots
    }

    /// Inherited theme token names, without the `--` prefix.
    pub fn inherited_tokens(&self) -> &[String] {
        &self.inherited_tokens
    }

    /// Looks up a contract entry by slot name.
    pub fn slot(&self, name: &SlotName) -> Option<&SlotSpec> {
        self.slots.iter().find(|spec| &spec.name == name)
    }

    /// Checks the template's internal consistency.
    ///
    /// Rules:
    /// - every `<slot name="..."/>` marker in the markup is declared exactly
    ///   once in the contract;
    /// - every declared slot appears exactly once in the markup;
    /// - every declared inherited token is actually consumed by the style.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` when consistent, or a human-readable reason string.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let markers = slot_markers(&self.markup)?;

        for marker in &markers {
            if !self.slots.iter().any(|spec| spec.name.as_str() == marker) {
                return Err(format!(
                    "markup references slot '{marker}' which is not in the contract"
                ));
            }
        }

        for spec in &self.slots {
            let count = markers
                .iter()
                .filter(|m| m.as_str() == spec.name.as_str())
                .count();
            match count {
                0 => {
                    return Err(format!(
                        "contract declares slot '{}' which does not appear in the markup",
                        spec.name
                    ))
                }
                1 => {}
                n => {
                    return Err(format!(
                        "slot '{}' appears {n} times in the markup (must be exactly once)",
                        spec.name
                    ))
                }
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for spec in &self.slots {
            if seen.contains(&spec.name.as_str()) {
                return Err(format!(
                    "slot '{}' is declared more than once in the contract",
                    spec.name
                ));
            }
            seen.push(spec.name.as_str());
        }

        for token in &self.inherited_tokens {
            let reference = format!("var(--{token}");
            if !self.style.contains(&reference) {
                return Err(format!(
                    "inherited token '{token}' is declared but never consumed by the style"
                ));
            }
        }

        Ok(())
    }
}

/// Extracts the slot names referenced by `<slot name="..."/>` markers.
///
/// Markers must use exactly this self-closing form; a malformed marker is a
/// template error, not a silent pass-through.
fn slot_markers(markup: &str) -> Result<Vec<String>, String> {
    const OPEN: &str = "<slot name=\"";

    let mut names = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let end = after
            .find('"')
            .ok_or_else(|| "unterminated slot marker (missing closing '\"')".to_string())?;
        let name = &after[..end];
        let tail = &after[end + 1..];
        if !tail.starts_with("/>") {
            return Err(format!(
                "slot marker for '{name}' must be self-closing (expected '/>' after the name)"
            ));
        }
        names.push(name.to_string());
        rest = &tail[2..];
    }
    Ok(names)
}

/// Strict YAML wire representation of a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct TemplateFile {
    markup: String,
    style: String,
    #[serde(default)]
    slots: Vec<SlotFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    inherited_tokens: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct SlotFile {
    name: SlotName,
    #[serde(default)]
    default: String,
}

/// Read a template from its YAML document form.
///
/// # Arguments
///
/// * `yaml` - YAML document with `markup`, `style`, `slots`, and optional
///   `inherited_tokens` keys.
///
/// # Returns
///
/// Returns a parsed [`Template`]. The template is not yet validated against
/// its markup; that happens at registration.
///
/// # Errors
///
/// Returns [`RenderError::TemplateFile`] if the YAML does not match the wire
/// schema, including the path to the failing field.
pub fn read_yaml(yaml: &str) -> RenderResult<Template> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml);

    let file: TemplateFile = match serde_path_to_error::deserialize(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(RenderError::TemplateFile(format!(
                "template schema mismatch at {path}: {source}"
            )));
        }
    };

    let slots = file
        .slots
        .into_iter()
        .map(|slot| SlotSpec {
            name: slot.name,
            default: slot.default,
        })
        .collect();

    Ok(Template {
        markup: file.markup,
        style: file.style,
        slots,
        inherited_tokens: file.inherited_tokens,
    })
}

/// Write a template to its YAML document form.
///
/// # Errors
///
/// Returns [`RenderError::TemplateSerialization`] if serialisation fails.
pub fn write_yaml(template: &Template) -> RenderResult<String> {
    let file = TemplateFile {
        markup: template.markup.clone(),
        style: template.style.clone(),
        slots: template
            .slots
            .iter()
            .map(|spec| SlotFile {
                name: spec.name.clone(),
                default: spec.default.clone(),
            })
            .collect(),
        inherited_tokens: template.inherited_tokens.clone(),
    };
    serde_yaml::to_string(&file).map_err(RenderError::TemplateSerialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(name: &str, default: &str) -> SlotSpec {
        SlotSpec {
            name: SlotName::new(name).unwrap(),
            default: default.to_string(),
        }
    }

    fn sample() -> Template {
        Template::new(
            "<div class=\"box\"><h3 class=\"box-title\"><slot name=\"title\"/></h3><slot name=\"body\"/></div>",
            ":host { color: var(--foreground, #1a1a1a); } .box { border: 1px solid #e5e7eb; }",
            vec![slot("title", "Untitled"), slot("body", "")],
            vec!["foreground".to_string()],
        )
    }

    #[test]
    fn validates_consistent_template() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_undeclared_marker() {
        let template = Template::new(
            "<div><slot name=\"title\"/><slot name=\"extra\"/></div>",
            "",
            vec![slot("title", "")],
            vec![],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("extra"));
        assert!(reason.contains("not in the contract"));
    }

    #[test]
    fn rejects_contract_slot_missing_from_markup() {
        let template = Template::new(
            "<div><slot name=\"title\"/></div>",
            "",
            vec![slot("title", ""), slot("ghost", "")],
            vec![],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("ghost"));
        assert!(reason.contains("does not appear"));
    }

    #[test]
    fn rejects_duplicate_marker() {
        let template = Template::new(
            "<div><slot name=\"title\"/><slot name=\"title\"/></div>",
            "",
            vec![slot("title", "")],
            vec![],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("2 times"));
    }

    #[test]
    fn rejects_duplicate_contract_entry() {
        let template = Template::new(
            "<div><slot name=\"title\"/></div>",
            "",
            vec![slot("title", "a"), slot("title", "b")],
            vec![],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("more than once"));
    }

    #[test]
    fn rejects_unterminated_marker() {
        let template = Template::new("<div><slot name=\"title</div>", "", vec![], vec![]);
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("unterminated"));
    }

    #[test]
    fn rejects_non_self_closing_marker() {
        let template = Template::new(
            "<div><slot name=\"title\">x</slot></div>",
            "",
            vec![slot("title", "")],
            vec![],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("self-closing"));
    }

    #[test]
    fn rejects_unconsumed_inherited_token() {
        let template = Template::new(
            "<div><slot name=\"title\"/></div>",
            ".box { color: red; }",
            vec![slot("title", "")],
            vec!["primary".to_string()],
        );
        let reason = template.validate().expect_err("should reject");
        assert!(reason.contains("primary"));
        assert!(reason.contains("never consumed"));
    }

    #[test]
    fn yaml_round_trip() {
        let template = sample();
        let yaml = write_yaml(&template).expect("write yaml");
        let reparsed = read_yaml(&yaml).expect("read yaml");
        assert_eq!(reparsed, template);
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let yaml = "markup: \"<div/>\"\nstyle: \"\"\nslots: []\nunexpected_key: true\n";
        let err = read_yaml(yaml).expect_err("should reject unknown key");
        match err {
            RenderError::TemplateFile(msg) => {
                assert!(msg.contains("unexpected_key") || msg.contains("unknown field"));
            }
            other => panic!("expected TemplateFile error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_rejects_invalid_slot_name() {
        let yaml = "markup: \"<div/>\"\nstyle: \"\"\nslots:\n  - name: \"Bad Name\"\n";
        let err = read_yaml(yaml).expect_err("should reject invalid slot name");
        match err {
            RenderError::TemplateFile(msg) => {
                assert!(msg.contains("slots"));
            }
            other => panic!("expected TemplateFile error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_parses_minimal_document() {
        let yaml = "markup: \"<div/>\"\nstyle: \"\"\n";
        let template = read_yaml(yaml).expect("should parse minimal template");
        assert!(template.slots().is_empty());
        assert!(template.inherited_tokens().is_empty());
    }
}
