//! Style and markup scoping.
//!
//! Rendered subtrees must be isolated: a template's style rules may not match
//! elements outside the subtree, and ambient document rules may not match the
//! template's internals. Both directions are enforced by rewriting the
//! template's class namespace per kind:
//!
//! - in the style, `:host` becomes `.<scope>` and `.name` becomes
//!   `.<scope>__name`;
//! - in the markup, every `class` attribute token is rewritten to match.
//!
//! Because the rewritten class names carry the kind's scope prefix, a nested
//! subtree (which carries its own prefix) can never be matched by its parent's
//! rules, and vice versa. Declarations are copied untouched, so the template's
//! `var(--token, fallback)` references remain the only inbound styling
//! surface.

const HOST: &str = ":host";

/// Rewrites a style sheet's selectors into the given scope namespace.
///
/// Selector text before each block is rewritten; declaration blocks are
/// copied verbatim. An at-rule's prelude is kept as-is and its block body is
/// rescoped recursively, so rules inside `@media`/`@supports` groups land in
/// the namespace too. Keyframe selectors (`from`, `0%`) contain no class
/// syntax and pass through unchanged.
pub(crate) fn scope_style(style: &str, scope: &str) -> String {
    let mut output = String::with_capacity(style.len() + 64);
    let mut rest = style;

    while let Some(open) = rest.find('{') {
        let prelude = &rest[..open];
        let body_start = open + 1;

        let mut depth = 1usize;
        let mut close = None;
        for (i, ch) in rest[body_start..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(body_start + i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(close) = close else {
            // Unterminated block; copy the remainder unchanged.
            output.push_str(rest);
            return output;
        };

        let body = &rest[body_start..close];
        if prelude.trim_start().starts_with('@') {
            output.push_str(prelude);
            output.push('{');
            output.push_str(&scope_style(body, scope));
            output.push('}');
        } else {
            output.push_str(&scope_selector(prelude, scope));
            output.push('{');
            output.push_str(body);
            output.push('}');
        }
        rest = &rest[close + 1..];
    }
    // Trailing text with no block is preserved as-is.
    output.push_str(rest);
    output
}

/// Rewrites one selector list into the scope namespace.
fn scope_selector(selector: &str, scope: &str) -> String {
    let mut output = String::with_capacity(selector.len() + 16);
    let bytes = selector.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if selector[i..].starts_with(HOST) {
            output.push('.');
            output.push_str(scope);
            i += HOST.len();
        } else if bytes[i] == b'.' && i + 1 < bytes.len() && is_ident_byte(bytes[i + 1]) {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && is_ident_byte(bytes[end]) {
                end += 1;
            }
            output.push('.');
            output.push_str(scope);
            output.push_str("__");
            output.push_str(&selector[start..end]);
            i = end;
        } else {
            // Safe: iterating byte-wise over ASCII structural characters;
            // multi-byte characters never start with '.' or ':'.
            let ch = selector[i..].chars().next().unwrap_or('\0');
            output.push(ch);
            i += ch.len_utf8();
        }
    }
    output
}

/// Rewrites every `class` attribute token in the markup into the scope
/// namespace.
pub(crate) fn scope_markup(markup: &str, scope: &str) -> String {
    const ATTR: &str = "class=\"";

    let mut output = String::with_capacity(markup.len() + 64);
    let mut rest = markup;

    while let Some(start) = rest.find(ATTR) {
        let value_start = start + ATTR.len();
        output.push_str(&rest[..value_start]);
        let after = &rest[value_start..];
        match after.find('"') {
            Some(end) => {
                let scoped = after[..end]
                    .split_whitespace()
                    .map(|token| format!("{scope}__{token}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                output.push_str(&scoped);
                rest = &after[end..];
            }
            None => {
                // Unterminated attribute; copy the remainder unchanged.
                output.push_str(after);
                return output;
            }
        }
    }
    output.push_str(rest);
    output
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_host_selector() {
        let scoped = scope_style(":host { display: block; }", "ck-indicator");
        assert_eq!(scoped, ".ck-indicator { display: block; }");
    }

    #[test]
    fn rewrites_class_selectors() {
        let scoped = scope_style(".box { padding: 4px; }", "ck-metric-card");
        assert_eq!(scoped, ".ck-metric-card__box { padding: 4px; }");
    }

    #[test]
    fn preserves_pseudo_classes() {
        let scoped = scope_style(".box:hover { color: red; }", "ck-metric-card");
        assert_eq!(scoped, ".ck-metric-card__box:hover { color: red; }");
    }

    #[test]
    fn rewrites_each_selector_in_a_list() {
        let scoped = scope_style(".a, .b { margin: 0; }", "s");
        assert_eq!(scoped, ".s__a, .s__b { margin: 0; }");
    }

    #[test]
    fn rewrites_descendant_combinations() {
        let scoped = scope_style(".outer .inner { gap: 8px; }", "s");
        assert_eq!(scoped, ".s__outer .s__inner { gap: 8px; }");
    }

    #[test]
    fn leaves_declarations_untouched() {
        let input = ":host { --local: var(--primary, #3b5cc4); background: url(a.png); }";
        let scoped = scope_style(input, "s");
        assert!(scoped.contains("--local: var(--primary, #3b5cc4)"));
        assert!(scoped.contains("url(a.png)"));
    }

    #[test]
    fn handles_multiple_rules() {
        let scoped = scope_style(":host { display: block; } .a { color: red; }", "s");
        assert_eq!(scoped, ".s { display: block; } .s__a { color: red; }");
    }

    #[test]
    fn scopes_rules_inside_media_queries() {
        let scoped = scope_style(
            "@media (max-width: 600px) { .box { display: none; } }",
            "s",
        );
        assert_eq!(
            scoped,
            "@media (max-width: 600px) { .s__box { display: none; } }"
        );
        assert!(!scoped.contains(" .box {"));
    }

    #[test]
    fn scopes_rules_inside_nested_at_rule_groups() {
        let scoped = scope_style(
            "@supports (display: grid) { @media (min-width: 900px) { :host { gap: 8px; } } }",
            "s",
        );
        assert_eq!(
            scoped,
            "@supports (display: grid) { @media (min-width: 900px) { .s { gap: 8px; } } }"
        );
    }

    #[test]
    fn leaves_keyframe_selectors_untouched() {
        let scoped = scope_style(
            "@keyframes pulse { 0% { opacity: 1; } 50% { opacity: 0.5; } }",
            "s",
        );
        assert_eq!(
            scoped,
            "@keyframes pulse { 0% { opacity: 1; } 50% { opacity: 0.5; } }"
        );
    }

    #[test]
    fn rewrites_markup_class_tokens() {
        let scoped = scope_markup("<div class=\"a b\"><span class=\"c\"/></div>", "s");
        assert_eq!(scoped, "<div class=\"s__a s__b\"><span class=\"s__c\"/></div>");
    }

    #[test]
    fn leaves_markup_without_classes_unchanged() {
        let markup = "<div><slot name=\"title\"/></div>";
        assert_eq!(scope_markup(markup, "s"), markup);
    }
}
