//! Selector resolution priority cascade
//!
//! Maps an element's tag name and attribute set to the single best selector.
//! The priority order is a design contract: changing it changes which tests
//! exist downstream. It is implemented as an ordered rule list evaluated
//! short-circuit so the order itself is independently testable.
//!
//! Priority, first match wins:
//!   1. `data-testid` attribute
//!   2. `id` attribute (verbatim `#id`, no collision checking)
//!   3. `name` attribute (tag-qualified)
//!   4. `type` attribute (tag-qualified)
//!   5. first `class` token (tag-qualified; single token on purpose, so the
//!      selector survives unrelated class toggles)
//!   6. bare tag name (unreliable; marked specially downstream)

use crate::events::types::DomNode;

/// A resolved selector plus a reliability marker.
///
/// `reliable` is false only for the bare-tag fallback, which downstream
/// codegen flags for human review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelector {
    pub selector: String,
    pub reliable: bool,
}

/// One rung of the priority cascade: a name for diagnostics and a
/// formatter that either produces a selector or passes to the next rule.
struct SelectorRule {
    name: &'static str,
    format: fn(&str, &DomNode) -> Option<String>,
}

/// The cascade, in contract order.
const RULES: &[SelectorRule] = &[
    SelectorRule {
        name: "data-testid",
        format: |_, node| {
            node.attr("data-testid")
                .map(|v| format!("[data-testid=\"{}\"]", escape_attr(&v)))
        },
    },
    SelectorRule {
        name: "id",
        format: |_, node| node.attr("id").map(|v| format!("#{}", v)),
    },
    SelectorRule {
        name: "name",
        format: |tag, node| {
            node.attr("name")
                .map(|v| format!("{}[name=\"{}\"]", tag, escape_attr(&v)))
        },
    },
    SelectorRule {
        name: "type",
        format: |tag, node| {
            node.attr("type")
                .map(|v| format!("{}[type=\"{}\"]", tag, escape_attr(&v)))
        },
    },
    SelectorRule {
        name: "class",
        format: |tag, node| {
            node.attr("class").and_then(|classes| {
                classes
                    .split_whitespace()
                    .next()
                    .map(|first| format!("{}.{}", tag, first))
            })
        },
    },
];

/// Resolve the best selector for a node.
///
/// Pure function of the node's tag name and attributes. Returns `None` only
/// for non-element nodes; anything with a tag name resolves to at least the
/// bare-tag fallback.
pub fn resolve_selector(node: &DomNode) -> Option<ResolvedSelector> {
    let tag = node.tag_name.as_deref()?;
    let tag = tag.to_ascii_lowercase();

    for rule in RULES {
        if let Some(selector) = (rule.format)(&tag, node) {
            tracing::trace!(rule = rule.name, %selector, node_id = node.id, "selector resolved");
            return Some(ResolvedSelector {
                selector,
                reliable: true,
            });
        }
    }

    // Rule 6: bare tag, acknowledged as unreliable
    Some(ResolvedSelector {
        selector: tag,
        reliable: false,
    })
}

/// Escape a value for use inside a double-quoted attribute selector.
fn escape_attr(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
