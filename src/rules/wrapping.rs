//! Wrap-consistency rule
//!
//! Once a bracket group spans more than one line, every comma-separated
//! element inside it and the closing bracket must begin on its own line.
//! The rule walks the whole tree and evaluates every group independently:
//! an inner group's wrapping never excuses or indicts an outer one.
//!
//! Per group, the children are segmented on top-level commas and lined up
//! as `[opener, segment..., closer]`. An item "hugs" its predecessor when
//! its first content token starts on the line where the predecessor ends.
//! Hugging items are reported only when they are a strict subset of the
//! evaluated items: a fully wrapped group is clean, and a group where every
//! transition hugs (its multi-line span coming from inside a segment, such
//! as a hugging collection literal or a triple-quoted string) is left
//! alone.

use crate::ast::{Group, Node, Position, TokenClass};

use super::diagnostic::Diagnostic;

/// Evaluate the wrapping rule over a whole tree, in traversal order.
pub fn evaluate(root: &Node) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    visit(root, &mut diagnostics);
    diagnostics
}

fn visit(node: &Node, diagnostics: &mut Vec<Diagnostic>) {
    match node {
        Node::Container(container) => {
            for child in container.children() {
                visit(child, diagnostics);
            }
        }
        Node::Group(group) => {
            check_group(group, diagnostics);
            for child in group.children() {
                visit(child, diagnostics);
            }
        }
        Node::Run(_) | Node::Leaf(_) => {}
    }
}

/// One evaluated item of a group: a comma-delimited segment, or the
/// closing bracket.
struct Item {
    start: Position,
    end_line: usize,
    is_closer: bool,
}

fn check_group(group: &Group, diagnostics: &mut Vec<Diagnostic>) {
    if group.children().is_empty() {
        return;
    }
    if group.open().start().line == group.close().end_line() {
        return;
    }

    let mut items = segments(group.children());
    items.push(Item {
        start: group.close().start(),
        end_line: group.close().end_line(),
        is_closer: true,
    });

    let mut hugging = Vec::new();
    let mut previous_end_line = group.open().end_line();
    for item in &items {
        if item.start.line == previous_end_line {
            hugging.push(item);
        }
        previous_end_line = item.end_line;
    }

    if hugging.is_empty() || hugging.len() == items.len() {
        return;
    }

    for item in hugging {
        let message = if item.is_closer {
            format!("Closing '{}' not wrapped", group.close().char())
        } else {
            "Argument should be wrapped when containing parens are wrapped".to_string()
        };
        diagnostics.push(Diagnostic::new(item.start.line, item.start.column, message));
    }
}

/// Split a group's children on top-level commas.
///
/// Commas are separators, not segment content. A span between separators
/// that has no content tokens at all (nothing, or only line ends and
/// comments — the text after a trailing comma, say) yields no segment.
fn segments(children: &[Node]) -> Vec<Item> {
    let mut items = Vec::new();
    let mut segment_start = 0;

    for (index, child) in children.iter().enumerate() {
        if is_comma(child) {
            if let Some(item) = segment_item(&children[segment_start..index]) {
                items.push(item);
            }
            segment_start = index + 1;
        }
    }
    if let Some(item) = segment_item(&children[segment_start..]) {
        items.push(item);
    }

    items
}

fn is_comma(node: &Node) -> bool {
    matches!(node, Node::Leaf(leaf) if leaf.class() == TokenClass::Comma)
}

fn segment_item(nodes: &[Node]) -> Option<Item> {
    let start = nodes.iter().find_map(|node| node.content_start())?;
    let end_line = nodes.last().map(|node| node.end_line())?;
    Some(Item {
        start,
        end_line,
        is_closer: false,
    })
}
