//! Treeviz formatter for bracket trees
//!
//! Renders a node tree one line per node, children indented two spaces and
//! prefixed with `- `. The output is deterministic and line-oriented, which
//! is what the AST-shape tests assert against and what the CLI's `tree`
//! format prints.
//!
//! ```text
//! Container:
//! - Run "foo"
//! - Group ( ... )
//!   - Run "\"abc\""
//!   - Leaf ","
//!   - Run "bar"
//! ```

use super::node::Node;

/// Render a node tree to its text form.
pub fn to_treeviz_str(node: &Node) -> String {
    let mut out = String::new();
    match node {
        Node::Container(container) => {
            if container.children().is_empty() {
                out.push_str("Container: []\n");
            } else {
                out.push_str("Container:\n");
                append_children(&mut out, container.children(), "");
            }
        }
        other => append_node(&mut out, other, ""),
    }
    out
}

fn append_children(out: &mut String, children: &[Node], indent: &str) {
    for child in children {
        append_node(out, child, indent);
    }
}

fn append_node(out: &mut String, node: &Node, indent: &str) {
    match node {
        Node::Run(run) => {
            out.push_str(&format!("{}- Run {:?}\n", indent, run.text()));
        }
        Node::Leaf(leaf) => {
            out.push_str(&format!("{}- Leaf {:?}\n", indent, leaf.token().text));
        }
        Node::Group(group) => {
            let open = group.open().char();
            let close = group.close().char();
            if group.children().is_empty() {
                out.push_str(&format!("{}- Group {}{}\n", indent, open, close));
            } else {
                out.push_str(&format!("{}- Group {} ... {}\n", indent, open, close));
                let child_indent = format!("{}  ", indent);
                append_children(out, group.children(), &child_indent);
            }
        }
        Node::Container(container) => {
            if container.children().is_empty() {
                out.push_str(&format!("{}- Container: []\n", indent));
            } else {
                out.push_str(&format!("{}- Container:\n", indent));
                let child_indent = format!("{}  ", indent);
                append_children(out, container.children(), &child_indent);
            }
        }
    }
}
