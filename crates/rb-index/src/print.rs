//! Debug printers. Both only use the read-only [`NodeRef`] accessors.

use crate::tree::{NodeRef, RbTree};

/// Pre-order listing, one line per node:
///
/// ```text
/// val: 3, parent: -1, color: black
/// val: 1, parent: 3, color: red,LEFT
/// ```
pub fn dump(tree: &RbTree) -> String {
    let mut out = String::new();
    let mut stack: Vec<NodeRef<'_>> =
        tree.root().and_then(|h| tree.get(h)).into_iter().collect();
    while let Some(node) = stack.pop() {
        let (parent, side) = match node.parent() {
            None => ("-1".to_string(), ""),
            Some(p) if node.is_left_child() => (p.key().to_string(), ",LEFT"),
            Some(p) => (p.key().to_string(), ",RIGHT"),
        };
        out.push_str(&format!(
            "val: {}, parent: {parent}, color: {}{side}\n",
            node.key(),
            node.color()
        ));
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

/// Indented tree view, `∅` marking nil leaves.
pub fn print(tree: &RbTree) -> String {
    print_node(tree.root().and_then(|h| tree.get(h)), "")
}

fn print_node(node: Option<NodeRef<'_>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let child_tab = format!("{tab}  ");
            let left = print_node(n.left(), &child_tab);
            let right = print_node(n.right(), &child_tab);
            format!(
                "Node[{}] {} {{ {} }}\n{tab}L={left}\n{tab}R={right}",
                n.handle().index(),
                n.color(),
                n.key()
            )
        }
    }
}
