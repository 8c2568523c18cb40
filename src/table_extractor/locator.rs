use markup5ever_rcdom::Handle;

use super::node_util::is_element_named;

/// Find the first `table` element in pre-order depth-first order.
///
/// Only element nodes are matched. Children of every node kind are visited, so
/// the search starts equally well from the document root or any subtree.
pub fn find_table(root: &Handle) -> Option<Handle> {
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if is_element_named(&node, "table") {
            return Some(node);
        }
        // Reversed so the leftmost child is popped first.
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    None
}
