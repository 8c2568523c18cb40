use std::rc::Rc;

use markup5ever_rcdom::{Node, NodeData};

/// Local tag name of an element node, `None` for every other node kind.
pub(crate) fn element_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub(crate) fn is_element_named(node: &Rc<Node>, tag: &str) -> bool {
    element_tag_name(node).is_some_and(|name| name == tag)
}

/// Text of a node's first child only.
///
/// Text children yield their raw contents, element children their tag name and
/// comments their text. A node without children yields an empty string.
pub(crate) fn first_child_text(node: &Rc<Node>) -> String {
    let children = node.children.borrow();
    let Some(first) = children.first() else {
        return String::new();
    };

    match &first.data {
        NodeData::Text { contents } => contents.borrow().to_string(),
        NodeData::Element { name, .. } => name.local.to_string(),
        NodeData::Comment { contents } => contents.to_string(),
        _ => String::new(),
    }
}

/// Concatenated text of every descendant text node, in document order.
///
/// Walks with an explicit stack so deeply nested cell markup cannot exhaust
/// the call stack.
pub(crate) fn flattened_text(node: &Rc<Node>) -> String {
    let mut text = String::new();
    let mut stack: Vec<Rc<Node>> = node.children.borrow().iter().rev().cloned().collect();

    while let Some(current) = stack.pop() {
        if let NodeData::Text { contents } = &current.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }

    text
}
