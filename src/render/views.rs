//! The three views of a list component

use super::node::Node;
use crate::pagination::PageNumber;
use crate::types::User;

/// Attribute carrying the page a button selects
pub const PAGE_BUTTON_ATTR: &str = "data-page";

pub fn loading_view() -> Node {
    Node::element("div", vec![Node::text("Loading...")])
}

pub fn error_view(message: &str) -> Node {
    Node::element("div", vec![Node::text(format!("Error: {message}"))])
}

/// Heading, the visible records, and the page selector row
///
/// The button for `current_page`, if any, is marked with the `active` class.
pub fn list_view(
    heading: &str,
    visible: &[User],
    pages: &[PageNumber],
    current_page: PageNumber,
) -> Node {
    let items = visible
        .iter()
        .map(|user| {
            Node::element("li", vec![Node::text(user.first_name.as_str())]).with_key(user.id)
        })
        .collect();

    let buttons = pages
        .iter()
        .map(|&page| {
            let button = Node::element("button", vec![Node::text(page.to_string())])
                .with_key(page)
                .with_attr(PAGE_BUTTON_ATTR, page.to_string());
            if page == current_page {
                button.with_attr("class", "active")
            } else {
                button
            }
        })
        .collect();

    Node::Fragment(vec![
        Node::element("h1", vec![Node::text(heading)]),
        Node::element("ul", items).with_attr("style", "list-style: none"),
        Node::element("div", buttons).with_attr("class", "pagination"),
    ])
}
