//! Render tree

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

/// A node in the render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A tagged element
    Element {
        tag: String,
        /// Identity among siblings; not emitted as an attribute
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        children: Vec<Node>,
    },
    /// Plain text
    Text(String),
    /// Children with no wrapping element
    Fragment(Vec<Node>),
}

impl Node {
    /// Create an element with the given children
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element {
            tag: tag.into(),
            key: None,
            attrs: BTreeMap::new(),
            children,
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Set the key of an element
    #[must_use]
    pub fn with_key(mut self, value: impl ToString) -> Self {
        if let Self::Element { key, .. } = &mut self {
            *key = Some(value.to_string());
        }
        self
    }

    /// Set an attribute on an element
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.insert(name.into(), value.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } | Self::Fragment(children) => children,
            Self::Text(_) => &[],
        }
    }

    /// All descendants (including self) with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        if self.tag() == Some(tag) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_tag(tag, found);
        }
    }

    /// Concatenated text of the subtree, like DOM `textContent`
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }

    /// Serialize the subtree as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Self::Element {
                tag,
                attrs,
                children,
                ..
            } => {
                let _ = write!(out, "<{tag}");
                for (name, value) in attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }

    /// Plain-text listing for a terminal
    ///
    /// Block elements go on their own line, list items are bulleted and the
    /// buttons of a pagination row share one line as `[1] [2] [3]`, with a
    /// `*` on any button carrying the `active` class.
    pub fn to_terminal(&self) -> String {
        let mut lines = Vec::new();
        self.write_terminal(&mut lines);
        lines.join("\n")
    }

    fn write_terminal(&self, lines: &mut Vec<String>) {
        match self {
            Self::Text(text) => lines.push(text.clone()),
            Self::Fragment(children) => {
                for child in children {
                    child.write_terminal(lines);
                }
            }
            Self::Element { tag, children, .. } => match tag.as_str() {
                "ul" | "ol" => {
                    for item in children {
                        lines.push(format!("  - {}", item.text_content()));
                    }
                }
                "button" => lines.push(self.button_label()),
                _ if children.is_empty() => {}
                _ if children.iter().all(|c| c.tag() == Some("button")) => {
                    let row: Vec<String> = children.iter().map(Node::button_label).collect();
                    lines.push(row.join(" "));
                }
                _ if children.iter().all(|c| matches!(c, Self::Text(_))) => {
                    lines.push(self.text_content());
                }
                _ => {
                    for child in children {
                        child.write_terminal(lines);
                    }
                }
            },
        }
    }

    fn button_label(&self) -> String {
        let active = self
            .attr("class")
            .is_some_and(|class| class.split_whitespace().any(|c| c == "active"));
        if active {
            format!("[{}*]", self.text_content())
        } else {
            format!("[{}]", self.text_content())
        }
    }
}

/// Terminal listing, see [`Node::to_terminal`]
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_terminal())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
