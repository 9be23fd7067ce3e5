use scraper::{ElementRef, Html, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Elements that never contribute to a rendered page
const SKIPPED_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// A node of an in-memory DOM document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "li", "button", "a")
    pub tag_name: String,

    /// Element attributes (e.g., id, class, href, aria-expanded)
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Text owned directly by this element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,

    /// `false` models `display: none`: the subtree is still queryable but renders no text
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

fn hides_element(style: &str) -> bool {
    let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
    compact.to_ascii_lowercase().contains("display:none")
}

impl ElementNode {
    /// Create a new visible ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
            text_content: None,
            children: Vec::new(),
            is_visible: true,
        }
    }

    /// Parse an HTML document into a tree rooted at its `<body>`.
    ///
    /// `hidden` and inline `display: none` mark a node invisible. Text owned by an
    /// element is joined into one run ahead of its children.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        document
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "body")
            .map(Self::from_element_ref)
            .unwrap_or_else(|| Self::new("body"))
    }

    fn from_element_ref(element: ElementRef<'_>) -> Self {
        let mut node = Self::new(element.value().name());
        for (name, value) in element.value().attrs() {
            node.add_attribute(name, value);
        }
        node.is_visible = !node.attributes.contains_key("hidden")
            && !node.get_attribute("style").is_some_and(|style| hides_element(style));

        let mut text = Vec::new();
        for child in element.children() {
            match child.value() {
                Node::Text(run) => {
                    let run = run.trim();
                    if !run.is_empty() {
                        text.push(run.to_string());
                    }
                }
                Node::Element(child_element) if SKIPPED_TAGS.contains(&child_element.name()) => {}
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        node.children.push(Self::from_element_ref(child));
                    }
                }
                _ => {}
            }
        }
        if !text.is_empty() {
            node.text_content = Some(text.join(" "));
        }
        node
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: HashMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: set a single attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: append to the class list
    pub fn with_class(mut self, classes: &str) -> Self {
        let merged = match self.attributes.get("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, classes),
            _ => classes.to_string(),
        };
        self.attributes.insert("class".to_string(), merged);
        self
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<ElementNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: append a child
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method: set visibility
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.attributes.get("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Rendered text, one line per non-empty text run, skipping hidden subtrees
    pub fn rendered_text(&self) -> String {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines.join("\n")
    }

    fn collect_lines(&self, lines: &mut Vec<String>) {
        if !self.is_visible {
            return;
        }
        if let Some(text) = &self.text_content {
            lines.extend(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from));
        }
        for child in &self.children {
            child.collect_lines(lines);
        }
    }

    /// Depth-first search for the element with the given `id`
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut ElementNode> {
        if self.id().is_some_and(|own| own == id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_by_id_mut(id))
    }

    /// Convert to a simplified string representation
    pub fn to_simple_string(&self) -> String {
        let mut parts = vec![format!("<{}", self.tag_name)];

        if let Some(id) = self.id() {
            parts.push(format!(" id=\"{}\"", id));
        }

        if let Some(class) = self.attributes.get("class") {
            parts.push(format!(" class=\"{}\"", class));
        }

        if let Some(href) = self.attributes.get("href") {
            parts.push(format!(" href=\"{}\"", href));
        }

        parts.push(">".to_string());

        if let Some(text) = &self.text_content {
            if !text.trim().is_empty() {
                parts.push(text.trim().to_string());
            }
        }

        parts.join("")
    }
}
