//! In-memory DOM adapter
//!
//! `SnapshotPage` implements [`Page`] over an [`ElementNode`] tree so page objects
//! can be exercised without a browser. Selectors are matched by `scraper` against
//! the tree rendered back to HTML, so any selector Chrome accepts works here too.
//! It models the parts of browser behavior the outline logic depends on:
//! - `is_visible == false` hides a subtree's text but keeps it queryable
//! - clicking an element with `aria-expanded` toggles it and shows/hides the
//!   element named by its `aria-controls`, filling a registered lazy panel on
//!   first expansion
//! - clicking an `<option>` selects it among its siblings
//! - clicking a link with an `href` (or calling `visit`) loads the document
//!   registered for that URL and invalidates every outstanding handle

use crate::dom::element::ElementNode;
use crate::dom::{Element, Page};
use crate::error::{PageError, Result};
use scraper::{Html, Selector};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Attribute carrying a node's index into the render path table
const NODE_MARKER: &str = "data-snapshot-node";

const VOID_TAGS: &[&str] =
    &["area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

pub struct SnapshotPage {
    document: RefCell<ElementNode>,
    routes: HashMap<String, ElementNode>,
    /// Children inserted into an empty panel the first time its fold opens
    lazy_panels: HashMap<String, Vec<ElementNode>>,
    location: RefCell<String>,
    /// Bumped on every document load; handles from older loads are stale
    generation: Cell<u64>,
    clicks: RefCell<Vec<String>>,
    pending_requests: Cell<u32>,
}

impl SnapshotPage {
    pub fn new(document: ElementNode) -> Self {
        Self {
            document: RefCell::new(document),
            routes: HashMap::new(),
            lazy_panels: HashMap::new(),
            location: RefCell::new("about:blank".to_string()),
            generation: Cell::new(0),
            clicks: RefCell::new(Vec::new()),
            pending_requests: Cell::new(0),
        }
    }

    /// Page over an HTML document, see [`ElementNode::from_html`]
    pub fn from_html(html: &str) -> Self {
        Self::new(ElementNode::from_html(html))
    }

    /// Builder method: register the document served for `url`
    pub fn with_route(mut self, url: impl Into<String>, document: ElementNode) -> Self {
        self.routes.insert(url.into(), document);
        self
    }

    /// Builder method: fill the element with id `panel_id` with `children` when its
    /// fold is first expanded, the way a server-rendered outline fetches folds on demand
    pub fn with_lazy_panel(mut self, panel_id: impl Into<String>, children: Vec<ElementNode>) -> Self {
        self.lazy_panels.insert(panel_id.into(), children);
        self
    }

    /// Builder method: set the current location without loading anything
    pub fn at(self, url: impl Into<String>) -> Self {
        *self.location.borrow_mut() = url.into();
        self
    }

    /// Builder method: report `count` outstanding requests, one of which completes per idle check
    pub fn with_pending_requests(self, count: u32) -> Self {
        self.pending_requests.set(count);
        self
    }

    /// Every click performed so far, as `<tag id=.. class=..>text` descriptions
    pub fn clicks(&self) -> Vec<String> {
        self.clicks.borrow().clone()
    }

    pub fn click_count(&self) -> usize {
        self.clicks.borrow().len()
    }

    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    /// A copy of the current document
    pub fn document(&self) -> ElementNode {
        self.document.borrow().clone()
    }

    fn load(&self, url: &str) -> Result<()> {
        let document = self
            .routes
            .get(url)
            .ok_or_else(|| PageError::NavigationFailed(format!("No document registered for {}", url)))?;
        *self.document.borrow_mut() = document.clone();
        *self.location.borrow_mut() = url.to_string();
        self.generation.set(self.generation.get() + 1);
        log::debug!("Loaded snapshot document for {}", url);
        Ok(())
    }

    fn handle(&self, path: Vec<usize>) -> SnapshotElement<'_> {
        SnapshotElement { page: self, path, generation: self.generation.get() }
    }

    /// Paths of the matching nodes under `scope`, in document order
    fn matching_paths(&self, scope: &[usize], selector: &Selector, include_scope: bool) -> Vec<Vec<usize>> {
        let rendered = Rendered::new(&self.document.borrow());
        rendered
            .html
            .select(selector)
            .filter_map(|element| element.value().attr(NODE_MARKER))
            .filter_map(|marker| marker.parse::<usize>().ok())
            .filter_map(|index| rendered.paths.get(index))
            .filter(|path| path.starts_with(scope) && (include_scope || path.len() > scope.len()))
            .cloned()
            .collect()
    }
}

/// The document as parsed HTML, with the child-index path of every marked node
struct Rendered {
    html: Html,
    paths: Vec<Vec<usize>>,
}

impl Rendered {
    fn new(document: &ElementNode) -> Self {
        let mut markup = String::new();
        let mut paths = Vec::new();
        write_node(document, &mut Vec::new(), &mut markup, &mut paths);
        Self { html: Html::parse_document(&markup), paths }
    }
}

fn write_node(node: &ElementNode, path: &mut Vec<usize>, out: &mut String, paths: &mut Vec<Vec<usize>>) {
    let marker = paths.len();
    paths.push(path.clone());

    out.push('<');
    out.push_str(&node.tag_name);
    for (name, value) in &node.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
    }
    out.push_str(&format!(" {}=\"{}\">", NODE_MARKER, marker));

    if VOID_TAGS.iter().any(|tag| node.is_tag(tag)) {
        return;
    }
    if let Some(text) = &node.text_content {
        out.push_str(&escape_html(text));
    }
    for (index, child) in node.children.iter().enumerate() {
        path.push(index);
        write_node(child, path, out, paths);
        path.pop();
    }
    out.push_str(&format!("</{}>", node.tag_name));
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| PageError::InvalidSelector { selector: selector.to_string(), reason: e.to_string() })
}

fn node_at_mut<'n>(root: &'n mut ElementNode, path: &[usize]) -> Option<&'n mut ElementNode> {
    let mut node = root;
    for &index in path {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

impl Page for SnapshotPage {
    type Element<'a> = SnapshotElement<'a>;

    fn query(&self, selector: &str) -> Result<Vec<SnapshotElement<'_>>> {
        let selector = parse_selector(selector)?;
        let paths = self.matching_paths(&[], &selector, true);
        Ok(paths.into_iter().map(|path| self.handle(path)).collect())
    }

    fn visit(&self, url: &str) -> Result<()> {
        self.load(url)
    }

    fn current_url(&self) -> Result<String> {
        Ok(self.location())
    }

    fn is_ajax_idle(&self) -> Result<bool> {
        let pending = self.pending_requests.get();
        if pending == 0 {
            return Ok(true);
        }
        self.pending_requests.set(pending - 1);
        Ok(false)
    }
}

/// Handle to a node of a [`SnapshotPage`] document, addressed by child-index path
#[derive(Debug, Clone)]
pub struct SnapshotElement<'a> {
    page: &'a SnapshotPage,
    path: Vec<usize>,
    generation: u64,
}

impl std::fmt::Debug for SnapshotPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotPage")
            .field("location", &*self.location.borrow())
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SnapshotElement<'_> {
    /// Run `read` against the node and whether it and all its ancestors are visible
    fn read<R>(&self, read: impl FnOnce(&ElementNode, bool) -> R) -> Result<R> {
        self.check_generation()?;
        let document = self.page.document.borrow();
        let mut node = &*document;
        let mut displayed = node.is_visible;
        for &index in &self.path {
            node = node.children.get(index).ok_or_else(|| self.stale())?;
            displayed &= node.is_visible;
        }
        Ok(read(node, displayed))
    }

    fn check_generation(&self) -> Result<()> {
        if self.generation != self.page.generation.get() {
            return Err(self.stale());
        }
        Ok(())
    }

    fn stale(&self) -> PageError {
        PageError::StaleElement(format!("node at {:?} belongs to a previous document", self.path))
    }

    fn toggle_fold(&self) -> Result<()> {
        let mut document = self.page.document.borrow_mut();
        let node = node_at_mut(&mut document, &self.path).ok_or_else(|| self.stale())?;
        let Some(expanded) = node.get_attribute("aria-expanded").map(|v| v == "true") else {
            return Ok(());
        };
        node.add_attribute("aria-expanded", (!expanded).to_string());
        let controls = node.get_attribute("aria-controls").cloned();

        let Some(id) = controls else {
            return Ok(());
        };
        if let Some(panel) = document.find_by_id_mut(&id) {
            panel.is_visible = !expanded;
            if !expanded && panel.children.is_empty() {
                if let Some(children) = self.page.lazy_panels.get(&id) {
                    log::debug!("Filling lazy panel #{} with {} children", id, children.len());
                    panel.children = children.clone();
                }
            }
        }
        Ok(())
    }

    fn select_option(&self) -> Result<()> {
        let Some((&selected, parent_path)) = self.path.split_last() else {
            return Ok(());
        };
        let mut document = self.page.document.borrow_mut();
        let parent = node_at_mut(&mut document, parent_path).ok_or_else(|| self.stale())?;
        for (index, sibling) in parent.children.iter_mut().enumerate() {
            if !sibling.is_tag("option") {
                continue;
            }
            if index == selected {
                sibling.add_attribute("selected", "selected");
            } else {
                sibling.remove_attribute("selected");
            }
        }
        Ok(())
    }
}

impl Element for SnapshotElement<'_> {
    fn text(&self) -> Result<String> {
        self.read(|node, displayed| if displayed { node.rendered_text() } else { String::new() })
    }

    fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.read(|node, _| node.get_attribute(name).cloned())
    }

    fn click(&self) -> Result<()> {
        let (description, displayed, href, is_option) = self.read(|node, displayed| {
            (node.to_simple_string(), displayed, node.get_attribute("href").cloned(), node.is_tag("option"))
        })?;
        if !displayed {
            return Err(PageError::Driver(format!("Element is not interactable: {}", description)));
        }

        log::debug!("Snapshot click on {}", description);
        self.page.clicks.borrow_mut().push(description);

        self.toggle_fold()?;
        if is_option {
            self.select_option()?;
        }
        match href {
            Some(href) if !href.is_empty() && !href.starts_with('#') => self.page.load(&href),
            _ => Ok(()),
        }
    }

    fn type_text(&self, text: &str) -> Result<()> {
        self.check_generation()?;
        let mut document = self.page.document.borrow_mut();
        let node = node_at_mut(&mut document, &self.path).ok_or_else(|| self.stale())?;
        let value = format!("{}{}", node.get_attribute("value").map(String::as_str).unwrap_or(""), text);
        node.add_attribute("value", value);
        Ok(())
    }

    fn is_displayed(&self) -> Result<bool> {
        self.read(|_, displayed| displayed)
    }

    fn query(&self, selector: &str) -> Result<Vec<Self>> {
        self.read(|_, _| ())?;
        let selector = parse_selector(selector)?;
        let paths = self.page.matching_paths(&self.path, &selector, false);
        Ok(paths.into_iter().map(|path| self.page.handle(path)).collect())
    }
}
