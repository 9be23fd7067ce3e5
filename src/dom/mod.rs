//! Element query facade
//!
//! Page objects never talk to a browser directly. They go through two traits:
//! - [`Page`]: document-wide queries and navigation primitives
//! - [`Element`]: a handle to one matched element (text, attributes, click, scoped queries)
//!
//! Two adapters are provided: [`crate::browser::ChromePage`] over a live CDP tab,
//! and [`SnapshotPage`], an in-memory DOM built from [`ElementNode`] trees or HTML.

pub mod element;
pub mod snapshot;
pub mod wait;

pub use element::ElementNode;
pub use snapshot::{SnapshotElement, SnapshotPage};
pub use wait::{WaitOptions, wait_until};

use crate::error::{PageError, Result};

/// A handle to an element matched by a selector query
pub trait Element: Sized {
    /// Rendered text of the element; hidden descendants contribute nothing
    fn text(&self) -> Result<String>;

    /// Attribute value, or `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Result<Option<String>>;

    fn click(&self) -> Result<()>;

    /// Type text into the element (inputs)
    fn type_text(&self, text: &str) -> Result<()>;

    fn is_displayed(&self) -> Result<bool>;

    /// Query descendants of this element, in document order
    fn query(&self, selector: &str) -> Result<Vec<Self>>;

    /// First line of the rendered text, trimmed
    fn first_line(&self) -> Result<String> {
        Ok(first_line(&self.text()?))
    }
}

/// A document the page objects can query and navigate
pub trait Page {
    type Element<'a>: Element
    where
        Self: 'a;

    /// Query the whole document, in document order
    fn query(&self, selector: &str) -> Result<Vec<Self::Element<'_>>>;

    fn visit(&self, url: &str) -> Result<()>;

    fn current_url(&self) -> Result<String>;

    /// Whether the page has no outstanding asynchronous requests
    fn is_ajax_idle(&self) -> Result<bool>;

    /// First match, or `ElementNotFound`
    fn first(&self, selector: &str) -> Result<Self::Element<'_>> {
        self.query(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| PageError::ElementNotFound(format!("No element matches '{}'", selector)))
    }

    fn is_present(&self, selector: &str) -> Result<bool> {
        Ok(!self.query(selector)?.is_empty())
    }

    /// Whether any match is displayed
    fn is_visible(&self, selector: &str) -> Result<bool> {
        for element in self.query(selector)? {
            if element.is_displayed()? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// First line of a multi-line text block, trimmed
pub fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Week 1\nLesson 1\nLesson 2"), "Week 1");
        assert_eq!(first_line("  Homework  "), "Homework");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_page_helpers_on_snapshot() {
        let root = ElementNode::new("body")
            .with_child(ElementNode::new("div").with_class("success-message").with_text("Saved"))
            .with_child(ElementNode::new("div").with_class("current-goal-container").with_visibility(false));
        let page = SnapshotPage::new(root);

        assert!(page.is_present(".success-message").unwrap());
        assert!(page.is_present(".current-goal-container").unwrap());
        assert!(!page.is_visible(".current-goal-container").unwrap());
        assert!(matches!(page.first(".missing"), Err(PageError::ElementNotFound(_))));
    }
}
