use crate::dom::{Element, Page};
use crate::error::{PageError, Result};
use headless_chrome::Tab;
use headless_chrome::browser::tab::NoElementFound;
use std::sync::Arc;

const IS_DISPLAYED_JS: &str = r#"
    function() {
        return !!(this.offsetWidth || this.offsetHeight || this.getClientRects().length);
    }
"#;

const AJAX_IDLE_JS: &str = "typeof jQuery === 'undefined' || jQuery.active === 0";

/// [`Page`] adapter over a live CDP tab
#[derive(Clone)]
pub struct ChromePage {
    tab: Arc<Tab>,
}

impl ChromePage {
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }
}

fn driver_error(context: &str, e: anyhow::Error) -> PageError {
    PageError::Driver(format!("{}: {}", context, e))
}

/// `querySelectorAll` semantics: no match is an empty list, not an error
fn empty_on_no_match<T>(selector: &str, result: anyhow::Result<Vec<T>>) -> Result<Vec<T>> {
    match result {
        Ok(found) => Ok(found),
        Err(e) if e.downcast_ref::<NoElementFound>().is_some() => Ok(Vec::new()),
        Err(e) => Err(driver_error(&format!("Query '{}' failed", selector), e)),
    }
}

impl Page for ChromePage {
    type Element<'a> = ChromeElement<'a>;

    fn query(&self, selector: &str) -> Result<Vec<ChromeElement<'_>>> {
        let found = empty_on_no_match(selector, self.tab.find_elements(selector))?;
        Ok(found.into_iter().map(ChromeElement).collect())
    }

    fn visit(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| PageError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| PageError::NavigationFailed(format!("Navigation to {} did not complete: {}", url, e)))?;
        Ok(())
    }

    fn current_url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    fn is_ajax_idle(&self) -> Result<bool> {
        let result = self.tab.evaluate(AJAX_IDLE_JS, false).map_err(|e| driver_error("Ajax check failed", e))?;
        Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

/// [`Element`] adapter over a `headless_chrome` element
pub struct ChromeElement<'a>(pub headless_chrome::Element<'a>);

impl Element for ChromeElement<'_> {
    fn text(&self) -> Result<String> {
        self.0.get_inner_text().map_err(|e| driver_error("Failed to read text", e))
    }

    fn attribute(&self, name: &str) -> Result<Option<String>> {
        let attributes = self.0.get_attributes().map_err(|e| driver_error("Failed to read attributes", e))?;
        // CDP returns a flat [name, value, name, value, ...] list
        Ok(attributes.and_then(|flat| {
            flat.chunks(2).find(|pair| pair[0] == name).and_then(|pair| pair.get(1).cloned())
        }))
    }

    fn click(&self) -> Result<()> {
        self.0.click().map_err(|e| driver_error("Click failed", e))?;
        Ok(())
    }

    fn type_text(&self, text: &str) -> Result<()> {
        self.0.type_into(text).map_err(|e| driver_error("Typing failed", e))?;
        Ok(())
    }

    fn is_displayed(&self) -> Result<bool> {
        let result =
            self.0.call_js_fn(IS_DISPLAYED_JS, vec![], false).map_err(|e| driver_error("Visibility check failed", e))?;
        Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    fn query(&self, selector: &str) -> Result<Vec<Self>> {
        let found = empty_on_no_match(selector, self.0.find_elements(selector))?;
        Ok(found.into_iter().map(ChromeElement).collect())
    }
}
