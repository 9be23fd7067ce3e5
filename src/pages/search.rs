use crate::dom::{Element, Page};
use crate::error::Result;
use crate::pages::{CourseContext, PageObject};

const SEARCH_RESULTS_SELECTOR: &str = ".page-content > .search-results";
const SEARCH_RESULT_ITEM_SELECTOR: &str = ".search-results-item";

/// Results of a course search
pub struct CourseSearchResultsPage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
}

impl<'p, P: Page> CourseSearchResultsPage<'p, P> {
    pub fn new(ctx: CourseContext<'p, P>) -> Self {
        Self { ctx }
    }

    /// Result items in document order
    pub fn search_results(&self) -> Result<Vec<P::Element<'p>>> {
        self.ctx.page.query(SEARCH_RESULT_ITEM_SELECTOR)
    }

    pub fn search_result_texts(&self) -> Result<Vec<String>> {
        self.search_results()?.iter().map(Element::text).collect()
    }
}

impl<P: Page> PageObject for CourseSearchResultsPage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "course search results"
    }

    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(SEARCH_RESULTS_SELECTOR)
    }
}
