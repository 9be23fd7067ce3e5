use crate::dom::Page;
use crate::error::Result;
use crate::pages::{CourseContext, PageObject};

const BOOKMARKS_SELECTOR: &str = ".course-bookmarks";

/// Course bookmarks page
pub struct BookmarksPage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
}

impl<'p, P: Page> BookmarksPage<'p, P> {
    pub fn new(ctx: CourseContext<'p, P>) -> Self {
        Self { ctx }
    }
}

impl<P: Page> PageObject for BookmarksPage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "bookmarks page"
    }

    fn url(&self) -> Option<String> {
        Some(self.ctx.course_url("bookmarks/"))
    }

    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(BOOKMARKS_SELECTOR)
    }
}
