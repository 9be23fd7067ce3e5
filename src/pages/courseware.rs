use crate::dom::{Element, Page};
use crate::error::Result;
use crate::pages::{CourseContext, PageObject};

const COURSE_CONTENT_SELECTOR: &str = ".course-content";
const SECTION_BREADCRUMB_SELECTOR: &str = ".nav-item.nav-item-section";
const SEQUENCE_BREADCRUMB_SELECTOR: &str = ".nav-item.nav-item-sequence";

/// Courseware (unit content) page, the landing page of outline navigation
pub struct CoursewarePage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
}

impl<'p, P: Page> CoursewarePage<'p, P> {
    pub fn new(ctx: CourseContext<'p, P>) -> Self {
        Self { ctx }
    }

    /// Whether the breadcrumbs name this section and subsection
    pub fn is_on_section(&self, section_title: &str, subsection_title: &str) -> Result<bool> {
        let Some(section) = self.breadcrumb(SECTION_BREADCRUMB_SELECTOR)? else {
            return Ok(false);
        };
        let Some(sequence) = self.breadcrumb(SEQUENCE_BREADCRUMB_SELECTOR)? else {
            return Ok(false);
        };
        log::debug!("Courseware breadcrumbs: '{}' / '{}'", section, sequence);
        Ok(section == section_title && sequence == subsection_title)
    }

    fn breadcrumb(&self, selector: &str) -> Result<Option<String>> {
        match self.ctx.page.query(selector)?.first() {
            Some(item) => Ok(Some(item.first_line()?)),
            None => Ok(None),
        }
    }
}

impl<P: Page> PageObject for CoursewarePage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "courseware page"
    }

    fn url(&self) -> Option<String> {
        Some(self.ctx.course_url("courseware/"))
    }

    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(COURSE_CONTENT_SELECTOR)
    }
}
