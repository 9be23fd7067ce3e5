use crate::config::PageConfig;
use crate::dom::{Element, Page};
use crate::error::Result;
use crate::pages::{
    BookmarksPage, CourseContext, CourseOutlinePage, CourseSearchResultsPage, CoursewarePage, PageObject,
    StaffPreviewPage,
};

pub(crate) const COURSE_HOME_SELECTOR: &str = ".course-outline-visualprogress";
const HEADER_RESUME_COURSE_SELECTOR: &str = ".page-header .action-resume-course";
const GOAL_OPTION_SELECTOR: &str = "button.goal-option";
const GOAL_SUCCESS_SELECTOR: &str = ".success-message";
const GOAL_UPDATE_FIELD_SELECTOR: &str = ".current-goal-container";
const BOOKMARKS_BUTTON_SELECTOR: &str = ".bookmarks-list-button";
const SEARCH_INPUT_SELECTOR: &str = ".search-form > .search-input";
const SEARCH_BUTTON_SELECTOR: &str = ".search-form .search-button";

/// Course home page, including the course outline
pub struct CourseHomePage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
    pub outline: CourseOutlinePage<'p, P>,
    pub preview: StaffPreviewPage<'p, P>,
}

impl<'p, P: Page> CourseHomePage<'p, P> {
    pub fn new(page: &'p P, config: &'p PageConfig, course_id: impl Into<String>) -> Self {
        let ctx = CourseContext::new(page, config, course_id);
        Self { outline: CourseOutlinePage::new(ctx.clone()), preview: StaffPreviewPage::new(ctx.clone()), ctx }
    }

    pub fn course_id(&self) -> &str {
        &self.ctx.course_id
    }

    /// Click the first course goal offered in the goal message
    pub fn select_course_goal(&self) -> Result<()> {
        self.ctx.page.first(GOAL_OPTION_SELECTOR)?.click()?;
        self.wait_for_ajax()
    }

    pub fn is_course_goal_success_message_shown(&self) -> Result<bool> {
        self.ctx.page.is_present(GOAL_SUCCESS_SELECTOR)
    }

    pub fn is_course_goal_update_field_shown(&self) -> Result<bool> {
        self.ctx.page.is_visible(GOAL_UPDATE_FIELD_SELECTOR)
    }

    /// Whether the goal update shows its success (`valid`) or error icon
    pub fn is_course_goal_update_icon_shown(&self, valid: bool) -> Result<bool> {
        let icon = if valid { "check" } else { "close" };
        self.ctx.page.is_present(&format!(".fa-{}", icon))
    }

    /// Click the Bookmarks button and land on the bookmarks page
    pub fn click_bookmarks_button(&self) -> Result<BookmarksPage<'p, P>> {
        self.ctx.page.first(BOOKMARKS_BUTTON_SELECTOR)?.click()?;
        let bookmarks = BookmarksPage::new(self.ctx.clone());
        bookmarks.visit()?;
        Ok(bookmarks)
    }

    /// Navigate to the courseware with the Resume Course button in the header
    pub fn resume_course_from_header(&self) -> Result<CoursewarePage<'p, P>> {
        self.ctx.page.first(HEADER_RESUME_COURSE_SELECTOR)?.click()?;
        let courseware = CoursewarePage::new(self.ctx.clone());
        courseware.wait_for_page()?;
        Ok(courseware)
    }

    /// Search within the course for `term`
    pub fn search_for_term(&self, term: &str) -> Result<CourseSearchResultsPage<'p, P>> {
        for input in self.ctx.page.query(SEARCH_INPUT_SELECTOR)? {
            input.type_text(term)?;
        }
        self.ctx.page.first(SEARCH_BUTTON_SELECTOR)?.click()?;
        log::info!("Searched course {} for '{}'", self.ctx.course_id, term);
        Ok(CourseSearchResultsPage::new(self.ctx.clone()))
    }
}

impl<P: Page> PageObject for CourseHomePage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "course home page"
    }

    fn url(&self) -> Option<String> {
        Some(self.ctx.course_url("course/"))
    }

    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(COURSE_HOME_SELECTOR)
    }
}
