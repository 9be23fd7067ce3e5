//! Page objects for the LMS course experience
//!
//! Each page object borrows the [`Page`] facade and the shared [`PageConfig`]
//! and exposes test-facing actions and checks. Nothing is cached: every call
//! reads the live document.

pub mod bookmarks;
pub mod course_home;
pub mod course_outline;
pub mod courseware;
pub mod search;
pub mod staff_preview;

pub use bookmarks::BookmarksPage;
pub use course_home::CourseHomePage;
pub use course_outline::CourseOutlinePage;
pub use courseware::CoursewarePage;
pub use search::CourseSearchResultsPage;
pub use staff_preview::StaffPreviewPage;

use crate::config::PageConfig;
use crate::dom::{Page, wait_until};
use crate::error::{PageError, Result};

/// Behavior shared by every page object
pub trait PageObject {
    type Page: Page;

    fn page(&self) -> &Self::Page;

    fn config(&self) -> &PageConfig;

    /// Name used in log lines and wait descriptions
    fn name(&self) -> &str;

    /// Absolute URL, for pages that can be visited directly
    fn url(&self) -> Option<String> {
        None
    }

    fn is_browser_on_page(&self) -> Result<bool>;

    /// Navigate to [`PageObject::url`] and wait until the page is recognized
    fn visit(&self) -> Result<()> {
        let url = self
            .url()
            .ok_or_else(|| PageError::NavigationFailed(format!("{} has no URL to visit", self.name())))?;
        log::info!("Visiting {} at {}", self.name(), url);
        self.page().visit(&url)?;
        self.wait_for_page()
    }

    fn wait_for_page(&self) -> Result<()> {
        let description = format!("Waiting for the browser to be on {}", self.name());
        wait_until(&self.config().wait, &description, || self.is_browser_on_page())
    }

    fn wait_for<F>(&self, description: &str, predicate: F) -> Result<()>
    where
        F: FnMut() -> Result<bool>,
    {
        wait_until(&self.config().wait, description, predicate)
    }

    /// Block until the page reports no outstanding asynchronous requests
    fn wait_for_ajax(&self) -> Result<()> {
        wait_until(&self.config().wait, "Waiting for ajax requests to finish", || self.page().is_ajax_idle())
    }
}

/// What every course-scoped page object needs: the page, the config and the course
pub struct CourseContext<'p, P: Page> {
    pub page: &'p P,
    pub config: &'p PageConfig,
    pub course_id: String,
}

impl<'p, P: Page> CourseContext<'p, P> {
    pub fn new(page: &'p P, config: &'p PageConfig, course_id: impl Into<String>) -> Self {
        Self { page, config, course_id: course_id.into() }
    }

    /// `{base_url}/courses/{course_id}/{path}`
    pub fn course_url(&self, path: &str) -> String {
        self.config.course_url(&self.course_id, path)
    }
}

impl<P: Page> Clone for CourseContext<'_, P> {
    fn clone(&self) -> Self {
        Self { page: self.page, config: self.config, course_id: self.course_id.clone() }
    }
}
