use crate::dom::{Element, Page};
use crate::error::{PageError, Result};
use crate::pages::{CourseContext, PageObject};

const PREVIEW_MENU_SELECTOR: &str = ".preview-menu";
const VIEW_MODE_OPTIONS_SELECTOR: &str = ".preview-menu #action-preview-select option";

/// Staff "view course as" preview bar
pub struct StaffPreviewPage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
}

impl<'p, P: Page> StaffPreviewPage<'p, P> {
    pub fn new(ctx: CourseContext<'p, P>) -> Self {
        Self { ctx }
    }

    /// Text of the selected view-mode option
    pub fn staff_view_mode(&self) -> Result<Option<String>> {
        for option in self.ctx.page.query(VIEW_MODE_OPTIONS_SELECTOR)? {
            if option.attribute("selected")?.is_some() {
                return Ok(Some(option.first_line()?));
            }
        }
        Ok(None)
    }

    /// Select the view-mode option titled `mode` and wait for the preview to reload
    pub fn set_staff_view_mode(&self, mode: &str) -> Result<()> {
        let mut target = None;
        for option in self.ctx.page.query(VIEW_MODE_OPTIONS_SELECTOR)? {
            if option.first_line()? == mode {
                target = Some(option);
                break;
            }
        }
        let option =
            target.ok_or_else(|| PageError::ElementNotFound(format!("No staff view mode option '{}'", mode)))?;
        option.click()?;
        self.wait_for_ajax()?;

        self.wait_for(&format!("Waiting for staff view mode '{}'", mode), || {
            Ok(self.staff_view_mode()?.as_deref() == Some(mode))
        })
    }
}

impl<P: Page> PageObject for StaffPreviewPage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "staff preview bar"
    }

    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(PREVIEW_MENU_SELECTOR)
    }
}
