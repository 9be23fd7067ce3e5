use crate::dom::{Element, Page};
use crate::error::Result;
use crate::outline::{CourseOutline, Navigator, OutlineExtractor};
use crate::pages::course_home::COURSE_HOME_SELECTOR;
use crate::pages::{CourseContext, CoursewarePage, PageObject};

const OUTLINE_RESUME_COURSE_SELECTOR: &str = ".btn.btn-primary.action-resume-course";

/// Course outline fragment of the course home page
pub struct CourseOutlinePage<'p, P: Page> {
    ctx: CourseContext<'p, P>,
}

impl<'p, P: Page> CourseOutlinePage<'p, P> {
    pub fn new(ctx: CourseContext<'p, P>) -> Self {
        Self { ctx }
    }

    fn extractor(&self) -> OutlineExtractor<'p, P> {
        OutlineExtractor::new(self.ctx.page, &self.ctx.config.selectors)
    }

    fn navigator(&self) -> Navigator<'p, P> {
        Navigator::new(self.ctx.page, &self.ctx.config.selectors, self.ctx.config.wait)
    }

    /// Sections and their subsections, for example
    ///
    /// ```text
    /// {
    ///     "Introduction": ["Course Overview"],
    ///     "Week 1": ["Lesson 1", "Lesson 2", "Homework"],
    ///     "Final Exam": ["Final Exam"]
    /// }
    /// ```
    ///
    /// These titles can be passed to [`CourseOutlinePage::go_to_section`].
    pub fn sections(&self) -> Result<CourseOutline> {
        self.extractor().extract_outline()
    }

    pub fn num_sections(&self) -> Result<usize> {
        self.extractor().section_count()
    }

    /// Subsections of `section_title`, or of the first section when `None`
    pub fn num_subsections(&self, section_title: Option<&str>) -> Result<usize> {
        self.extractor().subsection_count(section_title)
    }

    /// Units in the first subsection
    pub fn num_units(&self) -> Result<usize> {
        self.extractor().unit_count()
    }

    /// Go to the section/subsection in the courseware.
    ///
    /// Every section must have at least one subsection, so both titles are required:
    /// `outline.go_to_section("Week 1", "Lesson 1")`
    pub fn go_to_section(&self, section_title: &str, subsection_title: &str) -> Result<()> {
        let courseware = self.courseware();
        self.navigator().go_to_section(section_title, subsection_title, |section, subsection| {
            Ok(courseware.is_browser_on_page()? && courseware.is_on_section(section, subsection)?)
        })
    }

    /// Zero-based variant of [`CourseOutlinePage::go_to_section`]
    pub fn go_to_section_by_index(&self, section_index: usize, subsection_index: usize) -> Result<()> {
        let courseware = self.courseware();
        self.navigator().go_to_section_by_index(section_index, subsection_index, |section, subsection| {
            Ok(courseware.is_browser_on_page()? && courseware.is_on_section(section, subsection)?)
        })
    }

    /// Navigate to the courseware with the outline's Resume Course button
    pub fn resume_course_from_outline(&self) -> Result<CoursewarePage<'p, P>> {
        self.ctx.page.first(OUTLINE_RESUME_COURSE_SELECTOR)?.click()?;
        let courseware = self.courseware();
        courseware.wait_for_page()?;
        Ok(courseware)
    }

    fn courseware(&self) -> CoursewarePage<'p, P> {
        CoursewarePage::new(self.ctx.clone())
    }
}

impl<P: Page> PageObject for CourseOutlinePage<'_, P> {
    type Page = P;

    fn page(&self) -> &P {
        self.ctx.page
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.ctx.config
    }

    fn name(&self) -> &str {
        "course outline"
    }

    /// The outline has no URL of its own; it lives on the course home page
    fn is_browser_on_page(&self) -> Result<bool> {
        self.ctx.page.is_present(COURSE_HOME_SELECTOR)
    }
}
