use crate::dom::{Element, Page, WaitOptions, wait_until};
use crate::error::{PageError, Result};
use crate::outline::{OutlineExtractor, OutlineLevel, OutlineSelectors};

/// Moves from the outline into the courseware for a (section, subsection) pair.
///
/// Subsections are resolved inside the already-resolved section, so a
/// subsection title repeated under another section never matches.
pub struct Navigator<'p, P: Page> {
    page: &'p P,
    selectors: &'p OutlineSelectors,
    wait: WaitOptions,
}

impl<'p, P: Page> Navigator<'p, P> {
    pub fn new(page: &'p P, selectors: &'p OutlineSelectors, wait: WaitOptions) -> Self {
        Self { page, selectors, wait }
    }

    fn extractor(&self) -> OutlineExtractor<'p, P> {
        OutlineExtractor::new(self.page, self.selectors)
    }

    /// Click the first unit link of `subsection_title` under `section_title`,
    /// then block until `arrived(section, subsection)` holds.
    pub fn go_to_section<F>(&self, section_title: &str, subsection_title: &str, arrived: F) -> Result<()>
    where
        F: Fn(&str, &str) -> Result<bool>,
    {
        let extractor = self.extractor();
        extractor.expand_all()?;

        let section_index = extractor.section_index(section_title)?;
        let sections = extractor.sections()?;
        let section = sections.get(section_index).ok_or_else(|| PageError::NotFound {
            kind: OutlineLevel::Section,
            title: section_title.to_string(),
            scope: None,
        })?;

        let mut target = None;
        for subsection in section.query(&self.selectors.subsection)? {
            if subsection.first_line()? == subsection_title {
                target = Some(subsection);
                break;
            }
        }
        let subsection = target.ok_or_else(|| PageError::NotFound {
            kind: OutlineLevel::Subsection,
            title: subsection_title.to_string(),
            scope: Some(section_title.to_string()),
        })?;

        let link = subsection.query(&self.selectors.unit_link)?.into_iter().next().ok_or_else(|| {
            PageError::ElementNotFound(format!(
                "No unit link in subsection '{}' of section '{}'",
                subsection_title, section_title
            ))
        })?;

        log::info!("Navigating to section '{}', subsection '{}'", section_title, subsection_title);
        link.click()?;

        wait_until(
            &self.wait,
            &format!(
                "Waiting for course page with section '{}' and subsection '{}'",
                section_title, subsection_title
            ),
            || arrived(section_title, subsection_title),
        )
    }

    /// Resolve zero-based indices to titles, then [`Navigator::go_to_section`]
    pub fn go_to_section_by_index<F>(&self, section_index: usize, subsection_index: usize, arrived: F) -> Result<()>
    where
        F: Fn(&str, &str) -> Result<bool>,
    {
        let (section_title, subsection_title) = self.resolve_indices(section_index, subsection_index)?;
        self.go_to_section(&section_title, &subsection_title, arrived)
    }

    /// Titles at the given zero-based positions, in document order
    pub fn resolve_indices(&self, section_index: usize, subsection_index: usize) -> Result<(String, String)> {
        let extractor = self.extractor();
        extractor.expand_all()?;

        let sections = extractor.sections()?;
        let section = sections.get(section_index).ok_or(PageError::IndexOutOfRange {
            kind: OutlineLevel::Section,
            index: section_index,
            len: sections.len(),
            section_index: None,
        })?;

        let subsections = section.query(&self.selectors.subsection)?;
        let subsection = subsections.get(subsection_index).ok_or(PageError::IndexOutOfRange {
            kind: OutlineLevel::Subsection,
            index: subsection_index,
            len: subsections.len(),
            section_index: Some(section_index),
        })?;

        Ok((section.first_line()?, subsection.first_line()?))
    }
}
