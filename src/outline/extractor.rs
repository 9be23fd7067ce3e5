use crate::dom::{Element, Page};
use crate::error::{PageError, Result};
use crate::outline::{CourseOutline, OutlineLevel, OutlineSelectors, expand_all};

/// Reads the section/subsection structure of a course outline
pub struct OutlineExtractor<'p, P: Page> {
    page: &'p P,
    selectors: &'p OutlineSelectors,
}

impl<'p, P: Page> OutlineExtractor<'p, P> {
    pub fn new(page: &'p P, selectors: &'p OutlineSelectors) -> Self {
        Self { page, selectors }
    }

    /// Click every collapsed fold; returns the number of clicks
    pub fn expand_all(&self) -> Result<usize> {
        expand_all(self.page, self.selectors)
    }

    /// Expand all folds and read the outline in document order
    pub fn extract_outline(&self) -> Result<CourseOutline> {
        self.expand_all()?;

        let mut outline = CourseOutline::new();
        for section in self.sections()? {
            let title = section.first_line()?;
            let subsections = section
                .query(&self.selectors.subsection)?
                .iter()
                .map(Element::first_line)
                .collect::<Result<Vec<_>>>()?;
            outline.push_section(title, subsections);
        }
        Ok(outline)
    }

    pub fn sections(&self) -> Result<Vec<P::Element<'p>>> {
        self.page.query(&self.selectors.section)
    }

    /// Section titles in document order, duplicates included
    pub fn section_titles(&self) -> Result<Vec<String>> {
        self.sections()?.iter().map(Element::first_line).collect()
    }

    /// Zero-based position of the first section titled `title`
    pub fn section_index(&self, title: &str) -> Result<usize> {
        self.section_titles()?.iter().position(|t| t == title).ok_or_else(|| PageError::NotFound {
            kind: OutlineLevel::Section,
            title: title.to_string(),
            scope: None,
        })
    }

    pub fn section_count(&self) -> Result<usize> {
        Ok(self.sections()?.len())
    }

    /// Subsections of the named section, or of the first section when `None`
    pub fn subsection_count(&self, section_title: Option<&str>) -> Result<usize> {
        let index = match section_title {
            Some(title) => self.section_index(title)?,
            None => 0,
        };
        match self.sections()?.get(index) {
            Some(section) => Ok(section.query(&self.selectors.subsection)?.len()),
            None => Ok(0),
        }
    }

    /// Units listed for the first subsection
    pub fn unit_count(&self) -> Result<usize> {
        Ok(self.page.query(&self.selectors.unit_item)?.len())
    }
}
