//! Course outline model, fold expansion, extraction and navigation

pub mod extractor;
pub mod fold;
pub mod navigator;

pub use extractor::OutlineExtractor;
pub use fold::{AccordionFold, Foldable, expand_all};
pub use navigator::Navigator;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two levels of the outline hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineLevel {
    Section,
    Subsection,
}

impl fmt::Display for OutlineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineLevel::Section => write!(f, "section"),
            OutlineLevel::Subsection => write!(f, "subsection"),
        }
    }
}

/// A titled entry of the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub title: String,
    pub kind: OutlineLevel,
}

impl OutlineNode {
    pub fn section(title: impl Into<String>) -> Self {
        Self { title: title.into(), kind: OutlineLevel::Section }
    }

    pub fn subsection(title: impl Into<String>) -> Self {
        Self { title: title.into(), kind: OutlineLevel::Subsection }
    }
}

/// Section title to subsection titles, both in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseOutline {
    sections: IndexMap<String, Vec<String>>,
}

impl CourseOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section. A repeated title keeps the first section's position and subsections.
    pub fn push_section(&mut self, title: impl Into<String>, subsections: Vec<String>) {
        match self.sections.entry(title.into()) {
            Entry::Vacant(entry) => {
                entry.insert(subsections);
            }
            Entry::Occupied(entry) => {
                log::warn!("Duplicate section title '{}'; keeping the first occurrence", entry.key());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn subsections(&self, section_title: &str) -> Option<&[String]> {
        self.sections.get(section_title).map(Vec::as_slice)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &[String])> {
        self.sections.get_index(index).map(|(title, subs)| (title.as_str(), subs.as_slice()))
    }

    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections.iter().map(|(title, subs)| (title.as_str(), subs.as_slice()))
    }

    /// Every node, sections followed by their subsections
    pub fn nodes(&self) -> Vec<OutlineNode> {
        self.iter()
            .flat_map(|(section, subs)| {
                std::iter::once(OutlineNode::section(section)).chain(subs.iter().map(OutlineNode::subsection))
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for CourseOutline {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut outline = CourseOutline::new();
        for (title, subsections) in iter {
            outline.push_section(title, subsections);
        }
        outline
    }
}

/// CSS selectors for the outline markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSelectors {
    pub section: String,
    pub section_trigger: String,
    pub subsection: String,
    pub subsection_trigger: String,
    /// Navigable links inside a subsection
    pub unit_link: String,
    /// Leaf items of the first subsection's unit list
    pub unit_item: String,
}

impl Default for OutlineSelectors {
    fn default() -> Self {
        Self {
            section: ".outline-item.section".to_string(),
            section_trigger: ".section-name.accordion-trigger".to_string(),
            subsection: ".subsection.accordion".to_string(),
            subsection_trigger: ".subsection-text.accordion-trigger".to_string(),
            unit_link: "a".to_string(),
            unit_item: ".sequence-list-wrapper ol li".to_string(),
        }
    }
}

impl OutlineSelectors {
    pub fn container(&self, level: OutlineLevel) -> &str {
        match level {
            OutlineLevel::Section => &self.section,
            OutlineLevel::Subsection => &self.subsection,
        }
    }

    pub fn trigger(&self, level: OutlineLevel) -> &str {
        match level {
            OutlineLevel::Section => &self.section_trigger,
            OutlineLevel::Subsection => &self.subsection_trigger,
        }
    }
}
