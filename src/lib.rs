//! # course-pages
//!
//! Page objects for browser acceptance tests of an LMS course home page.
//!
//! ## Features
//!
//! - **Course outline**: read the section → subsection structure, expanding every accordion fold first
//! - **Navigation**: jump from the outline into the courseware by title or by index, and wait for arrival
//! - **Course home actions**: course goals, bookmarks, resume course, search, staff preview
//! - **Two backends**: a live Chrome tab over CDP, or an in-memory DOM snapshot for fast tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use course_pages::{BrowserSession, LaunchOptions, PageConfig};
//! use course_pages::pages::{CourseHomePage, PageObject};
//!
//! # fn main() -> course_pages::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let page = session.page()?;
//! let config = PageConfig::from_env();
//!
//! let home = CourseHomePage::new(&page, &config, "course-v1:edX+DemoX+Demo_Course");
//! home.visit()?;
//!
//! let outline = home.outline.sections()?;
//! println!("{} sections", outline.len());
//!
//! home.outline.go_to_section("Week 1", "Lesson 1")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Without a browser
//!
//! ```rust
//! use course_pages::dom::{ElementNode, SnapshotPage};
//! use course_pages::outline::{OutlineExtractor, OutlineSelectors};
//!
//! # fn main() -> course_pages::Result<()> {
//! let page = SnapshotPage::new(ElementNode::new("ol").with_child(
//!     ElementNode::new("li")
//!         .with_class("outline-item section")
//!         .with_child(
//!             ElementNode::new("button")
//!                 .with_class("section-name accordion-trigger")
//!                 .with_attr("aria-expanded", "true")
//!                 .with_text("Introduction"),
//!         ),
//! ));
//! let selectors = OutlineSelectors::default();
//! let outline = OutlineExtractor::new(&page, &selectors).extract_outline()?;
//! assert_eq!(outline.section_titles().collect::<Vec<_>>(), vec!["Introduction"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: the element query facade (`Page`, `Element`), waits and the snapshot DOM
//! - [`browser`]: Chrome session management and the CDP adapter
//! - [`outline`]: outline model, fold expansion, extraction and navigation
//! - [`pages`]: the page objects
//! - [`config`]: shared page configuration
//! - [`error`]: error types and result aliases

pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod outline;
pub mod pages;

pub use browser::{BrowserSession, ChromePage, ConnectionOptions, LaunchOptions};
pub use config::PageConfig;
pub use dom::{Element, ElementNode, Page, SnapshotPage, WaitOptions};
pub use error::{PageError, Result};
pub use outline::{CourseOutline, OutlineLevel, OutlineNode};
