#![allow(dead_code)]

use course_pages::dom::{ElementNode, SnapshotPage, WaitOptions};
use course_pages::PageConfig;

pub const COURSE_ID: &str = "course-v1:edX+DemoX+Demo_Course";
pub const BASE_URL: &str = "http://lms.test";

pub const SAMPLE: &[(&str, &[&str])] = &[
    ("Introduction", &["Course Overview"]),
    ("Week 1", &["Lesson 1", "Lesson 2", "Homework"]),
];

pub fn config() -> PageConfig {
    PageConfig::new(BASE_URL).with_wait(WaitOptions::new().timeout(300).poll_interval(5))
}

pub fn home_url() -> String {
    config().course_url(COURSE_ID, "course/")
}

pub fn unit_url(section: usize, subsection: usize, unit: usize) -> String {
    format!("/courseware/{}/{}/{}", section, subsection, unit)
}

fn fold_trigger(class: &str, panel_id: &str, expanded: bool, title: ElementNode) -> ElementNode {
    ElementNode::new("button")
        .with_class(class)
        .with_attr("aria-expanded", expanded.to_string())
        .with_attr("aria-controls", panel_id)
        .with_child(title)
}

fn subsection(section: usize, index: usize, title: &str, expanded: bool) -> ElementNode {
    let panel_id = format!("subsection-{}-{}", section, index);
    let units = (1..=2).map(|unit| {
        ElementNode::new("li").with_class("vertical").with_child(
            ElementNode::new("a")
                .with_class("outline-item focusable")
                .with_attr("href", unit_url(section, index, unit))
                .with_text(format!("Unit {}", unit)),
        )
    });

    ElementNode::new("li")
        .with_class("subsection accordion")
        .with_child(fold_trigger(
            "subsection-text accordion-trigger",
            &panel_id,
            expanded,
            ElementNode::new("h4")
                .with_class("subsection-title")
                .with_child(ElementNode::new("span").with_class("subsection-title-name").with_text(title)),
        ))
        .with_child(
            ElementNode::new("ol")
                .with_class("outline-item accordion-panel")
                .with_attr("id", panel_id)
                .with_visibility(expanded)
                .with_children(units.collect()),
        )
}

fn section(index: usize, title: &str, subsections: &[&str], expanded: bool) -> ElementNode {
    let panel_id = format!("section-{}", index);
    ElementNode::new("li")
        .with_class("outline-item section")
        .with_child(fold_trigger(
            "section-name accordion-trigger",
            &panel_id,
            expanded,
            ElementNode::new("h3").with_class("section-title").with_text(title),
        ))
        .with_child(
            ElementNode::new("ol")
                .with_class("outline-item accordion-panel")
                .with_attr("id", panel_id)
                .with_visibility(expanded)
                .with_children(
                    subsections.iter().enumerate().map(|(j, sub)| subsection(index, j, sub, expanded)).collect(),
                ),
        )
}

/// Course home document: header, goal message, staff preview, search form and the outline
pub fn home_document(sections: &[(&str, &[&str])], expanded: bool) -> ElementNode {
    let outline = ElementNode::new("ol").with_class("block-tree accordion").with_children(
        sections.iter().enumerate().map(|(i, (title, subs))| section(i, title, subs, expanded)).collect(),
    );

    let units = ElementNode::new("div")
        .with_class("sequence-list-wrapper")
        .with_child(ElementNode::new("ol").with_children(vec![ElementNode::new("li"), ElementNode::new("li")]));

    ElementNode::new("body")
        .with_child(
            ElementNode::new("header").with_class("page-header").with_child(
                ElementNode::new("a")
                    .with_class("action-resume-course")
                    .with_attr("href", "/courseware/resume")
                    .with_text("Resume Course"),
            ),
        )
        .with_child(
            ElementNode::new("div")
                .with_class("preview-menu")
                .with_child(
                    ElementNode::new("select")
                        .with_attr("id", "action-preview-select")
                        .with_child(ElementNode::new("option").with_attr("selected", "selected").with_text("Staff"))
                        .with_child(ElementNode::new("option").with_text("Learner"))
                        .with_child(ElementNode::new("option").with_text("Specific learner")),
                ),
        )
        .with_child(
            ElementNode::new("div")
                .with_class("message goal-message")
                .with_child(ElementNode::new("button").with_class("goal-option").with_text("Earn a certificate"))
                .with_child(ElementNode::new("button").with_class("goal-option").with_text("Just explore")),
        )
        .with_child(ElementNode::new("div").with_class("current-goal-container").with_visibility(false))
        .with_child(ElementNode::new("span").with_class("fa fa-check"))
        .with_child(ElementNode::new("button").with_class("bookmarks-list-button").with_text("Bookmarks"))
        .with_child(
            ElementNode::new("form")
                .with_class("search-form")
                .with_child(ElementNode::new("input").with_class("search-input"))
                .with_child(
                    ElementNode::new("button")
                        .with_class("search-button")
                        .with_attr("href", "/search")
                        .with_text("Search"),
                ),
        )
        .with_child(
            ElementNode::new("main")
                .with_class("course-outline")
                .with_child(ElementNode::new("div").with_class("course-outline-visualprogress"))
                .with_child(
                    ElementNode::new("a")
                        .with_class("btn btn-primary action-resume-course")
                        .with_attr("href", "/courseware/resume")
                        .with_text("Resume Course"),
                )
                .with_child(outline),
        )
        .with_child(units)
}

/// Courseware document whose breadcrumbs name `section` / `subsection`
pub fn courseware_document(section: &str, subsection: &str) -> ElementNode {
    ElementNode::new("body")
        .with_child(
            ElementNode::new("nav").with_class("breadcrumbs").with_children(vec![
                ElementNode::new("span").with_class("nav-item nav-item-course").with_text("Demo Course"),
                ElementNode::new("span").with_class("nav-item nav-item-section").with_text(section),
                ElementNode::new("span").with_class("nav-item nav-item-sequence").with_text(subsection),
            ]),
        )
        .with_child(ElementNode::new("div").with_class("course-content").with_text("Unit body"))
}

fn search_document() -> ElementNode {
    ElementNode::new("body").with_child(
        ElementNode::new("div").with_class("page-content").with_child(
            ElementNode::new("ol").with_class("search-results").with_children(vec![
                ElementNode::new("li").with_class("search-results-item").with_text("Lesson 1\nWeek 1"),
                ElementNode::new("li").with_class("search-results-item").with_text("Homework\nWeek 1"),
            ]),
        ),
    )
}

/// A course home page with every outline link, resume, bookmarks and search route registered
pub fn course_page(sections: &[(&str, &[&str])], expanded: bool) -> SnapshotPage {
    with_course_routes(SnapshotPage::new(home_document(sections, expanded)), sections)
}

fn with_course_routes(page: SnapshotPage, sections: &[(&str, &[&str])]) -> SnapshotPage {
    let config = config();
    let bookmarks = ElementNode::new("body").with_child(ElementNode::new("section").with_class("course-bookmarks"));
    let mut page = page
        .at(home_url())
        .with_route(home_url(), home_document(sections, false))
        .with_route("/courseware/resume", courseware_document(sections[0].0, sections[0].1[0]))
        .with_route(config.course_url(COURSE_ID, "bookmarks/"), bookmarks)
        .with_route("/search", search_document());

    for (i, (title, subs)) in sections.iter().enumerate() {
        for (j, sub) in subs.iter().enumerate() {
            page = page.with_route(unit_url(i, j, 1), courseware_document(title, sub));
        }
    }
    page
}

pub fn link_clicks(page: &SnapshotPage) -> Vec<String> {
    page.clicks().into_iter().filter(|click| click.contains("href=")).collect()
}

/// Like [`course_page`], but every section panel is empty and collapsed until its fold
/// is first opened, at which point its subsections are inserted
pub fn lazy_course_page(sections: &[(&str, &[&str])]) -> SnapshotPage {
    let mut document = home_document(sections, false);
    let mut lazy = Vec::new();
    for index in 0..sections.len() {
        let panel_id = format!("section-{}", index);
        if let Some(panel) = document.find_by_id_mut(&panel_id) {
            lazy.push((panel_id, std::mem::take(&mut panel.children)));
        }
    }

    let mut page = with_course_routes(SnapshotPage::new(document), sections);
    for (panel_id, children) in lazy {
        page = page.with_lazy_panel(panel_id, children);
    }
    page
}
