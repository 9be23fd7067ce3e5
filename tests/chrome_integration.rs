use course_pages::outline::{OutlineExtractor, OutlineSelectors};
use course_pages::{BrowserSession, Element, LaunchOptions, Page, SnapshotPage};

const OUTLINE_HTML: &str = "<html><body>\
<ol class='block-tree'>\
<li class='outline-item section'>\
<button class='section-name accordion-trigger' aria-expanded='false' \
aria-controls='s0' onclick='toggle(this)'>Week 1</button>\
<ol id='s0' style='display:none'>\
<li class='subsection accordion'>\
<button class='subsection-text accordion-trigger' aria-expanded='false' \
aria-controls='s0-0' onclick='toggle(this)'>Lesson 1</button>\
<ol id='s0-0' style='display:none'><li><a>Unit 1</a></li></ol>\
</li></ol></li></ol>\
<script>function toggle(b) {\
var open = b.getAttribute('aria-expanded') === 'true';\
b.setAttribute('aria-expanded', String(!open));\
document.getElementById(b.getAttribute('aria-controls')).style.display = open ? 'none' : 'block';\
}</script></body></html>";

#[test]
#[ignore] // Requires Chrome to be installed
fn test_chrome_outline_extraction() {
    let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");
    let page = session.page().expect("Failed to get page");
    page.visit(&format!("data:text/html,{}", OUTLINE_HTML)).expect("Failed to navigate");

    let link = page.first("a").expect("Unit link missing");
    assert!(!link.is_displayed().unwrap());

    let selectors = OutlineSelectors::default();
    let outline = OutlineExtractor::new(&page, &selectors).extract_outline().expect("Failed to extract outline");

    assert_eq!(outline.subsections("Week 1").unwrap(), ["Lesson 1"]);
    assert!(page.first("a").unwrap().is_displayed().unwrap());
}

#[test]
#[ignore]
fn test_chrome_query_without_match_is_empty() {
    let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");
    let page = session.page().expect("Failed to get page");
    page.visit("data:text/html,<html><body><p class='greeting'>Hello</p></body></html>").expect("Failed to navigate");

    assert!(page.query(".missing").unwrap().is_empty());
    assert_eq!(page.first(".greeting").unwrap().text().unwrap(), "Hello");
    assert_eq!(page.first("p").unwrap().attribute("class").unwrap().as_deref(), Some("greeting"));
    assert!(page.is_ajax_idle().unwrap());
}

#[test]
fn test_outline_markup_extracts_on_snapshot_backend() {
    let page = SnapshotPage::from_html(OUTLINE_HTML);

    let link = page.first("a").unwrap();
    assert!(!link.is_displayed().unwrap());

    let selectors = OutlineSelectors::default();
    let outline = OutlineExtractor::new(&page, &selectors).extract_outline().unwrap();

    assert_eq!(outline.subsections("Week 1").unwrap(), ["Lesson 1"]);
    assert!(page.first("a").unwrap().is_displayed().unwrap());
    assert_eq!(page.click_count(), 2);
}
