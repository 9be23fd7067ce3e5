mod common;

use common::{COURSE_ID, SAMPLE, config, course_page, lazy_course_page, link_clicks, unit_url};
use course_pages::outline::{Navigator, OutlineExtractor};
use course_pages::pages::CourseHomePage;
use course_pages::{OutlineLevel, Page, PageError};

#[test]
fn test_extract_outline_expands_and_keeps_document_order() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let outline = home.outline.sections().unwrap();

    assert_eq!(outline.len(), 2);
    assert_eq!(outline.section_titles().collect::<Vec<_>>(), vec!["Introduction", "Week 1"]);
    assert_eq!(outline.subsections("Introduction").unwrap(), ["Course Overview"]);
    assert_eq!(outline.subsections("Week 1").unwrap(), ["Lesson 1", "Lesson 2", "Homework"]);
    // 2 section folds + 4 subsection folds
    assert_eq!(page.click_count(), 6);
    assert!(link_clicks(&page).is_empty());
}

#[test]
fn test_subsections_inserted_on_expand_are_extracted() {
    let page = lazy_course_page(SAMPLE);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    // subsection folds only exist once their section opens
    assert!(page.query(&config.selectors.subsection_trigger).unwrap().is_empty());

    let outline = home.outline.sections().unwrap();

    assert_eq!(outline.subsections("Introduction").unwrap(), ["Course Overview"]);
    assert_eq!(outline.subsections("Week 1").unwrap(), ["Lesson 1", "Lesson 2", "Homework"]);
    assert_eq!(page.click_count(), 6);
    assert!(page.query("[aria-expanded=\"false\"]").unwrap().is_empty());
}

#[test]
fn test_go_to_section_on_lazy_outline() {
    let page = lazy_course_page(SAMPLE);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    home.outline.go_to_section("Week 1", "Homework").unwrap();

    assert_eq!(page.location(), unit_url(1, 2, 1));
}

#[test]
fn test_extract_outline_is_idempotent() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let first = home.outline.sections().unwrap();
    let clicks_after_first = page.click_count();
    let second = home.outline.sections().unwrap();

    assert_eq!(first, second);
    assert_eq!(page.click_count(), clicks_after_first);
}

#[test]
fn test_counts_do_not_expand() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    assert_eq!(home.outline.num_sections().unwrap(), 2);
    assert_eq!(home.outline.num_subsections(Some("Week 1")).unwrap(), 3);
    assert_eq!(home.outline.num_subsections(None).unwrap(), 1);
    assert_eq!(home.outline.num_units().unwrap(), 2);
    assert_eq!(page.click_count(), 0);
}

#[test]
fn test_go_to_section_by_index_clicks_first_link() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    home.outline.go_to_section_by_index(1, 2).unwrap();

    assert_eq!(page.location(), unit_url(1, 2, 1));
    let links = link_clicks(&page);
    assert_eq!(links.len(), 1);
    assert!(links[0].contains("Unit 1"));
}

#[test]
fn test_go_to_section_by_index_matches_by_title() {
    for (i, (section, subsections)) in SAMPLE.iter().enumerate() {
        for (j, subsection) in subsections.iter().enumerate() {
            let config = config();

            let by_index = course_page(SAMPLE, false);
            CourseHomePage::new(&by_index, &config, COURSE_ID).outline.go_to_section_by_index(i, j).unwrap();

            let by_title = course_page(SAMPLE, false);
            CourseHomePage::new(&by_title, &config, COURSE_ID).outline.go_to_section(section, subsection).unwrap();

            assert_eq!(by_index.location(), by_title.location());
            assert_eq!(by_index.clicks(), by_title.clicks());
        }
    }
}

#[test]
fn test_section_index_out_of_range() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let err = home.outline.go_to_section_by_index(2, 0).unwrap_err();
    match &err {
        PageError::IndexOutOfRange { kind, index, len, section_index } => {
            assert_eq!(*kind, OutlineLevel::Section);
            assert_eq!(*index, 2);
            assert_eq!(*len, 2);
            assert_eq!(*section_index, None);
        }
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
    assert!(err.to_string().contains("index 2"));
    assert!(link_clicks(&page).is_empty());
}

#[test]
fn test_subsection_index_out_of_range() {
    let page = course_page(SAMPLE, true);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let err = home.outline.go_to_section_by_index(0, 1).unwrap_err();
    assert!(matches!(
        err,
        PageError::IndexOutOfRange { kind: OutlineLevel::Subsection, index: 1, len: 1, section_index: Some(0) }
    ));
}

#[test]
fn test_unknown_subsection_never_clicks() {
    let page = course_page(SAMPLE, true);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let err = home.outline.go_to_section("Week 1", "Lesson 9").unwrap_err();

    assert!(matches!(err, PageError::NotFound { kind: OutlineLevel::Subsection, .. }));
    assert_eq!(page.click_count(), 0);
}

#[test]
fn test_unknown_subsection_on_collapsed_outline_clicks_no_link() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    assert!(home.outline.go_to_section("Week 1", "Lesson 9").is_err());
    assert!(link_clicks(&page).is_empty());
}

#[test]
fn test_unknown_section_names_section() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let err = home.outline.go_to_section("Week 2", "Lesson 1").unwrap_err();

    assert!(matches!(&err, PageError::NotFound { kind: OutlineLevel::Section, title, .. } if title == "Week 2"));
    assert!(err.to_string().contains("Week 2"));
    assert!(link_clicks(&page).is_empty());
}

#[test]
fn test_subsection_lookup_is_scoped_to_section() {
    let sections: &[(&str, &[&str])] = &[("Week 1", &["Overview"]), ("Week 2", &["Lesson", "Overview"])];
    let config = config();

    let page = course_page(sections, false);
    CourseHomePage::new(&page, &config, COURSE_ID).outline.go_to_section("Week 2", "Overview").unwrap();
    assert_eq!(page.location(), unit_url(1, 1, 1));

    let page = course_page(sections, false);
    let err = CourseHomePage::new(&page, &config, COURSE_ID).outline.go_to_section("Week 1", "Lesson").unwrap_err();
    match err {
        PageError::NotFound { kind, title, scope } => {
            assert_eq!(kind, OutlineLevel::Subsection);
            assert_eq!(title, "Lesson");
            assert_eq!(scope.as_deref(), Some("Week 1"));
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_section_without_subsections() {
    let sections: &[(&str, &[&str])] = &[("Introduction", &["Course Overview"]), ("Coming Soon", &[])];
    let page = course_page(sections, false);
    let config = config();
    let home = CourseHomePage::new(&page, &config, COURSE_ID);

    let outline = home.outline.sections().unwrap();
    assert_eq!(outline.len(), 2);
    assert!(outline.subsections("Coming Soon").unwrap().is_empty());

    let err = home.outline.go_to_section("Coming Soon", "Anything").unwrap_err();
    assert!(matches!(err, PageError::NotFound { kind: OutlineLevel::Subsection, .. }));
    assert_eq!(home.outline.num_subsections(Some("Coming Soon")).unwrap(), 0);
}

#[test]
fn test_arrival_timeout_carries_description() {
    let page = course_page(SAMPLE, true);
    let config = config();
    let navigator = Navigator::new(&page, &config.selectors, config.wait);

    let err = navigator.go_to_section("Week 1", "Lesson 2", |_, _| Ok(false)).unwrap_err();

    match err {
        PageError::Timeout { description, .. } => {
            assert!(description.contains("Week 1"));
            assert!(description.contains("Lesson 2"));
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
    assert_eq!(page.location(), unit_url(1, 1, 1));
}

#[test]
fn test_navigator_passes_titles_to_arrival_check() {
    let page = course_page(SAMPLE, false);
    let config = config();
    let navigator = Navigator::new(&page, &config.selectors, config.wait);
    let seen = std::cell::RefCell::new(Vec::new());

    navigator
        .go_to_section_by_index(0, 0, |section, subsection| {
            seen.borrow_mut().push((section.to_string(), subsection.to_string()));
            Ok(true)
        })
        .unwrap();

    assert_eq!(seen.into_inner(), vec![("Introduction".to_string(), "Course Overview".to_string())]);
}

#[test]
fn test_extractor_section_titles_keep_duplicates() {
    let sections: &[(&str, &[&str])] = &[("Review", &["Quiz"]), ("Review", &["Exam"])];
    let page = course_page(sections, false);
    let config = config();
    let extractor = OutlineExtractor::new(&page, &config.selectors);

    assert_eq!(extractor.section_titles().unwrap(), vec!["Review", "Review"]);
    let outline = extractor.extract_outline().unwrap();
    assert_eq!(outline.len(), 1);
    assert_eq!(outline.subsections("Review").unwrap(), ["Quiz"]);
}
