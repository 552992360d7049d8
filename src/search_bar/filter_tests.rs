//! Tests for suggestion filtering

use proptest::prelude::*;

use super::*;
use crate::test_utils::test_helpers::sample_catalog;

fn numbered_catalog(codes: &[&str]) -> Vec<Course> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| Course::new(i as i64, *code))
        .collect()
}

#[test]
fn test_filter_prefix_match() {
    let matches = filter_courses(&sample_catalog(), "CS2");
    assert_eq!(matches, vec![Course::new(2, "CS201")]);
}

#[test]
fn test_filter_substring_match() {
    let catalog = numbered_catalog(&["MATH101", "CS101", "PHYS101", "CS150"]);
    let codes: Vec<String> = filter_courses(&catalog, "101")
        .into_iter()
        .map(|c| c.course_code)
        .collect();

    assert_eq!(codes, vec!["MATH101", "CS101", "PHYS101"]);
}

#[test]
fn test_filter_is_case_insensitive() {
    let catalog = sample_catalog();
    assert_eq!(filter_courses(&catalog, "CS"), filter_courses(&catalog, "cs"));
    assert_eq!(filter_courses(&catalog, "cS").len(), 2);
}

#[test]
fn test_filter_no_match() {
    assert!(filter_courses(&sample_catalog(), "BIO").is_empty());
}

#[test]
fn test_filter_empty_catalog() {
    assert!(filter_courses(&[], "CS").is_empty());
}

#[test]
fn test_filter_caps_at_twelve() {
    let catalog: Vec<Course> = (0..20)
        .map(|i| Course::new(i as i64, format!("CS{:03}", i)))
        .collect();

    let matches = filter_courses(&catalog, "c");

    assert_eq!(matches.len(), MAX_SUGGESTIONS);
    assert_eq!(matches.len(), 12);
    assert_eq!(matches[0].course_code, "CS000");
    assert_eq!(matches[11].course_code, "CS011");
}

#[test]
fn test_filter_non_ascii_codes() {
    let catalog = numbered_catalog(&["ÉCON100", "econ200"]);
    assert_eq!(filter_courses(&catalog, "écon").len(), 1);
    assert_eq!(filter_courses(&catalog, "ECON").len(), 1);
}

fn course_strategy() -> impl Strategy<Value = Course> {
    (any::<i64>(), "[A-Za-z]{0,4}[0-9]{0,3}").prop_map(|(id, code)| Course::new(id, code))
}

// Suggestions are exactly the first 12 catalog entries, in catalog order,
// whose lowercased code contains the lowercased input.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_filter_matches_reference(
        catalog in prop::collection::vec(course_strategy(), 0..40),
        query in "[A-Za-z0-9]{0,3}",
    ) {
        let needle = query.to_lowercase();
        let expected: Vec<Course> = catalog
            .iter()
            .filter(|c| c.course_code.to_lowercase().contains(&needle))
            .take(12)
            .cloned()
            .collect();

        prop_assert_eq!(filter_courses(&catalog, &query), expected);
    }

    #[test]
    fn prop_filter_ignores_query_case(
        catalog in prop::collection::vec(course_strategy(), 0..40),
        query in "[A-Za-z0-9]{1,3}",
    ) {
        prop_assert_eq!(
            filter_courses(&catalog, &query.to_uppercase()),
            filter_courses(&catalog, &query.to_lowercase())
        );
    }
}
