use crate::catalog::Course;

/// Upper bound on rendered suggestions
pub const MAX_SUGGESTIONS: usize = 12;

/// Case-insensitive substring match over `course_code`
///
/// Keeps catalog order and stops after `MAX_SUGGESTIONS` matches.
pub fn filter_courses(catalog: &[Course], query: &str) -> Vec<Course> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|course| course.course_code.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
