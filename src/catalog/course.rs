use std::fmt;

use serde::Deserialize;

use super::CatalogError;

/// Course identifier as served by the API (numeric or string keys)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{}", n),
            CourseId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        CourseId::Number(id)
    }
}

impl From<i32> for CourseId {
    fn from(id: i32) -> Self {
        CourseId::Number(i64::from(id))
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        CourseId::Text(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        CourseId::Text(id)
    }
}

/// A single catalog entry
///
/// Only `id` and `course_code` are read; any other fields in the payload are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub course_code: String,
}

impl Course {
    pub fn new(id: impl Into<CourseId>, course_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            course_code: course_code.into(),
        }
    }
}

/// Decode a catalog response body
///
/// Anything other than a JSON array of records carrying both `id` and
/// `course_code` is rejected as a whole.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Course>, CatalogError> {
    serde_json::from_slice(body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "course_tests.rs"]
mod course_tests;
