//! Wire DTOs for the course API.
//!
//! DESIGN
//! ======
//! Course ids arrive as either JSON numbers or strings depending on the
//! backing store, so `CourseId` accepts both and renders them the same way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Course identifier as sent by the API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A course summary as listed on the courses page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response body of `GET /courses`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub data: Vec<Course>,
}
