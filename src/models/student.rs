use serde::{Deserialize, Serialize};

/// A person enrolled under exactly one course.
///
/// `course_id` is a back-reference to the course the student enrolled under.
/// It is set once, at enrollment, and is informational only: deleting the
/// course does not remove its students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub address: Option<String>,
    pub course_id: i32,
}
