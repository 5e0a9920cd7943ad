use serde::{Deserialize, Serialize};

/// Area of knowledge a course belongs to. Serialized as the uppercase
/// string form ("ENGINEERING", "MEDICAL", "MANAGEMENT") on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseType {
    Engineering,
    Medical,
    Management,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: i32,
    pub course_name: String,
    pub course_duration: i32,
    pub course_type: CourseType,
}
