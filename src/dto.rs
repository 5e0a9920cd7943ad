use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Course, CourseType, Student};

/// Wire record for a course. Field names follow the published API contract
/// (PascalCase), distinct from the internal entity representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CourseDto {
    #[serde(default)]
    pub course_id: i32,
    pub course_name: String,
    pub course_duration: i32,
    pub course_type: CourseType,
}

/// Wire record for a student. The course back-reference is internal and
/// never serialized; the enclosing URL carries the course id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentDto {
    #[serde(default)]
    pub student_id: i32,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl CourseDto {
    /// Field checks run before the repository is touched; the course type
    /// is already constrained by deserialization.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.course_name.is_empty() {
            return Err(AppError::Validation("CourseName is required".to_string()));
        }
        if self.course_name.chars().count() > 50 {
            return Err(AppError::Validation(
                "CourseName must be at most 50 characters".to_string(),
            ));
        }
        if !(1..=5).contains(&self.course_duration) {
            return Err(AppError::Validation(
                "CourseDuration must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }
}

impl StudentDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.is_empty() {
            return Err(AppError::Validation("FirstName is required".to_string()));
        }
        if self.first_name.chars().count() > 30 {
            return Err(AppError::Validation(
                "FirstName must be at most 30 characters".to_string(),
            ));
        }
        if let Some(last_name) = &self.last_name {
            if last_name.chars().count() > 30 {
                return Err(AppError::Validation(
                    "LastName must be at most 30 characters".to_string(),
                ));
            }
        }
        if self.phone_number.is_empty() {
            return Err(AppError::Validation("PhoneNumber is required".to_string()));
        }
        if let Some(address) = &self.address {
            if address.chars().count() > 100 {
                return Err(AppError::Validation(
                    "Address must be at most 100 characters".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Builds the entity for an enrollment under `course_id`. The caller
    /// verifies the course exists before this conversion.
    pub fn into_entity(self, course_id: i32) -> Student {
        Student {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            address: self.address,
            course_id,
        }
    }
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Course {
            course_id: dto.course_id,
            course_name: dto.course_name,
            course_duration: dto.course_duration,
            course_type: dto.course_type,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        CourseDto {
            course_id: course.course_id,
            course_name: course.course_name,
            course_duration: course.course_duration,
            course_type: course.course_type,
        }
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        StudentDto {
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
            phone_number: student.phone_number,
            address: student.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_course() -> CourseDto {
        CourseDto {
            course_id: 0,
            course_name: "CS101".to_string(),
            course_duration: 4,
            course_type: CourseType::Engineering,
        }
    }

    fn valid_student() -> StudentDto {
        StudentDto {
            student_id: 0,
            first_name: "Ann".to_string(),
            last_name: None,
            phone_number: "555-1111".to_string(),
            address: None,
        }
    }

    #[test]
    fn test_course_validation() {
        assert!(valid_course().validate().is_ok());

        let mut empty_name = valid_course();
        empty_name.course_name.clear();
        assert!(empty_name.validate().is_err());

        let mut long_name = valid_course();
        long_name.course_name = "x".repeat(51);
        assert!(long_name.validate().is_err());

        let mut zero_duration = valid_course();
        zero_duration.course_duration = 0;
        assert!(zero_duration.validate().is_err());

        let mut long_duration = valid_course();
        long_duration.course_duration = 6;
        assert!(long_duration.validate().is_err());
    }

    #[test]
    fn test_student_validation() {
        assert!(valid_student().validate().is_ok());

        let mut no_first = valid_student();
        no_first.first_name.clear();
        assert!(no_first.validate().is_err());

        let mut no_phone = valid_student();
        no_phone.phone_number.clear();
        assert!(no_phone.validate().is_err());

        let mut long_address = valid_student();
        long_address.address = Some("x".repeat(101));
        assert!(long_address.validate().is_err());
    }

    #[test]
    fn test_course_wire_format() {
        let json = serde_json::to_value(CourseDto {
            course_id: 1,
            course_name: "CS101".to_string(),
            course_duration: 4,
            course_type: CourseType::Engineering,
        })
        .unwrap();

        assert_eq!(json["CourseId"], 1);
        assert_eq!(json["CourseName"], "CS101");
        assert_eq!(json["CourseDuration"], 4);
        assert_eq!(json["CourseType"], "ENGINEERING");
    }

    #[test]
    fn test_course_id_defaults_on_create_payload() {
        let dto: CourseDto = serde_json::from_str(
            r#"{"CourseName":"CS101","CourseDuration":4,"CourseType":"MEDICAL"}"#,
        )
        .unwrap();

        assert_eq!(dto.course_id, 0);
        assert_eq!(dto.course_type, CourseType::Medical);
    }

    #[test]
    fn test_student_wire_format_omits_course() {
        let json = serde_json::to_value(StudentDto::from(Student {
            student_id: 1,
            first_name: "Ann".to_string(),
            last_name: Some("Lee".to_string()),
            phone_number: "555-1111".to_string(),
            address: None,
            course_id: 1,
        }))
        .unwrap();

        assert_eq!(json["StudentId"], 1);
        assert_eq!(json["FirstName"], "Ann");
        assert!(json.get("CourseId").is_none());
    }
}
