pub mod course;
pub mod student;

pub use course::{Course, CourseType};
pub use student::Student;
