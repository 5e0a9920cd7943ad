use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Course, Student};

/// Storage contract for the CMS. Any backend satisfying this trait is
/// interchangeable; handlers only ever see `Arc<dyn CmsRepository>`.
///
/// Id-keyed lookups return `None` for unknown ids rather than leaving the
/// behavior undefined, so callers can surface an explicit not-found.
#[async_trait]
pub trait CmsRepository: Send + Sync {
    /// All courses, in insertion order.
    async fn get_all_courses(&self) -> Vec<Course>;

    /// Stores a course and returns it with a freshly assigned id.
    /// The id on the input is ignored.
    async fn add_course(&self, course: Course) -> Course;

    async fn course_exists(&self, course_id: i32) -> bool;

    async fn get_course(&self, course_id: i32) -> Option<Course>;

    /// Replaces every field of the stored course except its id.
    async fn update_course(&self, course_id: i32, course: Course) -> Option<Course>;

    /// Removes the course and returns it, or `None` if it was never there.
    /// Students enrolled under the course are left in place.
    async fn delete_course(&self, course_id: i32) -> Option<Course>;

    /// Students whose back-reference points at `course_id`, in insertion order.
    async fn get_students(&self, course_id: i32) -> Vec<Student>;

    /// Stores a student and returns it with a freshly assigned id. The
    /// caller must have set `course_id` to an existing course beforehand.
    async fn add_student(&self, student: Student) -> Student;
}

#[derive(Debug)]
struct Inner {
    courses: Vec<Course>,
    students: Vec<Student>,
    next_course_id: i32,
    next_student_id: i32,
}

/// Process-local store shared by every request. A single mutex guards both
/// collections; ids count up from 1 and are never reused after deletion.
#[derive(Debug)]
pub struct InMemoryRepository {
    inner: Mutex<Inner>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                courses: Vec::new(),
                students: Vec::new(),
                next_course_id: 1,
                next_student_id: 1,
            }),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CmsRepository for InMemoryRepository {
    async fn get_all_courses(&self) -> Vec<Course> {
        self.inner.lock().await.courses.clone()
    }

    async fn add_course(&self, mut course: Course) -> Course {
        let mut inner = self.inner.lock().await;
        course.course_id = inner.next_course_id;
        inner.next_course_id += 1;
        inner.courses.push(course.clone());
        course
    }

    async fn course_exists(&self, course_id: i32) -> bool {
        self.inner
            .lock()
            .await
            .courses
            .iter()
            .any(|c| c.course_id == course_id)
    }

    async fn get_course(&self, course_id: i32) -> Option<Course> {
        self.inner
            .lock()
            .await
            .courses
            .iter()
            .find(|c| c.course_id == course_id)
            .cloned()
    }

    async fn update_course(&self, course_id: i32, course: Course) -> Option<Course> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .courses
            .iter_mut()
            .find(|c| c.course_id == course_id)?;
        stored.course_name = course.course_name;
        stored.course_duration = course.course_duration;
        stored.course_type = course.course_type;
        Some(stored.clone())
    }

    async fn delete_course(&self, course_id: i32) -> Option<Course> {
        let mut inner = self.inner.lock().await;
        let pos = inner
            .courses
            .iter()
            .position(|c| c.course_id == course_id)?;
        Some(inner.courses.remove(pos))
    }

    async fn get_students(&self, course_id: i32) -> Vec<Student> {
        self.inner
            .lock()
            .await
            .students
            .iter()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect()
    }

    async fn add_student(&self, mut student: Student) -> Student {
        let mut inner = self.inner.lock().await;
        student.student_id = inner.next_student_id;
        inner.next_student_id += 1;
        inner.students.push(student.clone());
        student
    }
}
