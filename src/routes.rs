use axum::Json;
use axum::extract::Path;
use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::dto::{CourseDto, StudentDto};
use crate::error::AppError;
use crate::models::Course;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{course_id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/courses/{course_id}/students",
            get(list_students).post(add_student),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Full list of courses available in the CMS.
async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseDto>>, AppError> {
    let courses = state.repo.get_all_courses().await;
    Ok(Json(courses.into_iter().map(CourseDto::from).collect()))
}

/// Adds a new course; the id on the payload is ignored and assigned fresh.
async fn create_course(
    State(state): State<AppState>,
    Json(course): Json<CourseDto>,
) -> Result<(StatusCode, Json<CourseDto>), AppError> {
    course.validate()?;
    let stored = state.repo.add_course(Course::from(course)).await;
    Ok((StatusCode::CREATED, Json(CourseDto::from(stored))))
}

/// Gets one course by id.
async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseDto>, AppError> {
    if !state.repo.course_exists(course_id).await {
        return Err(AppError::NotFound);
    }

    let course = state
        .repo
        .get_course(course_id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(CourseDto::from(course)))
}

/// Replaces every field of a course except its id.
async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(course): Json<CourseDto>,
) -> Result<Json<CourseDto>, AppError> {
    if !state.repo.course_exists(course_id).await {
        return Err(AppError::NotFound);
    }

    course.validate()?;
    let updated = state
        .repo
        .update_course(course_id, Course::from(course))
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(CourseDto::from(updated)))
}

/// Deletes a course and returns the removed record. Students enrolled
/// under it are kept (there is no cascade).
async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseDto>, AppError> {
    if !state.repo.course_exists(course_id).await {
        return Err(AppError::NotFound);
    }

    // Existence was just confirmed, so a miss here is a conflict, not a 404.
    let removed = state
        .repo
        .delete_course(course_id)
        .await
        .ok_or(AppError::DeleteConflict)?;
    Ok(Json(CourseDto::from(removed)))
}

/// Lists the students taking a course.
async fn list_students(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<StudentDto>>, AppError> {
    if !state.repo.course_exists(course_id).await {
        return Err(AppError::NotFound);
    }

    let students = state.repo.get_students(course_id).await;
    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

/// Enrolls a new student under a course.
async fn add_student(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(student): Json<StudentDto>,
) -> Result<(StatusCode, Json<StudentDto>), AppError> {
    if !state.repo.course_exists(course_id).await {
        return Err(AppError::NotFound);
    }

    student.validate()?;
    let stored = state.repo.add_student(student.into_entity(course_id)).await;
    Ok((StatusCode::CREATED, Json(StudentDto::from(stored))))
}
