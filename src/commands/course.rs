//! Course Commands

use serde::Serialize;

use super::{call, call_without_args};
use crate::course::CourseUpdate;
use crate::error::AppResult;
use crate::models::Course;

#[derive(Serialize)]
struct CourseIdArgs<'a> {
    #[serde(rename = "courseId")]
    course_id: &'a str,
}

#[derive(Serialize)]
struct UpdateCourseArgs<'a> {
    #[serde(rename = "courseId")]
    course_id: &'a str,
    update: &'a CourseUpdate,
}

pub async fn list_courses() -> AppResult<Vec<Course>> {
    call_without_args("list_courses").await
}

pub async fn get_course(course_id: &str) -> AppResult<Course> {
    call("get_course", &CourseIdArgs { course_id }).await
}

pub async fn list_categories() -> AppResult<Vec<String>> {
    call_without_args("list_categories").await
}

pub async fn update_course(course_id: &str, update: &CourseUpdate) -> AppResult<Course> {
    call("update_course", &UpdateCourseArgs { course_id, update }).await
}
