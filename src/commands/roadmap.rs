//! Roadmap Commands

use serde::Serialize;

use super::{call, call_unit};
use crate::error::AppResult;
use crate::models::Roadmap;

#[derive(Serialize)]
struct CourseIdArgs<'a> {
    #[serde(rename = "courseId")]
    course_id: &'a str,
}

#[derive(Serialize)]
struct SaveRoadmapArgs<'a> {
    #[serde(rename = "courseId")]
    course_id: &'a str,
    roadmap: &'a Roadmap,
}

pub async fn load_roadmap(course_id: &str) -> AppResult<Roadmap> {
    call("load_roadmap", &CourseIdArgs { course_id }).await
}

pub async fn save_roadmap(course_id: &str, roadmap: &Roadmap) -> AppResult<()> {
    call_unit("save_roadmap", &SaveRoadmapArgs { course_id, roadmap }).await
}
