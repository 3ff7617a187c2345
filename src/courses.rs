use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::canvas::Canvas;
use crate::config::RunConfig;

/// A course as listed by the accounts endpoint, tagged with the term it was
/// collected under. The tag is ours, not Canvas's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(skip)]
    pub term_id: String,
}

/// Fetch every course in every requested term, in term order.
///
/// Terms are addressed through their SIS ids. Courses are not deduplicated
/// across terms; a course listed under two terms stays in twice.
pub async fn collect_courses(canvas: &Canvas, config: &RunConfig) -> Result<Vec<Course>> {
    let mut all_courses = Vec::new();
    for term_id in &config.term_ids {
        info!("fetching courses for term {term_id}");
        let url = canvas.api_url(&format!(
            "accounts/{}/courses?enrollment_term_id=sis_term_id:{term_id}&per_page=100",
            config.account_id,
        ));
        let listed = canvas.fetch_all(&url).await?;
        info!("found {} courses for term {term_id}", listed.len());
        for object in listed {
            let mut course: Course =
                serde_json::from_value(object).context("parse course object")?;
            course.term_id = term_id.clone();
            all_courses.push(course);
        }
    }
    info!("total courses fetched: {}", all_courses.len());
    Ok(all_courses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_decodes_and_ignores_extra_fields() {
        let course: Course = serde_json::from_value(serde_json::json!({
            "id": 101,
            "name": "Intro to Databases",
            "workflow_state": "available",
            "enrollment_term_id": 7,
        }))
        .unwrap();
        assert_eq!(course.id, 101);
        assert_eq!(course.name, "Intro to Databases");
        assert_eq!(course.term_id, "");
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let course: Course = serde_json::from_value(serde_json::json!({ "id": 7 })).unwrap();
        assert_eq!(course.name, "");
    }

    #[test]
    fn missing_id_is_an_error() {
        let result: Result<Course, _> =
            serde_json::from_value(serde_json::json!({ "name": "No Id" }));
        assert!(result.is_err());
    }
}
