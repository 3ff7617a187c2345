use anyhow::Result;
use log::{debug, info};
use serde::Deserialize;

use crate::canvas::Canvas;
use crate::courses::Course;
use crate::report::EnabledCourse;

/// A navigation tab on a course. External tools show up here with ids like
/// `context_external_tool_36409`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tab {
    pub id: String,
    #[serde(default)]
    pub visibility: Option<String>,
}

/// True when the tab list carries the tool's tab with visibility exactly
/// `public`. A tab with the right id but any other visibility does not
/// count, and scanning continues past it.
pub fn has_public_tool_tab(tabs: &[Tab], tool_id: &str) -> bool {
    tabs.iter()
        .any(|tab| tab.id == tool_id && tab.visibility.as_deref() == Some("public"))
}

/// Check one course's tabs. A failed tabs request skips the course rather
/// than aborting the run.
pub async fn check_enabled(
    canvas: &Canvas,
    course: &Course,
    tool_id: &str,
) -> Result<Option<EnabledCourse>> {
    debug!("checking tabs for course {} ({})", course.id, course.name);
    let url = canvas.api_url(&format!("courses/{}/tabs", course.id));
    let Some(tabs) = canvas.get_json::<Vec<Tab>>(&url).await? else {
        return Ok(None);
    };
    if !has_public_tool_tab(&tabs, tool_id) {
        return Ok(None);
    }
    debug!("tool enabled in course {} ({})", course.id, course.name);
    Ok(Some(EnabledCourse::from_course(course)))
}

/// Run the tab check over every collected course, preserving discovery
/// order in the result.
pub async fn find_enabled_courses(
    canvas: &Canvas,
    courses: &[Course],
    tool_id: &str,
) -> Result<Vec<EnabledCourse>> {
    let mut enabled = Vec::new();
    for course in courses {
        if let Some(record) = check_enabled(canvas, course, tool_id).await? {
            enabled.push(record);
        }
    }
    info!("courses with tool {tool_id} enabled: {}", enabled.len());
    Ok(enabled)
}
