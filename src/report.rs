use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::courses::Course;

/// One output row. The serde field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnabledCourse {
    pub term_id: String,
    pub course_id: u64,
    pub course_name: String,
}

impl EnabledCourse {
    pub fn from_course(course: &Course) -> Self {
        Self {
            term_id: course.term_id.clone(),
            course_id: course.id,
            course_name: course.name.clone(),
        }
    }
}

/// Write the records to `path` as CSV, header first, overwriting any
/// existing file. The parent directory is created if missing.
pub fn write_csv(records: &[EnabledCourse], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
