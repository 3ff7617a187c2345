//! Scan Canvas courses for an enabled external tool.
//!
//! For every requested academic term, lists the account's courses through
//! the paginated accounts endpoint, checks each course's navigation tabs
//! for the tool's tab with `public` visibility, and writes the matching
//! courses to a CSV file.
//!
//! Requests are issued one at a time; a failed listing page or tab lookup
//! is logged and skipped so one bad course or term never sinks the run.

use anyhow::Result;
use log::info;

pub mod canvas;
pub mod config;
pub mod courses;
pub mod report;
pub mod tabs;

pub use canvas::Canvas;
pub use config::{ConfigError, RunConfig};
pub use courses::{collect_courses, Course};
pub use report::{write_csv, EnabledCourse};
pub use tabs::{check_enabled, find_enabled_courses, has_public_tool_tab, Tab};

/// Collect, check, and write. Returns the records that were written.
pub async fn run(config: &RunConfig) -> Result<Vec<EnabledCourse>> {
    let canvas = Canvas::new(config)?;
    run_with(&canvas, config).await
}

/// Same pipeline against a caller-supplied client, so tests can point it
/// at a local server.
pub async fn run_with(canvas: &Canvas, config: &RunConfig) -> Result<Vec<EnabledCourse>> {
    let courses = collect_courses(canvas, config).await?;
    let enabled = find_enabled_courses(canvas, &courses, &config.tool_id).await?;
    write_csv(&enabled, &config.output)?;
    info!(
        "wrote {} rows to {}",
        enabled.len(),
        config.output.display(),
    );
    Ok(enabled)
}
