use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use canvas_tool_check::config::mask_token;
use canvas_tool_check::RunConfig;

#[derive(Parser, Debug)]
#[command(
    name = "canvas-tool-check",
    version,
    about = "Scan Canvas courses for an enabled external tool"
)]
struct Args {
    /// External tool tab id (e.g. context_external_tool_36409)
    #[arg(long, value_name = "ID")]
    tool_id: String,

    /// Comma-separated SIS term ids (e.g. 2024-30,2024-40,2025-20)
    #[arg(long, value_name = "IDS")]
    term_ids: String,

    /// Output CSV file path
    #[arg(long, value_name = "PATH", default_value = "output/enabled_courses.csv")]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = RunConfig::from_env(args.tool_id, &args.term_ids, args.output)?;
    debug!(
        "host {}, account {}, token {}, tool {}, terms {}",
        config.hostname,
        config.account_id,
        mask_token(&config.access_token),
        config.tool_id,
        config.term_ids.join(","),
    );

    canvas_tool_check::run(&config).await?;
    Ok(())
}
