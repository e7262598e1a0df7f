//! Headless report: analyse a CSV file and print the outcome as JSON.
//!
//! Exit codes: 0 on success, 1 when the file fails analysis, 2 on usage or
//! I/O errors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use grade_lens::data::{AnalysisResult, analyze, loader};
use serde_json::json;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: grade_report <file.csv>")?;

    let raw = loader::load_upload(&path)?;
    let result = analyze(&raw);

    let report = match &result {
        AnalysisResult::Success { table, stats } => json!({
            "status": "success",
            "rows": table.len(),
            "columns": table.column_names().collect::<Vec<_>>(),
            "statistics": stats,
        }),
        AnalysisResult::Failure(err) => json!({
            "status": "failure",
            "kind": err.kind(),
            "message": err.to_string(),
        }),
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialising report")?
    );
    Ok(result.is_success())
}
