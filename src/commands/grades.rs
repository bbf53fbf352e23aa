//! Grade export command

use std::fs;
use std::path::Path;

use teamgrade::config::ClientConfig;
use teamgrade::output::{OperationResult, OutputMode};
use teamgrade::services::grade;

use super::context;

/// Download the grade spreadsheet to `output`, or print it
pub async fn download_grades(output: Option<&Path>, output_mode: OutputMode) -> anyhow::Result<()> {
    let api = context::connect(&ClientConfig::load())?;
    let content = grade::download_grades_file(&api).await?;

    match output {
        Some(path) => {
            fs::write(path, &content)?;
            OperationResult::ok(format!("Grades written to {}", path.display())).render(output_mode);
        },
        None => print!("{content}"),
    }
    Ok(())
}
