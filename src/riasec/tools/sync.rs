use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::riasec::tools::catalog;
use crate::riasec::tools::error::{Result, ToolError};
use crate::riasec::tools::flatten::build_rows;
use crate::riasec::tools::io::csv_read;
use crate::riasec::tools::io::csv_write;
use crate::riasec::tools::model::QuizModel;

/// Exports the built-in question bank as a flat CSV table.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub fn export_questions(output: &Path) -> Result<()> {
    let questions = catalog::question_bank();
    let rows = build_rows(&questions);
    info!(
        question_count = questions.len(),
        row_count = rows.len(),
        "flattened question bank"
    );
    csv_write::write_rows(output, &rows)
}

/// Builds the quiz model document from the question table: reshapes the rows
/// into nested questions, attaches the career map and metadata, and writes
/// the pretty-printed JSON document.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn build_model(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(ToolError::MissingInput(input.to_path_buf()));
    }

    let questions = csv_read::read_questions(input)?;
    info!(
        question_count = questions.len(),
        "reshaped questions from table"
    );

    let model = QuizModel::assemble(questions);
    let json_string = serde_json::to_string_pretty(&model)?;
    fs::write(output, json_string)?;

    report_output_size(output);
    Ok(())
}

/// Post-write sanity check. Advisory only: a missing or unreadable output
/// file is logged, never raised.
fn report_output_size(output: &Path) {
    match fs::metadata(output) {
        Ok(metadata) => info!(bytes = metadata.len(), "model document written"),
        Err(_) => warn!(
            output = %output.display(),
            "model document missing after write"
        ),
    }
}
