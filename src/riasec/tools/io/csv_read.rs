use std::collections::HashMap;
use std::path::Path;

use crate::riasec::tools::error::Result;
use crate::riasec::tools::flatten::QuestionRow;
use crate::riasec::tools::model::{AnswerOption, Question, Scores};

/// Reads the flat question table produced by the
/// [`csv_write`](crate::io::csv_write) module.
pub fn read_rows(path: &Path) -> Result<Vec<QuestionRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: QuestionRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads the table and reshapes it into nested questions.
pub fn read_questions(path: &Path) -> Result<Vec<Question>> {
    let rows = read_rows(path)?;
    Ok(reshape_rows(rows))
}

/// Folds flat rows into questions, grouping by `questionId`.
///
/// Questions appear in the order their id is first seen; within a question,
/// options keep the row order. Question text and category take the
/// first-seen values for the group; later rows with diverging values are
/// ignored. Missing score cells default to 0.
pub fn reshape_rows(rows: Vec<QuestionRow>) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let index = match index_by_id.get(&row.question_id) {
            Some(&index) => index,
            None => {
                questions.push(Question {
                    id: row.question_id.clone(),
                    text: row.question_text.clone(),
                    category: row.category.clone(),
                    options: Vec::new(),
                });
                index_by_id.insert(row.question_id.clone(), questions.len() - 1);
                questions.len() - 1
            }
        };

        let scores = Scores::new(
            row.r.unwrap_or(0),
            row.i.unwrap_or(0),
            row.a.unwrap_or(0),
            row.s.unwrap_or(0),
            row.e.unwrap_or(0),
            row.c.unwrap_or(0),
        );

        questions[index].options.push(AnswerOption {
            id: row.option_id,
            text: row.option_text,
            scores,
        });
    }

    questions
}
