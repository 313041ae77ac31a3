use serde::{Deserialize, Serialize};

use crate::riasec::tools::model::Question;

/// One row of the flat question table, one per (question, option) pair.
///
/// Serialization names define the CSV header: `questionId, questionText,
/// category, optionId, optionText, R, I, A, S, E, C`. Score cells are
/// optional at the table boundary; a missing or empty cell reads back as
/// `None` and is defaulted to 0 when the table is reshaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRow {
    pub question_id: String,
    pub question_text: String,
    pub category: String,
    pub option_id: String,
    pub option_text: String,
    #[serde(rename = "R")]
    pub r: Option<u32>,
    #[serde(rename = "I")]
    pub i: Option<u32>,
    #[serde(rename = "A")]
    pub a: Option<u32>,
    #[serde(rename = "S")]
    pub s: Option<u32>,
    #[serde(rename = "E")]
    pub e: Option<u32>,
    #[serde(rename = "C")]
    pub c: Option<u32>,
}

/// Flattens questions into the row table, repeating the question fields on
/// every row belonging to it. Outer question order and inner option order are
/// preserved.
pub fn build_rows(questions: &[Question]) -> Vec<QuestionRow> {
    let mut rows = Vec::new();

    for question in questions {
        for option in &question.options {
            rows.push(QuestionRow {
                question_id: question.id.clone(),
                question_text: question.text.clone(),
                category: question.category.clone(),
                option_id: option.id.clone(),
                option_text: option.text.clone(),
                r: Some(option.scores.r),
                i: Some(option.scores.i),
                a: Some(option.scores.a),
                s: Some(option.scores.s),
                e: Some(option.scores.e),
                c: Some(option.scores.c),
            });
        }
    }

    rows
}
