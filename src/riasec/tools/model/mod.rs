use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::riasec::tools::careers;

/// Format version stamped into every exported model document.
pub const MODEL_VERSION: &str = "1.0";

/// Fixed creation timestamp carried by the model metadata. The export is a
/// reproducible batch artefact, so the date is part of the format rather than
/// the wall clock.
pub const CREATED_DATE: &str = "2024-01-01T00:00:00";

/// The six RIASEC interest dimensions. Declaration order is the canonical
/// R/I/A/S/E/C order used everywhere a dimension sequence appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::R,
        Dimension::I,
        Dimension::A,
        Dimension::S,
        Dimension::E,
        Dimension::C,
    ];
}

/// Per-dimension score weights carried by a single answer option. Keeping one
/// field per dimension guarantees every serialized `scores` object has exactly
/// the six single-letter keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "R")]
    pub r: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl Scores {
    /// Creates a score vector from weights given in canonical R/I/A/S/E/C
    /// order.
    pub fn new(r: u32, i: u32, a: u32, s: u32, e: u32, c: u32) -> Self {
        Self { r, i, a, s, e, c }
    }

    /// Returns the weight assigned to the given dimension.
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::R => self.r,
            Dimension::I => self.i,
            Dimension::A => self.a,
            Dimension::S => self.s,
            Dimension::E => self.e,
            Dimension::C => self.c,
        }
    }
}

/// A single selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option identifier, unique within its question.
    pub id: String,
    /// Text shown to the quiz taker.
    pub text: String,
    /// Score weights the option contributes when chosen.
    pub scores: Scores,
}

/// A quiz question together with its ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier, unique across the store.
    pub id: String,
    /// Question text.
    pub text: String,
    /// Assessment category the question belongs to.
    pub category: String,
    /// Answer options in presentation order.
    pub options: Vec<AnswerOption>,
}

/// Descriptive entry of the career lookup table for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGroup {
    /// Human-readable dimension name, e.g. "Realistic".
    pub name: String,
    /// Short characterisation of the dimension.
    pub description: String,
    /// Representative career titles, in display order.
    pub careers: Vec<String>,
}

/// Metadata block attached to the exported model document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Document format version.
    pub version: String,
    /// Number of questions in the document.
    pub total_questions: usize,
    /// Distinct assessment categories across all questions.
    pub categories: BTreeSet<String>,
    /// Fixed creation timestamp, see [`CREATED_DATE`].
    pub created_date: String,
}

/// The complete exported quiz model: questions, the career lookup table, and
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizModel {
    pub questions: Vec<Question>,
    pub riasec_careers: BTreeMap<Dimension, CareerGroup>,
    pub model_info: ModelInfo,
}

impl QuizModel {
    /// Assembles the exportable document from reshaped questions, attaching
    /// the static career map and derived metadata.
    pub fn assemble(questions: Vec<Question>) -> Self {
        let categories = questions
            .iter()
            .map(|question| question.category.clone())
            .collect();

        let model_info = ModelInfo {
            version: MODEL_VERSION.to_string(),
            total_questions: questions.len(),
            categories,
            created_date: CREATED_DATE.to_string(),
        };

        Self {
            questions,
            riasec_careers: careers::career_map(),
            model_info,
        }
    }
}
