use crate::riasec::tools::model::{AnswerOption, Question, Scores};

/// Likert labels shared by every question, in presentation order. Option ids
/// derive from the question id with the suffixes `_a` through `_e`.
const LIKERT_SCALE: [&str; 5] = [
    "Strongly Agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly Disagree",
];

const PSYCHOMETRIC: &str = "psychometric";
const APTITUDE: &str = "aptitude";
const INTEREST: &str = "interest";

/// Builds the built-in question bank: five questions per dimension, each with
/// the five Likert options carrying hand-assigned score vectors in canonical
/// R/I/A/S/E/C order.
pub fn question_bank() -> Vec<Question> {
    vec![
        // Realistic: hands-on, practical work.
        likert(
            "r1",
            "I enjoy working with tools and machines",
            PSYCHOMETRIC,
            [
                Scores::new(5, 0, 0, 0, 0, 1),
                Scores::new(3, 0, 0, 0, 0, 1),
                Scores::new(1, 0, 0, 0, 0, 0),
                Scores::new(0, 0, 0, 0, 0, 0),
                Scores::new(0, 0, 0, 1, 0, 0),
            ],
        ),
        likert(
            "r2",
            "I prefer working outdoors rather than in an office",
            PSYCHOMETRIC,
            [
                Scores::new(4, 0, 1, 0, 0, 0),
                Scores::new(3, 0, 1, 0, 0, 0),
                Scores::new(1, 0, 0, 0, 0, 0),
                Scores::new(0, 1, 0, 0, 1, 2),
                Scores::new(0, 2, 0, 0, 2, 3),
            ],
        ),
        likert(
            "r3",
            "I like building or fixing things with my hands",
            PSYCHOMETRIC,
            [
                Scores::new(5, 1, 1, 0, 0, 0),
                Scores::new(4, 1, 1, 0, 0, 0),
                Scores::new(2, 0, 0, 0, 0, 0),
                Scores::new(0, 0, 0, 1, 1, 1),
                Scores::new(0, 0, 0, 2, 2, 2),
            ],
        ),
        likert(
            "r4",
            "I enjoy physical activities and sports",
            PSYCHOMETRIC,
            [
                Scores::new(3, 0, 0, 2, 1, 0),
                Scores::new(2, 0, 0, 1, 1, 0),
                Scores::new(1, 0, 0, 0, 0, 0),
                Scores::new(0, 1, 1, 0, 0, 1),
                Scores::new(0, 2, 1, 0, 0, 2),
            ],
        ),
        likert(
            "r5",
            "I prefer practical solutions over theoretical ones",
            PSYCHOMETRIC,
            [
                Scores::new(4, 0, 0, 0, 2, 1),
                Scores::new(3, 0, 0, 0, 1, 1),
                Scores::new(1, 1, 0, 0, 0, 0),
                Scores::new(0, 3, 1, 0, 0, 0),
                Scores::new(0, 4, 2, 0, 0, 0),
            ],
        ),
        // Investigative: research, analysis, problem solving.
        likert(
            "i1",
            "I enjoy solving complex puzzles and problems",
            APTITUDE,
            [
                Scores::new(0, 5, 1, 0, 0, 1),
                Scores::new(0, 4, 1, 0, 0, 1),
                Scores::new(0, 2, 0, 0, 0, 0),
                Scores::new(1, 0, 0, 1, 1, 0),
                Scores::new(2, 0, 0, 1, 2, 0),
            ],
        ),
        likert(
            "i2",
            "I like to understand how and why things work",
            APTITUDE,
            [
                Scores::new(1, 5, 0, 0, 0, 0),
                Scores::new(1, 4, 0, 0, 0, 0),
                Scores::new(0, 2, 0, 0, 0, 0),
                Scores::new(0, 0, 1, 1, 1, 0),
                Scores::new(0, 0, 1, 2, 2, 1),
            ],
        ),
        likert(
            "i3",
            "I enjoy conducting experiments and analysing the results",
            APTITUDE,
            [
                Scores::new(1, 5, 0, 0, 0, 1),
                Scores::new(0, 4, 0, 0, 0, 1),
                Scores::new(0, 2, 0, 0, 0, 0),
                Scores::new(0, 0, 1, 1, 0, 0),
                Scores::new(1, 0, 2, 2, 0, 0),
            ],
        ),
        likert(
            "i4",
            "I like working with data and statistics",
            APTITUDE,
            [
                Scores::new(0, 4, 0, 0, 0, 2),
                Scores::new(0, 3, 0, 0, 0, 2),
                Scores::new(0, 1, 0, 0, 0, 1),
                Scores::new(1, 0, 1, 1, 0, 0),
                Scores::new(1, 0, 2, 2, 1, 0),
            ],
        ),
        likert(
            "i5",
            "I enjoy reading about scientific discoveries",
            APTITUDE,
            [
                Scores::new(0, 5, 1, 0, 0, 0),
                Scores::new(0, 3, 1, 0, 0, 0),
                Scores::new(0, 1, 0, 0, 0, 0),
                Scores::new(1, 0, 0, 1, 1, 0),
                Scores::new(2, 0, 0, 1, 2, 0),
            ],
        ),
        // Artistic: creative and expressive work.
        likert(
            "a1",
            "I enjoy drawing, painting, or other visual arts",
            INTEREST,
            [
                Scores::new(0, 0, 5, 0, 0, 0),
                Scores::new(0, 0, 4, 0, 0, 0),
                Scores::new(0, 0, 2, 0, 0, 0),
                Scores::new(1, 0, 0, 0, 1, 1),
                Scores::new(2, 0, 0, 0, 1, 2),
            ],
        ),
        likert(
            "a2",
            "I like writing stories, poems, or articles",
            INTEREST,
            [
                Scores::new(0, 1, 5, 1, 0, 0),
                Scores::new(0, 1, 3, 0, 0, 0),
                Scores::new(0, 0, 1, 0, 0, 0),
                Scores::new(1, 0, 0, 0, 1, 1),
                Scores::new(1, 0, 0, 0, 2, 2),
            ],
        ),
        likert(
            "a3",
            "I enjoy playing a musical instrument or singing",
            INTEREST,
            [
                Scores::new(0, 0, 5, 1, 0, 0),
                Scores::new(0, 0, 4, 1, 0, 0),
                Scores::new(0, 0, 2, 0, 0, 0),
                Scores::new(1, 1, 0, 0, 0, 1),
                Scores::new(2, 1, 0, 0, 0, 1),
            ],
        ),
        likert(
            "a4",
            "I prefer unconventional ideas over established routines",
            INTEREST,
            [
                Scores::new(0, 1, 4, 0, 1, 0),
                Scores::new(0, 1, 3, 0, 1, 0),
                Scores::new(0, 0, 1, 0, 0, 0),
                Scores::new(1, 0, 0, 0, 0, 3),
                Scores::new(1, 0, 0, 0, 0, 4),
            ],
        ),
        likert(
            "a5",
            "I enjoy designing or decorating spaces",
            INTEREST,
            [
                Scores::new(1, 0, 4, 0, 1, 0),
                Scores::new(1, 0, 3, 0, 1, 0),
                Scores::new(0, 0, 1, 0, 0, 0),
                Scores::new(0, 1, 0, 0, 0, 2),
                Scores::new(0, 1, 0, 1, 0, 2),
            ],
        ),
        // Social: helping, teaching, caring for others.
        likert(
            "s1",
            "I enjoy helping people solve their problems",
            PSYCHOMETRIC,
            [
                Scores::new(0, 0, 0, 5, 1, 0),
                Scores::new(0, 0, 0, 4, 1, 0),
                Scores::new(0, 0, 0, 2, 0, 0),
                Scores::new(1, 1, 0, 0, 0, 1),
                Scores::new(2, 1, 0, 0, 0, 1),
            ],
        ),
        likert(
            "s2",
            "I like teaching or explaining things to others",
            PSYCHOMETRIC,
            [
                Scores::new(0, 1, 0, 5, 1, 0),
                Scores::new(0, 1, 0, 3, 1, 0),
                Scores::new(0, 0, 0, 1, 0, 0),
                Scores::new(1, 0, 1, 0, 0, 1),
                Scores::new(2, 0, 1, 0, 0, 2),
            ],
        ),
        likert(
            "s3",
            "I enjoy volunteering for community causes",
            PSYCHOMETRIC,
            [
                Scores::new(0, 0, 1, 5, 0, 0),
                Scores::new(0, 0, 1, 3, 0, 0),
                Scores::new(0, 0, 0, 1, 0, 0),
                Scores::new(1, 1, 0, 0, 1, 0),
                Scores::new(1, 2, 0, 0, 1, 1),
            ],
        ),
        likert(
            "s4",
            "People often come to me for advice and support",
            PSYCHOMETRIC,
            [
                Scores::new(0, 0, 0, 4, 2, 0),
                Scores::new(0, 0, 0, 3, 1, 0),
                Scores::new(0, 0, 0, 1, 0, 0),
                Scores::new(1, 1, 1, 0, 0, 0),
                Scores::new(2, 1, 1, 0, 0, 1),
            ],
        ),
        likert(
            "s5",
            "I work best as part of a team",
            PSYCHOMETRIC,
            [
                Scores::new(0, 0, 0, 4, 1, 1),
                Scores::new(0, 0, 0, 3, 1, 1),
                Scores::new(0, 0, 0, 1, 0, 0),
                Scores::new(1, 2, 1, 0, 0, 0),
                Scores::new(1, 3, 2, 0, 0, 0),
            ],
        ),
        // Enterprising: leading, persuading, managing.
        likert(
            "e1",
            "I enjoy leading groups and taking charge of projects",
            INTEREST,
            [
                Scores::new(0, 0, 0, 1, 5, 0),
                Scores::new(0, 0, 0, 1, 3, 0),
                Scores::new(0, 0, 0, 0, 1, 0),
                Scores::new(1, 1, 1, 0, 0, 1),
                Scores::new(1, 2, 1, 0, 0, 2),
            ],
        ),
        likert(
            "e2",
            "I am good at persuading people to see my point of view",
            INTEREST,
            [
                Scores::new(0, 0, 1, 1, 5, 0),
                Scores::new(0, 0, 1, 0, 3, 0),
                Scores::new(0, 0, 0, 0, 1, 0),
                Scores::new(1, 1, 0, 0, 0, 1),
                Scores::new(1, 2, 0, 1, 0, 1),
            ],
        ),
        likert(
            "e3",
            "I would like to start my own business one day",
            INTEREST,
            [
                Scores::new(1, 0, 1, 0, 5, 0),
                Scores::new(1, 0, 1, 0, 4, 0),
                Scores::new(0, 0, 0, 0, 2, 0),
                Scores::new(0, 1, 0, 1, 0, 2),
                Scores::new(0, 1, 0, 1, 0, 3),
            ],
        ),
        likert(
            "e4",
            "I enjoy making decisions that affect other people",
            INTEREST,
            [
                Scores::new(0, 0, 0, 1, 4, 1),
                Scores::new(0, 0, 0, 1, 3, 1),
                Scores::new(0, 0, 0, 0, 1, 0),
                Scores::new(1, 1, 1, 0, 0, 0),
                Scores::new(1, 2, 1, 1, 0, 0),
            ],
        ),
        likert(
            "e5",
            "I am comfortable speaking in front of an audience",
            INTEREST,
            [
                Scores::new(0, 0, 1, 2, 4, 0),
                Scores::new(0, 0, 1, 1, 3, 0),
                Scores::new(0, 0, 0, 0, 1, 0),
                Scores::new(1, 1, 0, 0, 0, 1),
                Scores::new(2, 1, 0, 0, 0, 2),
            ],
        ),
        // Conventional: organizing, detail-oriented, systematic.
        likert(
            "c1",
            "I enjoy organizing files, records, or collections",
            APTITUDE,
            [
                Scores::new(0, 0, 0, 0, 0, 5),
                Scores::new(0, 0, 0, 0, 0, 3),
                Scores::new(0, 0, 0, 0, 0, 1),
                Scores::new(1, 0, 2, 1, 0, 0),
                Scores::new(1, 0, 3, 1, 1, 0),
            ],
        ),
        likert(
            "c2",
            "I prefer following clear procedures over improvising",
            APTITUDE,
            [
                Scores::new(1, 0, 0, 0, 0, 5),
                Scores::new(1, 0, 0, 0, 0, 3),
                Scores::new(0, 0, 0, 0, 0, 1),
                Scores::new(0, 1, 2, 0, 1, 0),
                Scores::new(0, 1, 3, 0, 2, 0),
            ],
        ),
        likert(
            "c3",
            "I am good at keeping track of budgets and numbers",
            APTITUDE,
            [
                Scores::new(0, 1, 0, 0, 1, 5),
                Scores::new(0, 1, 0, 0, 1, 3),
                Scores::new(0, 0, 0, 0, 0, 1),
                Scores::new(1, 0, 1, 1, 0, 0),
                Scores::new(1, 0, 2, 2, 0, 0),
            ],
        ),
        likert(
            "c4",
            "I like working with detailed schedules and plans",
            APTITUDE,
            [
                Scores::new(0, 0, 0, 0, 1, 4),
                Scores::new(0, 0, 0, 0, 1, 3),
                Scores::new(0, 0, 0, 0, 0, 1),
                Scores::new(1, 0, 2, 0, 0, 0),
                Scores::new(2, 0, 2, 0, 1, 0),
            ],
        ),
        likert(
            "c5",
            "I double-check my work for errors before finishing",
            APTITUDE,
            [
                Scores::new(0, 1, 0, 0, 0, 4),
                Scores::new(0, 1, 0, 0, 0, 3),
                Scores::new(0, 0, 0, 0, 0, 1),
                Scores::new(1, 0, 1, 0, 1, 0),
                Scores::new(1, 0, 2, 0, 2, 0),
            ],
        ),
    ]
}

fn likert(id: &str, text: &str, category: &str, scores: [Scores; 5]) -> Question {
    let options = LIKERT_SCALE
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(index, (label, scores))| AnswerOption {
            id: format!("{id}_{}", (b'a' + index as u8) as char),
            text: (*label).to_string(),
            scores,
        })
        .collect();

    Question {
        id: id.to_string(),
        text: text.to_string(),
        category: category.to_string(),
        options,
    }
}
