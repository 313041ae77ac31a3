use riasec_tools::ToolError;
use riasec_tools::model::{CREATED_DATE, Dimension, MODEL_VERSION, QuizModel};
use riasec_tools::sync;
use std::fs;
use tempfile::tempdir;

#[test]
fn build_model_produces_the_expected_document_shape() {
    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("questions.csv");
    let model_path = temp_dir.path().join("model.json");

    sync::export_questions(&table_path).expect("questions exported");
    sync::build_model(&table_path, &model_path).expect("model built");

    let written = fs::read_to_string(&model_path).expect("model document read");
    let document: serde_json::Value = serde_json::from_str(&written).expect("JSON parsed");

    let root = document.as_object().expect("top-level object");
    let mut keys: Vec<&str> = root.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["model_info", "questions", "riasec_careers"]);

    let careers = document["riasec_careers"]
        .as_object()
        .expect("career map object");
    assert_eq!(careers.len(), 6);
    assert_eq!(careers["R"]["name"], "Realistic");
    assert_eq!(
        careers["C"]["description"],
        "Organizing, detail-oriented, systematic"
    );
    assert_eq!(
        careers["I"]["careers"].as_array().expect("career list").len(),
        10
    );

    // Parsed JSON objects come back with sorted keys, so compare as sets.
    let mut dimension_keys: Vec<String> =
        Dimension::ALL.iter().map(|d| format!("{d:?}")).collect();
    dimension_keys.sort_unstable();

    for question in document["questions"].as_array().expect("question array") {
        for option in question["options"].as_array().expect("option array") {
            let scores = option["scores"].as_object().expect("scores object");
            let score_keys: Vec<&str> = scores.keys().map(String::as_str).collect();
            assert_eq!(score_keys, dimension_keys.as_slice());
        }
    }
}

#[test]
fn model_info_counts_questions_and_categories() {
    let table = "\
questionId,questionText,category,optionId,optionText,R,I,A,S,E,C
q1,First question,psychometric,q1_a,Strongly Agree,5,0,0,0,0,1
q1,First question,psychometric,q1_b,Agree,3,0,0,0,0,1
q1,First question,psychometric,q1_c,Neutral,1,0,0,0,0,0
q1,First question,psychometric,q1_d,Disagree,0,0,0,0,0,0
q1,First question,psychometric,q1_e,Strongly Disagree,0,0,0,1,0,0
q2,Second question,aptitude,q2_a,Yes,0,4,0,0,0,0
q2,Second question,aptitude,q2_b,No,0,0,0,2,0,0
";

    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("questions.csv");
    let model_path = temp_dir.path().join("model.json");
    fs::write(&table_path, table).expect("table written");

    sync::build_model(&table_path, &model_path).expect("model built");

    let written = fs::read_to_string(&model_path).expect("model document read");
    let model: QuizModel = serde_json::from_str(&written).expect("document parsed");

    assert_eq!(model.model_info.total_questions, 2);
    assert_eq!(model.model_info.total_questions, model.questions.len());
    assert_eq!(model.model_info.version, MODEL_VERSION);
    assert_eq!(model.model_info.created_date, CREATED_DATE);

    let categories: Vec<&str> = model
        .model_info
        .categories
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(categories, ["aptitude", "psychometric"]);

    assert_eq!(model.questions[0].options.len(), 5);
    assert_eq!(model.questions[1].options.len(), 2);
}

#[test]
fn non_ascii_text_is_preserved_literally() {
    let table = "\
questionId,questionText,category,optionId,optionText,R,I,A,S,E,C
q1,J'aime résoudre des problèmes,psychometric,q1_a,Tout à fait d'accord,0,5,0,0,0,0
";

    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("questions.csv");
    let model_path = temp_dir.path().join("model.json");
    fs::write(&table_path, table).expect("table written");

    sync::build_model(&table_path, &model_path).expect("model built");

    let written = fs::read_to_string(&model_path).expect("model document read");
    assert!(written.contains("J'aime résoudre des problèmes"));
    assert!(written.contains("Tout à fait d'accord"));
    assert!(!written.contains("\\u00e9"));
}

#[test]
fn missing_table_reports_error_and_leaves_output_untouched() {
    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("absent.csv");
    let model_path = temp_dir.path().join("model.json");

    let error = sync::build_model(&table_path, &model_path).expect_err("missing table rejected");
    assert!(matches!(error, ToolError::MissingInput(_)));
    assert!(!model_path.exists());

    // A pre-existing document must not be overwritten either.
    fs::write(&model_path, "sentinel").expect("sentinel written");
    let error = sync::build_model(&table_path, &model_path).expect_err("missing table rejected");
    assert!(matches!(error, ToolError::MissingInput(_)));
    let preserved = fs::read_to_string(&model_path).expect("sentinel read");
    assert_eq!(preserved, "sentinel");
}

#[test]
fn malformed_table_fails_before_any_output_is_written() {
    let table = "\
questionId,questionText,category,optionId,optionText,R,I,A,S,E,C
q1,Question,psychometric,q1_a,Strongly Agree,not-a-number,0,0,0,0,0
";

    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("questions.csv");
    let model_path = temp_dir.path().join("model.json");
    fs::write(&table_path, table).expect("table written");

    let error = sync::build_model(&table_path, &model_path).expect_err("malformed table rejected");
    assert!(matches!(error, ToolError::Csv(_)));
    assert!(!model_path.exists());
}

#[test]
fn exported_table_carries_the_expected_header() {
    let temp_dir = tempdir().expect("temporary directory");
    let table_path = temp_dir.path().join("questions.csv");

    sync::export_questions(&table_path).expect("questions exported");

    let written = fs::read_to_string(&table_path).expect("table read");
    let header = written.lines().next().expect("header line");
    assert_eq!(
        header,
        "questionId,questionText,category,optionId,optionText,R,I,A,S,E,C"
    );
}
