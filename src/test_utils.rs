use crate::models::domain::{Question, Quiz};

pub mod fixtures {
    use super::*;

    /// Two questions: "What is 2+2?" (correct B) and "Capital of France?"
    /// (correct A). Matches `sample_quiz_text`.
    pub fn test_questions() -> Vec<Question> {
        vec![
            Question {
                text: "What is 2+2?".to_string(),
                choices: vec![
                    "3".to_string(),
                    "4".to_string(),
                    "5".to_string(),
                    "6".to_string(),
                ],
                answer_index: 1,
            },
            Question {
                text: "Capital of France?".to_string(),
                choices: vec![
                    "Paris".to_string(),
                    "London".to_string(),
                    "Madrid".to_string(),
                    "Berlin".to_string(),
                ],
                answer_index: 0,
            },
        ]
    }

    pub fn test_quiz(id: &str, title: &str, points_per_question: u32, published: bool) -> Quiz {
        Quiz::new(id, title, points_per_question, published, test_questions())
    }

    /// The authoring-format text for `test_questions`.
    pub fn sample_quiz_text() -> String {
        [
            "Q: What is 2+2?",
            "A) 3",
            "B) 4",
            "C) 5",
            "D) 6",
            "Correct: B",
            "",
            "Q: Capital of France?",
            "A) Paris",
            "B) London",
            "C) Madrid",
            "D) Berlin",
            "Correct: A",
        ]
        .join("\n")
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_match_sample_text() {
        use crate::services::quiz_text::parse_quiz_text;

        let parsed = parse_quiz_text(&sample_quiz_text()).expect("sample text should parse");
        assert_eq!(parsed, test_questions());
    }
}
