use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// A published or draft quiz. Never mutated after creation: there is no edit
/// or unpublish operation, and the id stays stable even when titles repeat.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub points_per_question: u32,
    pub published: bool,
    #[serde(with = "super::timestamp::rfc3339_millis")]
    pub created_at: DateTime<Utc>,
    pub question_count: u32,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: &str, title: &str, points_per_question: u32, published: bool, questions: Vec<Question>) -> Self {
        Quiz {
            id: id.to_string(),
            title: title.to_string(),
            points_per_question,
            published,
            created_at: Utc::now(),
            question_count: questions.len() as u32,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_questions;

    #[test]
    fn test_quiz_creation_counts_questions() {
        let quiz = Quiz::new("math-1", "Math", 10, true, test_questions());
        assert_eq!(quiz.question_count as usize, quiz.questions.len());
        assert!(quiz.published);
    }

    #[test]
    fn test_quiz_round_trip_serialization() {
        // created_at is persisted at millisecond precision; a second round
        // trip must be lossless.
        let quiz = Quiz::new("math-1", "Math", 10, false, test_questions());
        let json = serde_json::to_string(&quiz).expect("quiz should serialize");
        let parsed: Quiz = serde_json::from_str(&json).expect("quiz should deserialize");

        assert_eq!(parsed.created_at.timestamp_millis(), quiz.created_at.timestamp_millis());
        let reparsed: Quiz = serde_json::from_str(
            &serde_json::to_string(&parsed).expect("parsed quiz should serialize"),
        )
        .expect("quiz should deserialize again");
        assert_eq!(reparsed, parsed);
    }
}
