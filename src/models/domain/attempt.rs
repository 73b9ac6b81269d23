use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Quiz;

/// The single durable record of one user's completed run through one quiz,
/// keyed by (user_id, quiz_id). Its existence is what blocks a repeat attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attempt {
    pub user_id: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub points_per_question: u32,
    pub question_count: u32,
    pub score: u32,
    pub gained_points: u32,
    pub duration_sec: i64,
    pub wrong: Vec<MissedQuestion>,
    #[serde(with = "super::timestamp::rfc3339_millis")]
    pub completed_at: DateTime<Utc>,
}

/// One incorrect or unanswered question within an attempt. `chosen` is absent
/// when the question was left unanswered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MissedQuestion {
    pub index: usize,
    pub question: String,
    pub correct: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen: Option<String>,
}

impl Attempt {
    pub fn new(
        user_id: &str,
        quiz: &Quiz,
        score: u32,
        gained_points: u32,
        duration_sec: i64,
        wrong: Vec<MissedQuestion>,
    ) -> Self {
        Attempt {
            user_id: user_id.to_string(),
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            points_per_question: quiz.points_per_question,
            question_count: quiz.question_count,
            score,
            gained_points,
            duration_sec,
            wrong,
            completed_at: Utc::now(),
        }
    }
}
