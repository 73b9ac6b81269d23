use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    #[validate(range(min = 1, max = 1000, message = "Points per question must be between 1 and 1000"))]
    pub points_per_question: u32,

    pub published: bool,

    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub questions_text: String,
}

/// Answers are positional: one entry per question in quiz order, `null` for
/// an unanswered question. `started_at` is the timestamp handed out by the
/// start endpoint; the authoritative duration is computed from it once, at
/// submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAttemptRequest {
    pub answers: Vec<Option<usize>>,
    pub started_at: DateTime<Utc>,
}
