use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{KidProgress, MissedQuestion, Question, Quiz};

/// Quiz as shown to a kid taking it. Answer indexes are stripped.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub points_per_question: u32,
    pub question_count: u32,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub text: String,
    pub choices: Vec<String>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        QuizView {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            points_per_question: quiz.points_per_question,
            question_count: quiz.question_count,
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            text: question.text.clone(),
            choices: question.choices.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub points_per_question: u32,
    pub question_count: u32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        QuizSummary {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            points_per_question: quiz.points_per_question,
            question_count: quiz.question_count,
            published: quiz.published,
            created_at: quiz.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableQuizzesResponse {
    pub quizzes: Vec<QuizSummary>,
    pub completed_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartAttemptResponse {
    pub quiz: QuizView,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptResult {
    pub correct_count: u32,
    pub question_count: u32,
    pub gained_points: u32,
    pub duration_sec: i64,
    pub wrong: Vec<MissedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub points: i64,
    pub hours: i64,
}

impl From<&KidProgress> for ProgressView {
    fn from(progress: &KidProgress) -> Self {
        ProgressView {
            points: progress.points,
            hours: progress.hours,
        }
    }
}
