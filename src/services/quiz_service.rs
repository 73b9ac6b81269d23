use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{domain::Quiz, dto::request::CreateQuizRequest},
    repositories::QuizRepository,
    services::{quiz_text::parse_quiz_text, slug::generate_quiz_id},
};

/// Admin authoring: parse, validate, persist. Quizzes are immutable once
/// created, so this is the whole lifecycle.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { quizzes }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        // Any parse error fails the whole submission; nothing is persisted.
        let questions = parse_quiz_text(&request.questions_text)?;

        let title = request.title.trim();
        let quiz = Quiz::new(
            &generate_quiz_id(title),
            title,
            request.points_per_question,
            request.published,
            questions,
        );

        let quiz = self.quizzes.create(quiz).await?;
        log::info!(
            "Created quiz '{}' ({} questions, published: {})",
            quiz.id,
            quiz.question_count,
            quiz.published
        );
        Ok(quiz)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_all().await
    }
}
