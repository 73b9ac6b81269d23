use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Attempt, KidProgress, Quiz},
        dto::response::AttemptResult,
    },
    repositories::{AttemptRepository, ProgressRepository, QuizRepository},
    services::evaluator::evaluate,
};

/// Orchestrates the exactly-once quiz run: listing, the duplicate guards,
/// evaluation, the durable attempt write and the points award.
pub struct AttemptWorkflowService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn AttemptRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl AttemptWorkflowService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn AttemptRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            quizzes,
            attempts,
            progress,
        }
    }

    /// Published quizzes this user has not attempted yet, newest first, plus
    /// how many were filtered out as already completed. Read-only.
    pub async fn list_available(&self, user_id: &str) -> AppResult<(Vec<Quiz>, usize)> {
        let published = self.quizzes.list_published().await?;
        let attempted: HashSet<String> = self
            .attempts
            .list_quiz_ids_for_user(user_id)
            .await?
            .into_iter()
            .collect();

        let mut available = Vec::new();
        let mut completed_count = 0;
        for quiz in published {
            if attempted.contains(&quiz.id) {
                completed_count += 1;
            } else {
                available.push(quiz);
            }
        }

        Ok((available, completed_count))
    }

    /// First duplicate guard plus quiz load. Returns the quiz and the start
    /// timestamp the client must hand back on submission. A blocked start
    /// means another session already completed this quiz; the caller should
    /// refresh its listing.
    pub async fn start(&self, user_id: &str, quiz_id: &str) -> AppResult<(Quiz, DateTime<Utc>)> {
        if self.attempts.has_attempt(user_id, quiz_id).await? {
            return Err(AppError::AlreadyAttempted(format!(
                "Quiz '{}' was already completed",
                quiz_id
            )));
        }

        let quiz = self.load_quiz(quiz_id).await?;
        Ok((quiz, Utc::now()))
    }

    /// The commit point. Re-checks the duplicate guard, evaluates, enforces
    /// the answer-all-questions gate, then persists the attempt record before
    /// awarding points. The attempt write is the durable source of truth for
    /// "already done"; if the points award fails afterwards the attempt
    /// stands and the error is surfaced, not rolled back.
    pub async fn submit(
        &self,
        user_id: &str,
        quiz_id: &str,
        answers: &[Option<usize>],
        started_at: DateTime<Utc>,
    ) -> AppResult<AttemptResult> {
        if self.attempts.has_attempt(user_id, quiz_id).await? {
            return Err(AppError::AlreadyAttempted(format!(
                "Quiz '{}' was already completed, no points awarded",
                quiz_id
            )));
        }

        let quiz = self.load_quiz(quiz_id).await?;
        let evaluation = evaluate(&quiz, answers);

        if evaluation.answered_count < quiz.question_count as usize {
            return Err(AppError::IncompleteAnswers {
                answered: evaluation.answered_count,
                total: quiz.question_count as usize,
            });
        }

        let duration_sec = (Utc::now() - started_at).num_seconds().max(0);
        let correct_count = evaluation.correct_count as u32;
        // The request validator bounds points_per_question, but a stored quiz
        // predating that bound must not panic the workflow.
        let gained_points = correct_count
            .checked_mul(quiz.points_per_question)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Gained points overflow for quiz '{}' ({} correct * {} points)",
                    quiz_id, correct_count, quiz.points_per_question
                ))
            })?;

        let attempt = Attempt::new(
            user_id,
            &quiz,
            correct_count,
            gained_points,
            duration_sec,
            evaluation.wrong,
        );
        let attempt = self.attempts.create(attempt).await?;

        if let Err(err) = self.progress.award_points(user_id, gained_points as i64).await {
            log::error!(
                "Points award failed for user '{}' after attempt for '{}' was recorded: {}",
                user_id,
                quiz_id,
                err
            );
            return Err(err);
        }

        Ok(AttemptResult {
            correct_count,
            question_count: quiz.question_count,
            gained_points,
            duration_sec,
            wrong: attempt.wrong,
        })
    }

    /// Kid dashboard read; creates the empty progress record on first access.
    pub async fn dashboard(&self, user_id: &str) -> AppResult<KidProgress> {
        self.progress.ensure_exists(user_id).await
    }

    /// Admin view over every attempt, most recent first.
    pub async fn attempt_history(&self) -> AppResult<Vec<Attempt>> {
        self.attempts.list_all().await
    }

    async fn load_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))
    }
}
