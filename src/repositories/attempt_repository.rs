use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Attempt,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Persists the attempt, failing with `AlreadyAttempted` if one already
    /// exists for this (user, quiz). The write itself is the duplicate guard:
    /// two racing submissions cannot both land.
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn has_attempt(&self, user_id: &str, quiz_id: &str) -> AppResult<bool>;
    async fn list_quiz_ids_for_user(&self, user_id: &str) -> AppResult<Vec<String>>;
    /// Every attempt across all users, most recent first.
    async fn list_all(&self) -> AppResult<Vec<Attempt>>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        // The unique compound index makes the insert a create-if-absent,
        // which is what turns the check-then-write into an exactly-once
        // guarantee under racing submissions.
        let user_quiz_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_quiz_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_quiz_index).await?;

        log::info!("Created indexes for attempts collection");
        Ok(())
    }
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        match self.collection.insert_one(&attempt).await {
            Ok(_) => Ok(attempt),
            Err(err) if is_duplicate_key_error(&err) => Err(AppError::AlreadyAttempted(format!(
                "Quiz '{}' was already completed",
                attempt.quiz_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn has_attempt(&self, user_id: &str, quiz_id: &str) -> AppResult<bool> {
        let attempt = self
            .collection
            .find_one(doc! { "user_id": user_id, "quiz_id": quiz_id })
            .await?;
        Ok(attempt.is_some())
    }

    async fn list_quiz_ids_for_user(&self, user_id: &str) -> AppResult<Vec<String>> {
        let attempts: Vec<Attempt> = self
            .collection
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(attempts.into_iter().map(|a| a.quiz_id).collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Attempt>> {
        let attempts = self
            .collection
            .find(doc! {})
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }
}
