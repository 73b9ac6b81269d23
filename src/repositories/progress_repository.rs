use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{progress::POINTS_PER_HOUR, KidProgress},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<KidProgress>>;
    /// Lazily creates the `{points: 0, hours: 0}` record on first access.
    async fn ensure_exists(&self, user_id: &str) -> AppResult<KidProgress>;
    /// Applies one award as a single atomic read-modify-write on the user's
    /// record. Concurrent awards to the same user must not lose points.
    async fn award_points(&self, user_id: &str, gained: i64) -> AppResult<KidProgress>;
}

pub struct MongoProgressRepository {
    collection: Collection<KidProgress>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("kids");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_index).await?;

        log::info!("Created indexes for kids collection");
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<KidProgress>> {
        let progress = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        Ok(progress)
    }

    async fn ensure_exists(&self, user_id: &str) -> AppResult<KidProgress> {
        if let Some(progress) = self.find_by_user(user_id).await? {
            return Ok(progress);
        }

        // $setOnInsert so a concurrently applied award is never clobbered.
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.collection
            .update_one(
                doc! { "user_id": user_id },
                doc! { "$setOnInsert": {
                    "points": 0_i64,
                    "hours": 0_i64,
                    "created_at": &now,
                    "updated_at": &now,
                } },
            )
            .upsert(true)
            .await?;

        self.find_by_user(user_id).await?.ok_or_else(|| {
            AppError::DatabaseError(format!("Progress record for '{}' vanished after upsert", user_id))
        })
    }

    async fn award_points(&self, user_id: &str, gained: i64) -> AppResult<KidProgress> {
        // Single aggregation-pipeline update: the whole carry computation is
        // applied atomically against the pre-update document, so concurrent
        // awards for the same user serialize without losing points. Must stay
        // in sync with KidProgress::apply_award.
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let total = doc! { "$add": [ { "$ifNull": ["$points", 0] }, gained ] };

        let update = vec![doc! { "$set": {
            "points": { "$mod": [ total.clone(), POINTS_PER_HOUR ] },
            "hours": { "$toLong": { "$add": [
                { "$ifNull": ["$hours", 0] },
                { "$floor": { "$divide": [ total, POINTS_PER_HOUR ] } },
            ] } },
            "created_at": { "$ifNull": ["$created_at", &now] },
            "updated_at": &now,
        } }];

        let progress = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("Upsert for '{}' returned no document", user_id))
            })?;

        Ok(progress)
    }
}
