use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
};

/// Admin authorization is a side table keyed by user id, outside the core's
/// trust boundary. Handlers query this once per admin request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminChecker: Send + Sync {
    async fn is_admin(&self, user_id: &str) -> AppResult<bool>;
}

pub async fn require_admin(checker: &dyn AdminChecker, user_id: &str) -> AppResult<()> {
    if !checker.is_admin(user_id).await? {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct AdminRecord {
    user_id: String,
}

pub struct MongoAdminChecker {
    collection: Collection<AdminRecord>,
}

impl MongoAdminChecker {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("admins");
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

        log::info!("Created indexes for admins collection");
        Ok(())
    }
}

#[async_trait]
impl AdminChecker for MongoAdminChecker {
    async fn is_admin(&self, user_id: &str) -> AppResult<bool> {
        let record = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        Ok(record.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_require_admin_passes_for_admin() {
        let mut checker = MockAdminChecker::new();
        checker.expect_is_admin().returning(|_| Ok(true));

        assert!(require_admin(&checker, "admin-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_require_admin_rejects_non_admin() {
        let mut checker = MockAdminChecker::new();
        checker.expect_is_admin().returning(|_| Ok(false));

        let result = require_admin(&checker, "kid-1").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
