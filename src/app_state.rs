use std::sync::Arc;

use crate::{
    auth::{AdminChecker, MongoAdminChecker},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAttemptRepository, MongoProgressRepository, MongoQuizRepository},
    services::{attempt_workflow::AttemptWorkflowService, quiz_service::QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub attempt_workflow: Arc<AttemptWorkflowService>,
    pub admin_checker: Arc<dyn AdminChecker>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let progress_repository = Arc::new(MongoProgressRepository::new(&db));
        progress_repository.ensure_indexes().await?;

        let admin_checker = Arc::new(MongoAdminChecker::new(&db));
        admin_checker.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(quiz_repository.clone()));
        let attempt_workflow = Arc::new(AttemptWorkflowService::new(
            quiz_repository,
            attempt_repository,
            progress_repository,
        ));

        Ok(Self {
            quiz_service,
            attempt_workflow,
            admin_checker,
            db,
            config: Arc::new(config),
        })
    }
}
