pub mod attempt_repository;
pub mod progress_repository;
pub mod quiz_repository;

pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};

#[cfg(test)]
pub use attempt_repository::MockAttemptRepository;
#[cfg(test)]
pub use progress_repository::MockProgressRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
