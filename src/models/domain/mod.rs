pub mod attempt;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod timestamp;

pub use attempt::{Attempt, MissedQuestion};
pub use progress::KidProgress;
pub use question::Question;
pub use quiz::Quiz;
