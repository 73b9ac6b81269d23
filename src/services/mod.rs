pub mod attempt_workflow;
pub mod evaluator;
pub mod quiz_service;
pub mod quiz_text;
pub mod slug;
