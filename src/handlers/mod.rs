pub mod admin_handler;
pub mod health_handler;
pub mod quiz_handler;
