pub mod admin;
pub mod claims;
pub mod jwt;
pub mod middleware;

pub use admin::{require_admin, AdminChecker, MongoAdminChecker};
pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
