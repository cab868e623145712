pub mod content_type;
pub mod rate_limiting;
pub mod validation;

pub use content_type::require_json;
pub use rate_limiting::{rate_limit_middleware, RateLimitConfig, RateLimiter, RateLimiters};
pub use validation::sanitize_and_validate;
