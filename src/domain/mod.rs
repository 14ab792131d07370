//! Domain layer - core types and business rules

pub mod auth;
pub mod cache;
pub mod error;
pub mod listing;
pub mod push;
pub mod region;
pub mod screener;

pub use auth::{AuthMethods, AuthProviderInfo, AuthSession, LoginForm};
pub use cache::{Cache, CacheExt, CacheKey};
pub use error::DomainError;
pub use listing::{FilterCode, ListRoute, ListedStock, parse_listings};
pub use push::PushNotification;
pub use region::{ApiEndpoint, EndpointResolver};
