//! Cache abstractions for the load layer

pub mod key;
pub mod repository;

pub use key::CacheKey;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
