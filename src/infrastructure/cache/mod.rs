//! In-memory cache implementation using moka

pub mod in_memory;

pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
