//! API layer - HTTP endpoints

pub mod auth;
pub mod health;
pub mod lists;
pub mod router;
pub mod screener;
pub mod state;
pub mod types;
pub mod worker;

pub use router::create_router_with_state;
pub use state::AppState;
