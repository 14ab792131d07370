//! Background workers

pub mod notifications;
pub mod screener;

pub use notifications::{AssetCache, ServiceWorker, WorkerCommand};
pub use screener::{ScreenerRequest, spawn_screener_worker};
