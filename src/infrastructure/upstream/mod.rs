//! Clients for the upstream stock API

pub mod screener;
pub mod stocks;

pub use screener::{ScreenerClient, ScreenerFetch};
pub use stocks::StockListClient;
