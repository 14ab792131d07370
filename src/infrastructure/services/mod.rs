//! Application services

pub mod list_loader;

pub use list_loader::ListLoader;
