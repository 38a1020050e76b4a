pub mod add;
pub mod aggregate;
pub mod config;
pub mod import;
pub mod log;
pub mod range;
pub mod summary;
