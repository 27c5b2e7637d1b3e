// Shared modules for the shasta client crates
pub mod config;
pub mod shared;
pub mod utils;
