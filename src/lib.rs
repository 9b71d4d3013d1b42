pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod quotes;
pub mod utils;
