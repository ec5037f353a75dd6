pub mod cli;
pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod speech;
pub mod tokens;
