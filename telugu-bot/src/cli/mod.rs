pub mod app;
pub mod commands;
pub mod typing;

pub use app::{Cli, Commands};
