pub mod cli;
pub mod commands;
pub mod error;
pub mod integrity;
pub mod interactive;
pub mod logging;
