pub mod cli;
pub mod codec;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod report;
pub mod sanitize;
