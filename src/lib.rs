pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod runtime;
pub mod seed;
pub mod venv;
pub mod version;
