pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod service;
pub mod source;
pub mod telemetry;
