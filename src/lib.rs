pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod progress;
pub mod selector;
pub mod workbook;
