#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod render;
pub mod workflows;
