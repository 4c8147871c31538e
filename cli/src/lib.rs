//! Dockyard CLI library — exposes modules for integration testing.

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod output;
