//! Core types for runbook
//!
//! This crate provides the directive library, the solution memory store,
//! and the configuration and logging plumbing shared by the runbook
//! command-line tools.

pub mod config;
pub mod directives;
pub mod error;
pub mod logging;
pub mod memory;
pub mod utils;

pub use error::{Error, Result};
