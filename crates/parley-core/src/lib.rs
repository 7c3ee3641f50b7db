//! Core Parley library (config, logging, conversation store).

pub mod config;
pub mod conversations;
pub mod logging;
