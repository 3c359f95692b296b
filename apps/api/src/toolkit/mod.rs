//! Toolkit Composer: turns a profession and hobby into a complete toolkit.

pub mod enhance;
pub mod generator;
pub mod handlers;
pub mod labels;
pub mod models;
pub mod prompts;
