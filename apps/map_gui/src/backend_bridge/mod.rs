//! Bridge between the UI command queue and the async submission workflow.

pub mod commands;
pub mod runtime;
