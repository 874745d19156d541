pub mod artifacts;
pub mod commands;
pub mod openapi;
pub mod pipeline;
pub mod utils;
