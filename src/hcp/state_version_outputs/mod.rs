//! State version outputs module - read the outputs recorded in state versions

mod api;
mod commands;
mod models;

pub use api::StateVersionOutputs;
pub use commands::{run_current_command, run_get_command};
pub use models::{
    StateVersionOutput, StateVersionOutputAttributes, StateVersionOutputsList, RESOURCE_TYPE,
};
