pub mod command;
pub mod handler;

pub use command::Command;
pub use handler::{command_for_key, handle_command, handle_input};
