//! Shell command execution and platform naming.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{os_name, os_name_for};
