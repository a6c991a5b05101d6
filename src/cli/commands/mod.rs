//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
