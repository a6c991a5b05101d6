//! Prerequisite synchronization.
//!
//! - [`Synchronizer`] walks the manifest and decides what to run
//! - [`Executor`] is the seam to the outside world
//! - [`SyncReport`] records what happened

pub mod executor;
pub mod recorder;
pub mod report;
pub mod synchronizer;

pub use executor::{Executor, ShellExecutor};
pub use recorder::{RecordedCall, RecordingExecutor};
pub use report::{DependencyReport, Outcome, SyncReport};
pub use synchronizer::Synchronizer;
