//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use prereqs::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.dependency("zlib");
//! ui.phase("downloading...");
//!
//! assert_eq!(ui.dependencies(), &["zlib".to_string()]);
//! assert_eq!(ui.phases(), &["downloading...".to_string()]);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    dependencies: Vec<String>,
    phases: Vec<String>,
    commands: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Dependency names announced, in order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Phase lines, in order.
    pub fn phases(&self) -> &[String] {
        &self.phases
    }

    /// Echoed build commands, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn dependency(&mut self, name: &str) {
        self.dependencies.push(name.to_string());
    }

    fn phase(&mut self, phase: &str) {
        self.phases.push(phase.to_string());
    }

    fn command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}
