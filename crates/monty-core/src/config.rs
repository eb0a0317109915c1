//! Monty Configuration
//!
//! Defines runtime limits for the interpreter.
//! Configuration specifies constraints only; enforcement is handled by the stack.

/// Interpreter configuration
#[derive(Debug, Clone, Default)]
pub struct MontyConfig {
    /// Maximum stack depth (`None` = bounded only by available memory)
    pub max_stack_size: Option<usize>,
}

impl MontyConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the stack at `max` elements
    pub fn with_max_stack_size(mut self, max: usize) -> Self {
        self.max_stack_size = Some(max);
        self
    }
}
