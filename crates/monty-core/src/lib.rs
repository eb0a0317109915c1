//! Monty Interpreter - Core Library
//!
//! Public API surface for the Monty core.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod vm;
pub mod loader;

// Re-export commonly used types
pub use error::{InstructionError, MontyError, MontyResult};
pub use config::MontyConfig;
pub use bytecode::opcode::OpCode;
pub use vm::vm::Interpreter;
pub use loader::{LineSource, ScriptReader};
