//! Monty Error Types
//!
//! Defines every fatal condition produced by the Monty interpreter.
//! The `Display` output of each variant is the exact line written to stderr.

use std::io;

use thiserror::Error;

/// Per-instruction validation failures.
///
/// These carry no line number; `MontyError::Instruction` attaches it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("usage: push integer")]
    PushUsage,

    #[error("can't pint, stack empty")]
    PintEmpty,

    #[error("can't pop an empty stack")]
    PopEmpty,

    #[error("can't swap, stack too short")]
    SwapTooShort,

    #[error("can't add, stack too short")]
    AddTooShort,

    #[error("unknown instruction {0}")]
    UnknownInstruction(String),
}

/// Interpreter errors. All of them terminate the run.
#[derive(Debug, Error)]
pub enum MontyError {
    // CLI errors
    #[error("USAGE: monty file")]
    Usage,

    #[error("Error: Can't open file {path}")]
    FileOpen { path: String },

    // Execution errors
    #[error("L{line}: {kind}")]
    Instruction { line: usize, kind: InstructionError },

    // Resource errors
    #[error("Error: malloc failed")]
    OutOfMemory,

    // IO boundary
    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

impl MontyError {
    /// Attach a line number to an instruction failure
    pub fn at_line(line: usize, kind: InstructionError) -> Self {
        MontyError::Instruction { line, kind }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type MontyResult<T> = Result<T, MontyError>;
