//! Opcode Definitions
//!
//! Defines the Monty instruction set and the stack depth each opcode needs.
//! This file contains no execution semantics.

use crate::error::InstructionError;

/// Built-in opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    // Stack operations
    Push,
    Pop,
    Swap,

    // Output
    Pall,
    Pint,

    // Arithmetic
    Add,

    // System
    Nop,
}

impl OpCode {
    /// Resolve an opcode by its exact (case-sensitive) mnemonic
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "push" => Some(OpCode::Push),
            "pop" => Some(OpCode::Pop),
            "swap" => Some(OpCode::Swap),
            "pall" => Some(OpCode::Pall),
            "pint" => Some(OpCode::Pint),
            "add" => Some(OpCode::Add),
            "nop" => Some(OpCode::Nop),
            _ => None,
        }
    }

    /// Mnemonic as written in scripts
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Push => "push",
            OpCode::Pop => "pop",
            OpCode::Swap => "swap",
            OpCode::Pall => "pall",
            OpCode::Pint => "pint",
            OpCode::Add => "add",
            OpCode::Nop => "nop",
        }
    }

    /// Minimum stack depth required before the handler runs
    pub fn min_depth(self) -> usize {
        match self {
            OpCode::Pop | OpCode::Pint => 1,
            OpCode::Swap | OpCode::Add => 2,
            OpCode::Push | OpCode::Pall | OpCode::Nop => 0,
        }
    }

    /// Error reported when `min_depth` is not met
    pub fn underflow_error(self) -> Option<InstructionError> {
        match self {
            OpCode::Pop => Some(InstructionError::PopEmpty),
            OpCode::Pint => Some(InstructionError::PintEmpty),
            OpCode::Swap => Some(InstructionError::SwapTooShort),
            OpCode::Add => Some(InstructionError::AddTooShort),
            OpCode::Push | OpCode::Pall | OpCode::Nop => None,
        }
    }
}
