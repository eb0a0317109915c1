//! Interpreter Stack Implementation
//!
//! Integer stack acted on by every opcode.
//! No execution semantics; depth checks belong to the dispatcher.

use crate::error::{MontyError, MontyResult};

/// Interpreter stack. The top is the last element of `values`.
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<i32>,
    max_size: Option<usize>,
}

impl Stack {
    /// Create an empty stack with an optional depth limit
    pub fn new(max_size: Option<usize>) -> Self {
        Stack {
            values: Vec::new(),
            max_size,
        }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: i32) -> MontyResult<()> {
        if let Some(max) = self.max_size {
            if self.values.len() >= max {
                return Err(MontyError::OutOfMemory);
            }
        }
        self.values
            .try_reserve(1)
            .map_err(|_| MontyError::OutOfMemory)?;
        self.values.push(value);
        Ok(())
    }

    /// Pop value from stack
    pub fn pop(&mut self) -> Option<i32> {
        self.values.pop()
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> Option<i32> {
        self.values.last().copied()
    }

    /// Mutable access to the top value
    pub fn top_mut(&mut self) -> Option<&mut i32> {
        self.values.last_mut()
    }

    /// Exchange the values of the two topmost elements.
    ///
    /// Returns `false` and leaves the stack untouched if fewer than two
    /// elements are present.
    pub fn swap_top(&mut self) -> bool {
        let len = self.values.len();
        if len < 2 {
            return false;
        }
        self.values.swap(len - 1, len - 2);
        true
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().rev().copied()
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Clear stack
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
