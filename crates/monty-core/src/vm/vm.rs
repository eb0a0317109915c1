//! Interpreter Core
//!
//! Defines the Monty interpreter structure and the per-line dispatch loop.
//! The first failing instruction aborts the run; no line is ever skipped on error.

use std::io::Write;

use tracing::{debug, trace};

use crate::bytecode::instruction::Instruction;
use crate::bytecode::opcode::OpCode;
use crate::config::MontyConfig;
use crate::error::{InstructionError, MontyError, MontyResult};
use crate::loader::LineSource;

use super::stack::Stack;

/// Monty interpreter session.
///
/// Owns the stack for the lifetime of one script run and writes opcode
/// output to `out`.
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    stack: Stack,
    line_number: usize,
    out: W,
}

impl<W: Write> Interpreter<W> {
    /// Create a new interpreter session
    pub fn new(config: MontyConfig, out: W) -> Self {
        Interpreter {
            stack: Stack::new(config.max_stack_size),
            line_number: 0,
            out,
        }
    }

    /// Execute every line of `source` until end of input or the first error
    pub fn run<S: LineSource>(&mut self, source: &mut S) -> MontyResult<()> {
        while let Some(line) = source.next_line()? {
            self.execute_line(&line)?;
        }
        debug!(lines = self.line_number, depth = self.stack.len(), "script finished");
        Ok(())
    }

    /// Execute a single script line (tokenize, resolve, dispatch)
    pub fn execute_line(&mut self, line: &str) -> MontyResult<()> {
        self.line_number += 1;

        let instruction = match Instruction::parse(line) {
            Some(instruction) => instruction,
            None => {
                trace!(line = self.line_number, "skipped");
                return Ok(());
            }
        };

        let opcode = OpCode::from_name(instruction.opcode).ok_or_else(|| {
            self.fault(InstructionError::UnknownInstruction(
                instruction.opcode.to_string(),
            ))
        })?;

        trace!(line = self.line_number, opcode = opcode.name(), "dispatch");

        if self.stack.len() < opcode.min_depth() {
            if let Some(kind) = opcode.underflow_error() {
                return Err(self.fault(kind));
            }
        }

        self.step(opcode, &instruction)
    }

    /// Run one resolved opcode. Depth preconditions have been checked.
    fn step(&mut self, opcode: OpCode, instruction: &Instruction<'_>) -> MontyResult<()> {
        match opcode {
            OpCode::Nop => Ok(()),

            // Stack
            OpCode::Push => {
                let value = instruction
                    .integer_argument()
                    .ok_or_else(|| self.fault(InstructionError::PushUsage))?;
                self.stack.push(value)
            }
            OpCode::Pop => {
                self.stack.pop();
                Ok(())
            }
            OpCode::Swap => {
                self.stack.swap_top();
                Ok(())
            }

            // Output
            OpCode::Pall => {
                for value in self.stack.iter() {
                    writeln!(self.out, "{}", value)?;
                }
                Ok(())
            }
            OpCode::Pint => {
                if let Some(value) = self.stack.peek() {
                    writeln!(self.out, "{}", value)?;
                }
                Ok(())
            }

            // Arithmetic
            OpCode::Add => {
                if let Some(top) = self.stack.pop() {
                    if let Some(second) = self.stack.top_mut() {
                        *second = second.wrapping_add(top);
                    }
                }
                Ok(())
            }
        }
    }

    fn fault(&self, kind: InstructionError) -> MontyError {
        debug!(line = self.line_number, error = %kind, "instruction failed");
        MontyError::at_line(self.line_number, kind)
    }

    /// Current stack (read-only)
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Flush buffered opcode output
    pub fn flush(&mut self) -> MontyResult<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::loader::ScriptReader;

    fn interpreter() -> Interpreter<Vec<u8>> {
        Interpreter::new(MontyConfig::new(), Vec::new())
    }

    fn run(script: &str) -> (String, MontyResult<()>, Vec<i32>) {
        let mut vm = interpreter();
        let result = vm.run(&mut ScriptReader::new(Cursor::new(script)));
        let stack = vm.stack().iter().collect();
        (String::from_utf8(vm.into_output()).unwrap(), result, stack)
    }

    fn failing_kind(result: MontyResult<()>) -> (usize, InstructionError) {
        match result {
            Err(MontyError::Instruction { line, kind }) => (line, kind),
            other => panic!("expected instruction error, got {:?}", other),
        }
    }

    #[test]
    fn pall_prints_lifo() {
        let (out, result, _) = run("push 1\npush 2\npush 3\npall\n");
        result.expect("run failed");
        assert_eq!(out, "3\n2\n1\n");
    }

    #[test]
    fn pall_on_empty_stack_prints_nothing() {
        let (out, result, _) = run("pall\n");
        result.unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn pint_prints_top_only() {
        let (out, result, stack) = run("push 1\npush -8\npint\n");
        result.unwrap();
        assert_eq!(out, "-8\n");
        assert_eq!(stack, vec![-8, 1]);
    }

    #[test]
    fn swap_then_pall() {
        let (out, result, _) = run("push 1\npush 2\nswap\npall\n");
        result.unwrap();
        assert_eq!(out, "1\n2\n");
    }

    #[test]
    fn add_replaces_top_two_with_sum() {
        let (out, result, stack) = run("push 9\npush 3\npush 4\nadd\npall\n");
        result.unwrap();
        assert_eq!(out, "7\n9\n");
        assert_eq!(stack, vec![7, 9]);
    }

    #[test]
    fn add_wraps_on_overflow() {
        let (_, result, stack) = run("push 2147483647\npush 1\nadd\n");
        result.unwrap();
        assert_eq!(stack, vec![i32::MIN]);
    }

    #[test]
    fn pop_removes_top() {
        let (_, result, stack) = run("push 1\npush 2\npop\n");
        result.unwrap();
        assert_eq!(stack, vec![1]);
    }

    #[test]
    fn nop_never_touches_the_stack() {
        let (out, result, stack) = run("push 4\nnop\nnop\nnop\n");
        result.unwrap();
        assert_eq!(out, "");
        assert_eq!(stack, vec![4]);
    }

    #[test]
    fn underflow_errors_carry_the_line() {
        let cases = [
            ("pint\n", 1, InstructionError::PintEmpty),
            ("nop\npop\n", 2, InstructionError::PopEmpty),
            ("push 1\nswap\n", 2, InstructionError::SwapTooShort),
            ("\n# c\npush 1\nadd\n", 4, InstructionError::AddTooShort),
        ];
        for (script, line, kind) in cases {
            let (out, result, _) = run(script);
            assert_eq!(failing_kind(result), (line, kind), "script {:?}", script);
            assert_eq!(out, "");
        }
    }

    #[test]
    fn bad_push_argument_is_usage_error() {
        for script in ["push abc\n", "push\n", "push -\n", "push 1x\n"] {
            let (out, result, stack) = run(script);
            assert_eq!(failing_kind(result), (1, InstructionError::PushUsage));
            assert_eq!(out, "");
            assert!(stack.is_empty());
        }
    }

    #[test]
    fn unknown_opcode_halts_the_run() {
        let (out, result, stack) = run("push 1\nnop\nfoo\npall\npush 2\n");
        assert_eq!(
            failing_kind(result),
            (3, InstructionError::UnknownInstruction("foo".into()))
        );
        assert_eq!(out, "");
        assert_eq!(stack, vec![1]);
    }

    #[test]
    fn opcodes_are_case_sensitive() {
        let (_, result, _) = run("PUSH 1\n");
        assert_eq!(
            failing_kind(result),
            (1, InstructionError::UnknownInstruction("PUSH".into()))
        );
    }

    #[test]
    fn comments_and_blanks_advance_the_counter() {
        let mut vm = interpreter();
        vm.execute_line("# comment\n").unwrap();
        vm.execute_line("\n").unwrap();
        vm.execute_line("nop\n").unwrap();
        assert_eq!(vm.line_number(), 3);
        assert!(vm.stack().is_empty());
    }

    #[test]
    fn output_before_the_error_is_kept() {
        let (out, result, _) = run("push 5\npall\npop\npop\n");
        assert_eq!(failing_kind(result), (4, InstructionError::PopEmpty));
        assert_eq!(out, "5\n");
    }

    #[test]
    fn stack_limit_surfaces_as_out_of_memory() {
        let mut vm = Interpreter::new(MontyConfig::new().with_max_stack_size(2), Vec::new());
        let result = vm.run(&mut ScriptReader::new(Cursor::new("push 1\npush 2\npush 3\n")));
        assert!(matches!(result, Err(MontyError::OutOfMemory)));
        assert_eq!(vm.stack().len(), 2);
        assert_eq!(vm.line_number(), 3);
    }
}
