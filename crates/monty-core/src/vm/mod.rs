pub mod stack;
pub mod vm;

pub use stack::Stack;
pub use vm::Interpreter;
