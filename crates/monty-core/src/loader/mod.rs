pub mod script;

pub use script::{LineSource, ScriptReader};
