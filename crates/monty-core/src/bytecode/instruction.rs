//! Script Instruction Representation
//!
//! Tokenizes one script line into an opcode name and an optional raw argument.
//! This layer contains no execution semantics.

/// Delimiters that end the opcode token
const OPCODE_DELIMITERS: &[char] = &[' ', '\t', '$', '\n'];

/// Delimiters that end the argument token. Tab is not one of them.
const ARGUMENT_DELIMITERS: &[char] = &[' ', '$', '\n'];

/// One tokenized line, borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub opcode: &'a str,
    pub argument: Option<&'a str>,
}

impl<'a> Instruction<'a> {
    /// Tokenize a line.
    ///
    /// Returns `None` for blank lines and for lines whose first token
    /// starts with `#`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = strip_terminator(line);
        let (opcode, rest) = next_token(line, OPCODE_DELIMITERS)?;
        if opcode.starts_with('#') {
            return None;
        }
        let argument = next_token(rest, ARGUMENT_DELIMITERS).map(|(token, _)| token);
        Some(Instruction { opcode, argument })
    }

    /// Argument as an integer literal: an optional leading `-` followed by
    /// one or more ASCII digits, within `i32` range.
    pub fn integer_argument(&self) -> Option<i32> {
        let raw = self.argument?;
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok()
    }
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Split off the next token, skipping leading delimiters. The single
/// delimiter that ends the token is consumed.
fn next_token<'a>(text: &'a str, delimiters: &[char]) -> Option<(&'a str, &'a str)> {
    let start = text.trim_start_matches(delimiters);
    if start.is_empty() {
        return None;
    }
    match start.find(delimiters) {
        // all delimiters are single-byte ASCII
        Some(end) => Some((&start[..end], &start[end + 1..])),
        None => Some((start, "")),
    }
}
