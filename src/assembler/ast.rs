//! This AST describes a parsed Hack assembly file.
//!
//! Execution begins with the first instruction in the file.
//! Comments are prefixed with double slashes (//) and are single-line only.
//! Instructions are delimited by newlines; whitespace inside a line is
//! insignificant.
//!
//! Supported line shapes:
//!
//! ```asm
//! @21         // address instruction, literal: load 21 into A
//! @counter    // address instruction, symbolic: load counter's address into A
//! (LOOP)      // label declaration: binds LOOP to the next instruction slot
//! D=D+A       // compute instruction: dest=comp
//! D;JGT       // compute instruction: comp;jump
//! AM=M-1;JNE  // compute instruction: dest=comp;jump
//! ```
//!
//! Label declarations occupy no instruction slot and emit no machine word;
//! every address/compute instruction emits exactly one 16-bit word, in
//! source order.

use std::fmt;

/// A single meaningful source line, classified.
///
/// Each variant carries the 1-based source line it came from so that
/// later stages can report errors against the original file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    /// `@symbol` or `@literal`. The referenced text is kept verbatim;
    /// whether it is a literal or a symbol is decided during code
    /// generation.
    Address { symbol: String, line: usize },
    /// `[dest=]comp[;jump]`, fields kept as raw mnemonic text for the
    /// encoder to translate.
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
        line: usize,
    },
    /// `(name)`. Binds `name` to the address of the next real instruction.
    Label { name: String, line: usize },
}

impl Instruction {
    /// True for instructions that occupy a program-counter slot and emit
    /// a machine word; false for label declarations.
    pub fn is_code(&self) -> bool {
        !matches!(self, Instruction::Label { .. })
    }

    /// The 1-based source line this instruction was parsed from.
    pub fn line(&self) -> usize {
        match self {
            Instruction::Address { line, .. } => *line,
            Instruction::Compute { line, .. } => *line,
            Instruction::Label { line, .. } => *line,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::Address { symbol, .. } => write!(f, "@{}", symbol),
            Instruction::Compute { dest, comp, jump, .. } => {
                if let Some(d) = dest {
                    write!(f, "{}=", d)?;
                }
                write!(f, "{}", comp)?;
                if let Some(j) = jump {
                    write!(f, ";{}", j)?;
                }
                Ok(())
            }
            Instruction::Label { name, .. } => write!(f, "({})", name),
        }
    }
}
