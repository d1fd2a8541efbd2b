//! Error kinds raised by the assembler pipeline.
//!
//! Every kind is fatal to the run; nothing is retried. Components raise
//! the most specific kind and callers propagate with `?` until the driver
//! reports the failure and removes the partial output artifact.

use std::fmt;
use std::io;

pub type AsmResult<T> = Result<T, AsmError>;

#[derive(Debug)]
pub enum AsmError {
    /// A meaningful source line matched none of the three instruction shapes.
    MalformedInstruction { line: usize, text: String },
    /// A computation or jump mnemonic outside the fixed vocabulary.
    UnknownMnemonic { line: usize, mnemonic: String },
    /// An address reference that resolved to nothing in the symbol table.
    UnknownSymbol { symbol: String },
    /// A label declared under a name that is already bound.
    DuplicateSymbol { symbol: String },
    /// A literal address wider than the 15-bit address field. The value
    /// is kept as the source token so the diagnostic can show literals
    /// of any width.
    ValueOutOfRange { line: usize, value: String },
    Io(io::Error),
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AsmError::MalformedInstruction { line, text } => {
                write!(f, "malformed instruction on line {}: `{}`", line, text)
            }
            AsmError::UnknownMnemonic { line, mnemonic } => {
                write!(f, "unknown mnemonic `{}` on line {}", mnemonic, line)
            }
            AsmError::UnknownSymbol { symbol } => {
                write!(f, "unknown symbol `{}`", symbol)
            }
            AsmError::DuplicateSymbol { symbol } => {
                write!(f, "symbol `{}` is already bound", symbol)
            }
            AsmError::ValueOutOfRange { line, value } => {
                write!(
                    f,
                    "address value `{}` on line {} exceeds the 15-bit address field",
                    value, line
                )
            }
            AsmError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for AsmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AsmError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AsmError {
    fn from(err: io::Error) -> Self {
        AsmError::Io(err)
    }
}
