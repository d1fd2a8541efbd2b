//! The Assembler module is in charge of taking a
//! Hack assembly file and producing its binary machine code,
//! one 16-bit word per instruction.
//!
//! It does this with a line scanner and classifier feeding a
//! two-pass driver: pass one binds symbols, pass two encodes.

pub mod assemble;
pub mod ast;
pub mod code;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symbols;
