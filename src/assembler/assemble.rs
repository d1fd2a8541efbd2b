//! The Assembler drives the two passes over a parsed program and owns
//! the symbol table and the output artifact for the whole run.
//!
//! The source is parsed once into an in-memory program; pass one walks
//! it to bind labels (and pre-allocates variable addresses), pass two
//! walks it again to resolve every address reference and emit one
//! 16-bit word per instruction, in program order. On failure the caller
//! is expected to invoke `delete` so no partial artifact survives.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ast::Instruction;
use super::code;
use super::error::{AsmError, AsmResult};
use super::lexer;
use super::parser::Parser;
use super::symbols::{SymbolTable, VARIABLE_BASE};

pub struct Assembler {
    program: Vec<Instruction>,
    table: SymbolTable,
    out: Option<BufWriter<Box<dyn Write>>>,
    out_path: PathBuf,
}

impl std::fmt::Debug for Assembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler")
            .field("program", &self.program)
            .field("table", &self.table)
            .field("out_path", &self.out_path)
            .finish_non_exhaustive()
    }
}

impl Assembler {
    /// Reads and parses the whole source, then creates the output
    /// artifact. A scan or parse failure aborts before the artifact
    /// is created.
    pub fn open(input: &Path, output: &Path) -> AsmResult<Self> {
        let ifile = File::open(input)?;
        let program = Parser::new(lexer::scan(Box::new(ifile))?).run()?;
        debug!("parsed {} instructions from `{}`", program.len(), input.display());

        let ofile: Box<dyn Write> = Box::new(File::create(output)?);
        Ok(Assembler {
            program,
            table: SymbolTable::new(),
            out: Some(BufWriter::new(ofile)),
            out_path: output.to_path_buf(),
        })
    }

    /// Pass one: binds every label to the count of real instructions
    /// preceding it, then pre-allocates data addresses for symbolic
    /// references that are neither predefined nor labels, in
    /// first-occurrence order starting at the variable base.
    pub fn fill_symbol_table(&mut self) -> AsmResult<&SymbolTable> {
        let mut rom_address: u16 = 0;
        for ins in &self.program {
            match ins {
                Instruction::Label { name, .. } => {
                    self.table.add_entry(name, rom_address)?;
                }
                _ => rom_address += 1,
            }
        }

        let mut ram_address = VARIABLE_BASE;
        for ins in &self.program {
            if let Instruction::Address { symbol, .. } = ins {
                if !is_literal(symbol) && !self.table.contains(symbol) {
                    self.table.add_entry(symbol, ram_address)?;
                    ram_address += 1;
                }
            }
        }

        Ok(&self.table)
    }

    /// Pass two: resolves every address reference, assembles each
    /// instruction into its 16-bit word, and appends the words to the
    /// output artifact, one per line. The words are also returned so
    /// callers can print a listing.
    pub fn generate_machine_code(&mut self) -> AsmResult<Vec<u16>> {
        let mut words = Vec::with_capacity(self.program.len());

        for ins in &self.program {
            let word = match ins {
                Instruction::Label { .. } => continue,
                Instruction::Address { symbol, line } => {
                    let value = if is_literal(symbol) {
                        match symbol.parse::<u32>() {
                            Ok(v) => v,
                            // A digit string too wide for u32 cannot fit
                            // the address field either; report the
                            // literal itself rather than a clamped value.
                            Err(_) => {
                                return Err(AsmError::ValueOutOfRange {
                                    line: *line,
                                    value: symbol.clone(),
                                })
                            }
                        }
                    } else {
                        u32::from(self.table.get_address(symbol)?)
                    };
                    code::to_binary(value, *line)?
                }
                Instruction::Compute { dest, comp, jump, line } => {
                    0b111 << 13
                        | code::comp(comp, *line)? << 6
                        | code::dest(dest.as_deref()) << 3
                        | code::jump(jump.as_deref(), *line)?
                }
            };

            if let Some(out) = self.out.as_mut() {
                writeln!(out, "{:016b}", word)?;
            }
            words.push(word);
        }

        Ok(words)
    }

    /// The real (word-emitting) instructions of the program, in order.
    pub fn code(&self) -> impl Iterator<Item = &Instruction> {
        self.program.iter().filter(|ins| ins.is_code())
    }

    /// Flushes and closes the output artifact. A finalization failure
    /// removes the truncated artifact before the error is reported, so
    /// a close error never leaves corrupt output on disk.
    pub fn close(mut self) -> AsmResult<()> {
        if let Some(mut out) = self.out.take() {
            if let Err(err) = out.flush() {
                drop(out);
                discard(&self.out_path);
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Drops the writer and removes the partially written artifact.
    /// Called after any failure so no corrupt output survives the run.
    pub fn delete(mut self) {
        self.out.take();
        discard(&self.out_path);
    }
}

/// Removes the output artifact, logging rather than failing if the
/// file cannot be removed.
fn discard(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        warn!("could not remove `{}`: {}", path.display(), err);
    }
}

/// An address reference is a literal iff it starts with a digit; the
/// parser guarantees such a reference is all digits.
fn is_literal(symbol: &str) -> bool {
    symbol.as_bytes().first().map_or(false, |b| b.is_ascii_digit())
}
