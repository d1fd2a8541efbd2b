//! The Parser module takes the scanned line stream from the lexer and
//! classifies every line into one of the three instruction shapes,
//! producing the program AST.
use std::collections::VecDeque;
use regex::Regex;
use super::ast::Instruction;
use super::error::{AsmError, AsmResult};
use super::lexer::SourceLine;

pub struct Parser {
    lines: VecDeque<SourceLine>,
    program: Vec<Instruction>,
    address: Regex,
    compute: Regex,
    label: Regex,
}

impl Parser {
    pub fn new(lines: VecDeque<SourceLine>) -> Self {
        let capacity = lines.len();
        Parser {
            lines,
            program: Vec::with_capacity(capacity),
            // A literal is all digits; a symbol starts with a non-digit.
            // The address shape admits both, and code generation decides
            // which one it got.
            address: Regex::new(r"^@(\d+|[A-Za-z_.$:][A-Za-z0-9_.$:]*)$").unwrap(),
            compute: Regex::new(r"^(?:([ADM]{1,3})=)?([01ADM!+\-&|]+)(?:;([A-Z]{3}))?$")
                .unwrap(),
            label: Regex::new(r"^\(([A-Za-z_.$:][A-Za-z0-9_.$:]*)\)$").unwrap(),
        }
    }

    /// Run the parser, consuming itself and returning the classified
    /// program in source order. The first malformed line aborts the parse.
    pub fn run(mut self) -> AsmResult<Vec<Instruction>> {
        while let Some(ins) = self.instruction()? {
            self.program.push(ins);
        }
        Ok(self.program)
    }

    /// Consumes one scanned line and classifies it.
    /// Returns `Ok(None)` once the input is exhausted.
    fn instruction(&mut self) -> AsmResult<Option<Instruction>> {
        match self.consume() {
            Some(src) => self.classify(src).map(Some),
            None => Ok(None),
        }
    }

    fn classify(&self, src: SourceLine) -> AsmResult<Instruction> {
        let SourceLine { text, line } = src;

        if let Some(caps) = self.address.captures(&text) {
            return Ok(Instruction::Address {
                symbol: caps[1].to_owned(),
                line,
            });
        }

        if let Some(caps) = self.label.captures(&text) {
            return Ok(Instruction::Label {
                name: caps[1].to_owned(),
                line,
            });
        }

        if let Some(caps) = self.compute.captures(&text) {
            return Ok(Instruction::Compute {
                dest: caps.get(1).map(|m| m.as_str().to_owned()),
                comp: caps[2].to_owned(),
                jump: caps.get(3).map(|m| m.as_str().to_owned()),
                line,
            });
        }

        Err(AsmError::MalformedInstruction { line, text })
    }

    /// Pops a line off the input stream and returns it.
    /// Returns None if no lines are left.
    #[inline]
    fn consume(&mut self) -> Option<SourceLine> {
        self.lines.pop_front()
    }
}
