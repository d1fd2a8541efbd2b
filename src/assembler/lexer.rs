//! This scanner reduces a Hack assembly source to its meaningful lines.
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};

// Meaningful lines keep the 1-based number of the line they appear on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SourceLine {
    pub text: String,
    pub line: usize,
}

/// Reads the source line stream, strips comments and whitespace, and
/// yields the surviving lines in order. Blank lines and full-line
/// comments produce nothing; a trailing comment is cut from its line.
///
/// Exhausting the input is the normal end condition, not an error;
/// only the underlying reader can fail here.
pub fn scan<T: Read + ?Sized>(reader: Box<T>) -> std::io::Result<VecDeque<SourceLine>> {
    let mut lines: VecDeque<SourceLine> = VecDeque::with_capacity(256);

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let text = clean_line(&line?);
        if !text.is_empty() {
            lines.push_back(SourceLine { text, line: index + 1 });
        }
    }

    Ok(lines)
}

/// Cuts a `//` comment and removes every whitespace character.
/// Whitespace is insignificant anywhere in a Hack instruction, so
/// `D = D + A` and `D=D+A` scan identically.
fn clean_line(line: &str) -> String {
    let code = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line(""), "");
        assert_eq!(clean_line("   \t  "), "");
        assert_eq!(clean_line("// full line comment"), "");
        assert_eq!(clean_line("@21"), "@21");
        assert_eq!(clean_line("  @21  // trailing comment"), "@21");
        assert_eq!(clean_line("D = D + A"), "D=D+A");
        assert_eq!(clean_line("\tAM=M-1;JNE\r"), "AM=M-1;JNE");
        assert_eq!(clean_line("( LOOP )"), "(LOOP)");
    }

    #[test]
    fn test_scan_skips_blanks_and_comments() {
        let asm_input = "
// Adds 2 and 3, stores the result in RAM[0].
@2
D=A

@3
D=D+A   // D holds 5 now
@0
M=D
"
        .to_string();

        let v: VecDeque<SourceLine> = VecDeque::from(vec![
            SourceLine { text: "@2".to_owned(), line: 3 },
            SourceLine { text: "D=A".to_owned(), line: 4 },
            SourceLine { text: "@3".to_owned(), line: 6 },
            SourceLine { text: "D=D+A".to_owned(), line: 7 },
            SourceLine { text: "@0".to_owned(), line: 8 },
            SourceLine { text: "M=D".to_owned(), line: 9 },
        ]);

        assert_eq!(scan(Box::new(asm_input.as_str().as_bytes())).unwrap(), v);
    }

    #[test]
    fn test_scan_empty_input_is_exhaustion_not_error() {
        let scanned = scan(Box::new("".as_bytes())).unwrap();
        assert!(scanned.is_empty());

        let scanned = scan(Box::new("// only a comment\n\n".as_bytes())).unwrap();
        assert!(scanned.is_empty());
    }
}
