//! Pure translation tables from mnemonic text to binary field codes.
//!
//! This is the only module that knows the Hack instruction-set encoding;
//! parsing and orchestration never touch bit patterns. A compute word is
//! `111` + the 7-bit comp code + the 3-bit dest mask + the 3-bit jump
//! code; an address word is a zero bit followed by a 15-bit value.

use super::error::{AsmError, AsmResult};

/// Width of the address field in an A-instruction.
pub const ADDRESS_BITS: u32 = 15;

/// Largest value the address field can hold.
pub const MAX_ADDRESS: u32 = (1 << ADDRESS_BITS) - 1;

/// Translates a computation mnemonic to its 7-bit `a cccccc` code.
/// The vocabulary is closed; anything else is an unknown mnemonic.
pub fn comp(mnemonic: &str, line: usize) -> AsmResult<u16> {
    let code = match mnemonic {
        "0"   => 0b0101010,
        "1"   => 0b0111111,
        "-1"  => 0b0111010,
        "D"   => 0b0001100,
        "A"   => 0b0110000,
        "!D"  => 0b0001101,
        "!A"  => 0b0110001,
        "-D"  => 0b0001111,
        "-A"  => 0b0110011,
        "D+1" => 0b0011111,
        "A+1" => 0b0110111,
        "D-1" => 0b0001110,
        "A-1" => 0b0110010,
        "D+A" => 0b0000010,
        "D-A" => 0b0010011,
        "A-D" => 0b0000111,
        "D&A" => 0b0000000,
        "D|A" => 0b0010101,
        "M"   => 0b1110000,
        "!M"  => 0b1110001,
        "-M"  => 0b1110011,
        "M+1" => 0b1110111,
        "M-1" => 0b1110010,
        "D+M" => 0b1000010,
        "D-M" => 0b1010011,
        "M-D" => 0b1000111,
        "D&M" => 0b1000000,
        "D|M" => 0b1010101,
        _ => {
            return Err(AsmError::UnknownMnemonic {
                line,
                mnemonic: mnemonic.to_owned(),
            })
        }
    };
    Ok(code)
}

/// Translates the destination field to its 3-bit mask, one bit per
/// storage target present: A sets bit 2, D bit 1, M bit 0. No
/// destination yields all zeros. The parser only admits the letters
/// A, D, M here, so there is no failure case.
pub fn dest(field: Option<&str>) -> u16 {
    let mut mask = 0;
    if let Some(targets) = field {
        for target in targets.chars() {
            match target {
                'A' => mask |= 0b100,
                'D' => mask |= 0b010,
                'M' => mask |= 0b001,
                _ => unreachable!("parser admitted destination letter {:?}", target),
            }
        }
    }
    mask
}

/// Translates a jump mnemonic to its 3-bit condition code, or all
/// zeros when the instruction has no jump field.
pub fn jump(field: Option<&str>, line: usize) -> AsmResult<u16> {
    let mnemonic = match field {
        Some(m) => m,
        None => return Ok(0b000),
    };
    let code = match mnemonic {
        "JGT" => 0b001,
        "JEQ" => 0b010,
        "JGE" => 0b011,
        "JLT" => 0b100,
        "JNE" => 0b101,
        "JLE" => 0b110,
        "JMP" => 0b111,
        _ => {
            return Err(AsmError::UnknownMnemonic {
                line,
                mnemonic: mnemonic.to_owned(),
            })
        }
    };
    Ok(code)
}

/// Narrows a non-negative value to the 15-bit address field.
pub fn to_binary(value: u32, line: usize) -> AsmResult<u16> {
    if value > MAX_ADDRESS {
        return Err(AsmError::ValueOutOfRange {
            line,
            value: value.to_string(),
        });
    }
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comp_register_and_memory_rows() {
        // The memory row of the table is the register row with the a-bit set.
        assert_eq!(comp("A", 0).unwrap(), 0b0110000);
        assert_eq!(comp("M", 0).unwrap(), 0b1110000);
        assert_eq!(comp("D+A", 0).unwrap(), 0b0000010);
        assert_eq!(comp("D+M", 0).unwrap(), 0b1000010);
        assert_eq!(comp("D&A", 0).unwrap(), 0b0000000);
        assert_eq!(comp("D|M", 0).unwrap(), 0b1010101);
        assert_eq!(comp("0", 0).unwrap(), 0b0101010);
    }

    #[test]
    fn test_comp_unknown_mnemonic() {
        for bad in &["A+D", "M+D", "D+D", "2", "ADD", ""] {
            match comp(bad, 3) {
                Err(AsmError::UnknownMnemonic { line, mnemonic }) => {
                    assert_eq!(line, 3);
                    assert_eq!(&mnemonic, bad);
                }
                other => panic!("expected UnknownMnemonic for `{}`, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_dest_masks() {
        assert_eq!(dest(None), 0b000);
        assert_eq!(dest(Some("M")), 0b001);
        assert_eq!(dest(Some("D")), 0b010);
        assert_eq!(dest(Some("A")), 0b100);
        assert_eq!(dest(Some("MD")), 0b011);
        assert_eq!(dest(Some("AM")), 0b101);
        assert_eq!(dest(Some("AD")), 0b110);
        assert_eq!(dest(Some("AMD")), 0b111);
        // Letter order in the mnemonic does not change the mask.
        assert_eq!(dest(Some("DM")), dest(Some("MD")));
    }

    #[test]
    fn test_jump_codes() {
        assert_eq!(jump(None, 0).unwrap(), 0b000);
        assert_eq!(jump(Some("JGT"), 0).unwrap(), 0b001);
        assert_eq!(jump(Some("JEQ"), 0).unwrap(), 0b010);
        assert_eq!(jump(Some("JGE"), 0).unwrap(), 0b011);
        assert_eq!(jump(Some("JLT"), 0).unwrap(), 0b100);
        assert_eq!(jump(Some("JNE"), 0).unwrap(), 0b101);
        assert_eq!(jump(Some("JLE"), 0).unwrap(), 0b110);
        assert_eq!(jump(Some("JMP"), 0).unwrap(), 0b111);
        assert!(jump(Some("JXX"), 0).is_err());
    }

    #[test]
    fn test_to_binary_boundary() {
        assert_eq!(to_binary(0, 0).unwrap(), 0);
        assert_eq!(to_binary(21, 0).unwrap(), 21);
        assert_eq!(to_binary(MAX_ADDRESS, 0).unwrap(), 0x7FFF);
        match to_binary(MAX_ADDRESS + 1, 9) {
            Err(AsmError::ValueOutOfRange { line, value }) => {
                assert_eq!(line, 9);
                assert_eq!(value, "32768");
            }
            other => panic!("expected ValueOutOfRange, got {:?}", other),
        }
    }
}
