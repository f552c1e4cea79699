use std::collections::HashMap;

// Addressing modes as reported in the last column of measure.log.
// The codes group modes by family in the high nibble:
// 0x1_ immediate, 0xa_ accumulator, 0xb_ zeropage, 0xc_ relative,
// 0xd_ absolute, 0xf_ indirect. 0x00 means no (or unknown) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    Immediate,
    Accumulator,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndexedIndirect,
    IndirectIndexedY,
    IndirectIndexedX,
    Unknown,
}

lazy_static! {
    static ref MNEMONICS: HashMap<&'static str, AddressMode> = vec![
        ("imm", AddressMode::Immediate),
        ("acc", AddressMode::Accumulator),
        ("zp", AddressMode::ZeroPage),
        ("zpx", AddressMode::ZeroPageX),
        ("zpy", AddressMode::ZeroPageY),
        ("rel", AddressMode::Relative),
        ("abs", AddressMode::Absolute),
        ("absx", AddressMode::AbsoluteX),
        ("absy", AddressMode::AbsoluteY),
        ("idx", AddressMode::IndexedIndirect),
        ("izy", AddressMode::IndirectIndexedY),
        ("izx", AddressMode::IndirectIndexedX),
    ]
    .into_iter()
    .collect();
}

impl AddressMode {
    // Resolves a mnemonic from the log. Anything not in the table is `Unknown`.
    pub fn from_mnemonic(s: &str) -> Self {
        match MNEMONICS.get(s) {
            Some(&mode) => mode,
            None => AddressMode::Unknown,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            AddressMode::Immediate => 0x10,
            AddressMode::Accumulator => 0xa0,
            AddressMode::ZeroPage => 0xb0,
            AddressMode::ZeroPageX => 0xb1,
            AddressMode::ZeroPageY => 0xb2,
            AddressMode::Relative => 0xc0,
            AddressMode::Absolute => 0xd0,
            AddressMode::AbsoluteX => 0xd1,
            AddressMode::AbsoluteY => 0xd2,
            AddressMode::IndexedIndirect => 0xf0,
            AddressMode::IndirectIndexedY => 0xf1,
            AddressMode::IndirectIndexedX => 0xf2,
            AddressMode::Unknown => 0x00,
        }
    }

    pub fn mnemonic(self) -> Option<&'static str> {
        MNEMONICS
            .iter()
            .find(|&(_, mode)| *mode == self)
            .map(|(name, _)| *name)
    }
}
