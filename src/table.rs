use crate::{read_log, OpcodeRecord, Result};
use log::warn;
use std::path::Path;

// Value of a slot no log line has written to.
pub const SENTINEL: i32 = -1;

// One value per opcode, indexed by the raw opcode byte.
#[derive(Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: [i32; 256],
}

impl OpcodeTable {
    pub fn new() -> Self {
        Self {
            entries: [SENTINEL; 256],
        }
    }

    pub fn get(&self, opcode: u8) -> i32 {
        self.entries[opcode as usize]
    }

    pub fn set(&mut self, opcode: u8, v: i32) {
        self.entries[opcode as usize] = v
    }

    pub fn entries(&self) -> &[i32; 256] {
        &self.entries
    }

    // Opcodes the log never mentioned.
    pub fn missing(&self) -> Vec<u8> {
        (0..=0xffu8).filter(|&op| self.get(op) == SENTINEL).collect()
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeTables {
    pub cycles: OpcodeTable,
    pub modes: OpcodeTable,
}

impl OpcodeTables {
    // Later records overwrite earlier ones. A crashed opcode gets 0 in both
    // tables, an opcode missing from the log keeps the sentinel.
    pub fn from_records(records: &[OpcodeRecord]) -> Self {
        let mut tables = OpcodeTables::default();
        for record in records {
            let cycles = record.cycles.unwrap_or(0);
            let mode = record.mode.map_or(0, |m| m.code());
            tables.cycles.set(record.opcode, i32::from(cycles));
            tables.modes.set(record.opcode, i32::from(mode));
        }
        tables
    }

    // Reads and folds a whole log, warning about opcodes it never mentions.
    pub fn load(path: &Path) -> Result<Self> {
        let tables = Self::from_records(&read_log(path)?);
        let missing = tables.cycles.missing();
        if !missing.is_empty() {
            warn!(
                "{} opcodes missing from {}: {:02X?}",
                missing.len(),
                path.display(),
                missing
            );
        }
        Ok(tables)
    }
}
