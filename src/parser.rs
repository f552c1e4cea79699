// Line grammar of perfect6502's `measure` output:
//
//   $A9: bytes: 2 cycles: 2 ______ imm
//   $02: CRASH
//
// Everything between the cycle count and the final mode word is ignored.

use crate::{AddressMode, ErrorKind, Result, ResultExt};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::str::Chars;

// The log's value for BRK ($00) is not usable, BRK always takes 7 cycles.
pub const BRK_CYCLES: u16 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Measured {
        opcode: u8,
        cycles: u16,
        mode: Option<String>,
    },
    Crashed {
        opcode: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeRecord {
    pub opcode: u8,
    // None for a crashed opcode
    pub cycles: Option<u16>,
    pub mode: Option<AddressMode>,
}

impl OpcodeRecord {
    pub fn from_line(line: &Line) -> Option<Self> {
        let record = match line {
            Line::Blank => return None,
            Line::Measured {
                opcode,
                cycles,
                mode,
            } => {
                let mode = mode.as_deref().map(|m| {
                    let resolved = AddressMode::from_mnemonic(m);
                    if resolved == AddressMode::Unknown {
                        warn!("${:02X}: unknown address mode '{}'", opcode, m);
                    }
                    resolved
                });
                OpcodeRecord {
                    opcode: *opcode,
                    cycles: Some(*cycles),
                    mode,
                }
            }
            Line::Crashed { opcode } => OpcodeRecord {
                opcode: *opcode,
                cycles: None,
                mode: None,
            },
        };

        if record.opcode == 0x00 {
            return Some(OpcodeRecord {
                cycles: Some(BRK_CYCLES),
                ..record
            });
        }
        Some(record)
    }

    pub fn crashed(&self) -> bool {
        self.cycles.is_none()
    }
}

struct Cursor<'a> {
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }

    fn rest(&self) -> &'a str {
        self.chars.as_str()
    }

    fn is_eof(&self) -> bool {
        self.rest().is_empty()
    }

    fn consume(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest().trim_start();
        self.chars = rest.chars();
    }

    // Consumes `s` if the input starts with it.
    fn eat(&mut self, s: &str) -> bool {
        match self.rest().strip_prefix(s) {
            Some(rest) => {
                self.chars = rest.chars();
                true
            }
            None => false,
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| !f(c)).unwrap_or_else(|| rest.len());
        self.chars = rest[end..].chars();
        &rest[..end]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn opcode(cur: &mut Cursor) -> Option<u8> {
    if !cur.eat("$") {
        return None;
    }
    let hi = cur.consume()?.to_digit(16)?;
    let lo = cur.consume()?.to_digit(16)?;
    if !cur.eat(":") {
        return None;
    }
    Some((hi << 4 | lo) as u8)
}

fn measured(cur: &mut Cursor) -> Option<(u16, Option<String>)> {
    if !cur.eat("bytes:") {
        return None;
    }
    cur.skip_whitespace();
    // instruction length, one character, not used
    cur.consume()?;
    cur.skip_whitespace();
    if !cur.eat("cycles:") {
        return None;
    }
    cur.skip_whitespace();
    // a count that does not fit in u16 makes the line malformed
    let cycles = cur.take_while(|c| c.is_ascii_digit()).parse::<u16>().ok()?;

    let trailing = cur.rest();
    if !trailing.is_empty() && !trailing.starts_with(char::is_whitespace) {
        return None;
    }
    let mode = trailing
        .split_whitespace()
        .last()
        .filter(|word| word.chars().all(is_word_char))
        .map(str::to_owned);
    Some((cycles, mode))
}

/// Matches one log line against the measured and crash shapes.
///
/// Surrounding whitespace is ignored, an empty line is `Line::Blank`.
/// The error carries no line number; `parse_log` fills it in.
pub fn parse_line(text: &str) -> Result<Line> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Line::Blank);
    }

    let malformed = || ErrorKind::MalformedLine(0, text.to_owned());
    let mut cur = Cursor::new(text);
    let opcode = opcode(&mut cur).ok_or_else(malformed)?;
    cur.skip_whitespace();

    if cur.eat("CRASH") {
        if !cur.is_eof() {
            bail!(malformed());
        }
        return Ok(Line::Crashed { opcode });
    }

    let (cycles, mode) = measured(&mut cur).ok_or_else(malformed)?;
    Ok(Line::Measured {
        opcode,
        cycles,
        mode,
    })
}

// Parses a whole log. Stops at the first line that matches neither shape.
pub fn parse_log(log: &str) -> Result<Vec<OpcodeRecord>> {
    let mut records = vec![];
    for (i, text) in log.lines().enumerate() {
        let line = match parse_line(text) {
            Ok(line) => line,
            Err(_) => bail!(ErrorKind::MalformedLine(i + 1, text.trim().to_owned())),
        };
        if line != Line::Blank {
            debug!("{}", text.trim());
        }
        records.extend(OpcodeRecord::from_line(&line));
    }
    Ok(records)
}

pub fn read_log(path: &Path) -> Result<Vec<OpcodeRecord>> {
    let log = fs::read_to_string(path)
        .chain_err(|| format!("failed to read {}", path.display()))?;
    parse_log(&log)
}
