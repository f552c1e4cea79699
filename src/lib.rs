#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;

mod config;
mod mode;
mod parser;
mod render;
mod table;

pub use config::{Config, ExtendedConfig};
pub use mode::AddressMode;
pub use parser::{parse_line, parse_log, read_log, Line, OpcodeRecord, BRK_CYCLES};
pub use render::{render_basic, render_extended, render_table, Layout, Radix};
pub use table::{OpcodeTable, OpcodeTables, SENTINEL};

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        MalformedLine(line: usize, text: String) {
            description("malformed log line")
            display("line {}: malformed log line: '{}'", line, text)
        }
        InvalidWidth(width: usize) {
            description("invalid table width")
            display("invalid table width {}, expected 8 or 16", width)
        }
    }
}
