// Renders opcode tables as array literals for the emulator sources, e.g.
//
//   ubyte cycleCountTable[256] = [
//        // 0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
//        7, 6, -1, ...                                      // 0
//        ...
//        ...                                           ]; // F

use crate::{ErrorKind, OpcodeTable, OpcodeTables, Result, SENTINEL};
use log::warn;

const ROW_INDENT: &str = "     ";
const PLAIN_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    // 7
    Decimal,
    // 0x07
    Hex,
}

impl Radix {
    fn entry(self, v: i32) -> String {
        match self {
            Radix::Decimal => format!("{}", v),
            Radix::Hex if v == SENTINEL => format!("{:>5}", v),
            Radix::Hex => format!(" 0x{:02x}", v),
        }
    }

    fn column_label(self, column: usize) -> String {
        match self {
            Radix::Decimal => format!(" {:X} ", column),
            Radix::Hex => format!("  {:X}    ", column),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    // 16 entries per row, no header and no row comments.
    Plain,
    // Column header plus a row comment, `width` entries per row.
    Annotated { width: usize },
}

fn render_plain(out: &mut String, table: &OpcodeTable, radix: Radix) {
    for (index, &v) in table.entries().iter().enumerate() {
        if index & 0x0f == 0 {
            out.push_str(PLAIN_INDENT);
        }
        out.push_str(&radix.entry(v));
        if index == 0xff {
            out.push_str(" ];\n");
        } else if index & 0x0f == 0x0f {
            out.push_str(",\n");
        } else {
            out.push_str(", ");
        }
    }
}

fn render_annotated(out: &mut String, table: &OpcodeTable, width: usize, radix: Radix) {
    for row in 0..16 / width {
        out.push_str(ROW_INDENT);
        out.push_str("//");
        for column in row * width..(row + 1) * width {
            out.push_str(&radix.column_label(column));
        }
        out.push('\n');
    }

    let mask = width - 1;
    out.push_str(ROW_INDENT);
    for (index, &v) in table.entries().iter().enumerate() {
        out.push_str(&radix.entry(v));
        if index == 0xff {
            out.push_str(" ]; // F \n");
        } else if index & mask == mask {
            // rows are labelled by the high nibble, two rows share a label at width 8
            out.push_str(&format!(", // {:X}\n{}", index >> 4, ROW_INDENT));
        } else {
            out.push_str(", ");
        }
    }
}

// Renders `<ty> <name>[256] = [ ... ];` followed by an empty line.
pub fn render_table(
    ty: &str,
    name: &str,
    table: &OpcodeTable,
    layout: Layout,
    radix: Radix,
) -> Result<String> {
    let mut out = format!("{} {}[256] = [\n", ty, name);
    match layout {
        Layout::Plain => render_plain(&mut out, table, radix),
        Layout::Annotated { width } => {
            if width != 8 && width != 16 {
                bail!(ErrorKind::InvalidWidth(width));
            }
            render_annotated(&mut out, table, width, radix)
        }
    }
    out.push('\n');
    Ok(out)
}

fn check_byte_range(name: &str, table: &OpcodeTable) {
    for (index, &v) in table.entries().iter().enumerate() {
        if v > 0xff {
            warn!("{}[0x{:02X}] = {} does not fit in a ubyte", name, index, v);
        }
    }
}

pub fn render_basic(tables: &OpcodeTables) -> Result<String> {
    render_table(
        "uint",
        "cycleCountTable",
        &tables.cycles,
        Layout::Plain,
        Radix::Decimal,
    )
}

pub fn render_extended(tables: &OpcodeTables, mode_width: usize) -> Result<String> {
    check_byte_range("cycleCountTable", &tables.cycles);
    let mut out = render_table(
        "ubyte",
        "cycleCountTable",
        &tables.cycles,
        Layout::Annotated { width: 16 },
        Radix::Decimal,
    )?;
    out.push_str(&render_table(
        "ubyte",
        "addressModeTable",
        &tables.modes,
        Layout::Annotated { width: mode_width },
        Radix::Hex,
    )?);
    Ok(out)
}
