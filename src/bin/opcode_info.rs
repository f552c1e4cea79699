// Prints the `ubyte` cycle count and address mode tables from a perfect6502
// measure.log.

#[macro_use]
extern crate error_chain;

use clap::Parser;
use opcode_tables::{render_extended, ExtendedConfig, OpcodeTables, Result};

fn run() -> Result<()> {
    let config = ExtendedConfig::parse();
    simple_logger::init_with_level(config.common.log_level())
        .map_err(|e| format!("failed to install logger: {}", e))?;

    let tables = OpcodeTables::load(&config.common.log_path)?;
    print!("{}", render_extended(&tables, config.mode_width)?);
    Ok(())
}

quick_main!(run);
