// Prints `uint cycleCountTable[256]` from a perfect6502 measure.log.

#[macro_use]
extern crate error_chain;

use clap::Parser;
use opcode_tables::{render_basic, Config, OpcodeTables, Result};

fn run() -> Result<()> {
    let config = Config::parse();
    simple_logger::init_with_level(config.log_level())
        .map_err(|e| format!("failed to install logger: {}", e))?;

    let tables = OpcodeTables::load(&config.log_path)?;
    print!("{}", render_basic(&tables)?);
    Ok(())
}

quick_main!(run);
