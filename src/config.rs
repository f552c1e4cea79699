use clap::{ArgAction, Parser};
use log::Level;
use std::path::PathBuf;

pub const DEFAULT_LOG: &str = "measure.log";
pub const DEFAULT_MODE_WIDTH: usize = 8;

// Arguments shared by both front ends; `timing_table` takes exactly these.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "timing_table",
    about = "Prints the cycle count table measured by perfect6502"
)]
pub struct Config {
    #[arg(
        value_name = "LOG",
        default_value = DEFAULT_LOG,
        help = "measure.log produced by perfect6502"
    )]
    pub log_path: PathBuf,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::SetTrue,
        help = "Echo parsed lines and report warnings on the console"
    )]
    pub verbose: bool,
}

impl Config {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::Debug
        } else {
            Level::Error
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "opcode_info",
    about = "Prints the cycle count and address mode tables measured by perfect6502"
)]
pub struct ExtendedConfig {
    #[command(flatten)]
    pub common: Config,
    #[arg(
        long = "mode-width",
        value_name = "WIDTH",
        default_value_t = DEFAULT_MODE_WIDTH,
        value_parser = parse_mode_width,
        help = "Entries per row of the address mode table (8 or 16)"
    )]
    pub mode_width: usize,
}

fn parse_mode_width(s: &str) -> Result<usize, String> {
    match s {
        "8" => Ok(8),
        "16" => Ok(16),
        _ => Err(format!("expected 8 or 16, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(vec!["timing_table"]).unwrap();
        assert_eq!(PathBuf::from("measure.log"), config.log_path);
        assert!(!config.verbose);
        assert_eq!(Level::Error, config.log_level());

        let config = ExtendedConfig::try_parse_from(vec!["opcode_info"]).unwrap();
        assert_eq!(PathBuf::from("measure.log"), config.common.log_path);
        assert_eq!(8, config.mode_width);
    }

    #[test]
    fn all_options() {
        let config = ExtendedConfig::try_parse_from(vec![
            "opcode_info",
            "--verbose",
            "--mode-width",
            "16",
            "logs/run.log",
        ])
        .unwrap();
        assert!(config.common.verbose);
        assert_eq!(16, config.mode_width);
        assert_eq!(PathBuf::from("logs/run.log"), config.common.log_path);
        assert_eq!(Level::Debug, config.common.log_level());
    }

    #[test]
    fn bad_arguments() {
        for args in vec![
            vec!["opcode_info", "--mode-width"],
            vec!["opcode_info", "--mode-width", "eight"],
            vec!["opcode_info", "--mode-width", "4"],
            vec!["opcode_info", "--width"],
            vec!["opcode_info", "a.log", "b.log"],
        ] {
            assert!(ExtendedConfig::try_parse_from(args.clone()).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn basic_front_end_has_no_mode_width() {
        assert!(Config::try_parse_from(vec!["timing_table", "--mode-width", "8"]).is_err());
        assert!(Config::try_parse_from(vec!["timing_table", "-v", "run.log"]).is_ok());
    }
}
