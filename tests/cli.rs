use std::fs;
use std::process::{Command, Output};

const TIMING_TABLE: &str = env!("CARGO_BIN_EXE_timing_table");
const OPCODE_INFO: &str = env!("CARGO_BIN_EXE_opcode_info");

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

#[test]
fn timing_table_prints_literal() {
    let out = run(TIMING_TABLE, &["tests/fixture/measure.log"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("uint cycleCountTable[256] = [\n    7, 6, 0, 8,"));
    assert_eq!(18, stdout.lines().count());
}

#[test]
fn opcode_info_prints_both_literals() {
    let out = run(OPCODE_INFO, &["--mode-width", "16", "tests/fixture/measure.log"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("ubyte cycleCountTable[256] = ["));
    assert!(stdout.contains("ubyte addressModeTable[256] = ["));
    // one header row per table at width 16
    assert_eq!(2, stdout.lines().filter(|l| l.trim_start().starts_with("//")).count());
}

#[test]
fn malformed_log_prints_nothing() {
    let path = std::env::temp_dir().join("opcode_tables_cli_malformed.log");
    fs::write(
        &path,
        "$00: bytes: 1 cycles: 0 ___S___ imp\n$01: bytes: 2 cycles: 6 ___ zpx\n$02 oops\n",
    )
    .unwrap();
    let path = path.to_str().unwrap().to_owned();

    for bin in &[TIMING_TABLE, OPCODE_INFO] {
        let out = run(bin, &[path.as_str()]);
        assert!(!out.status.success());
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8(out.stderr).unwrap();
        assert!(stderr.contains("line 3: malformed log line: '$02 oops'"), "{}", stderr);
    }
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_log_prints_nothing() {
    let out = run(TIMING_TABLE, &["tests/fixture/no_such.log"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to read tests/fixture/no_such.log"), "{}", stderr);
}

#[test]
fn rejected_arguments() {
    let out = run(TIMING_TABLE, &["--mode-width", "8", "tests/fixture/measure.log"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let out = run(OPCODE_INFO, &["--mode-width", "4", "tests/fixture/measure.log"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
