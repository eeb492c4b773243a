// tests/output_format.rs

mod common;

use assert_cmd::prelude::*;
use common::lineembed_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn run_on(name: &str, content: &str) -> Result<String, Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join(name), content)?;
    let output = lineembed_cmd()
        .arg(name)
        .current_dir(temp.path())
        .output()?;
    assert!(output.status.success());
    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_empty_file_header_then_terminator() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(run_on("empty.fs", "")?, "empty_code = \n;\n");
    Ok(())
}

#[test]
fn test_blank_line_kept_in_position() -> Result<(), Box<dyn std::error::Error>> {
    let out = run_on("gap.fs", "first\n\nsecond\n")?;
    assert_eq!(out, "gap_code = \n\" first \"\n\"  \"\n\" second \"\n;\n");
    Ok(())
}

#[test]
fn test_line_count_is_input_plus_two() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a\n  b\n\n\tc\t\n   \nd";
    let out = run_on("count.fs", input)?;
    assert_eq!(out.lines().count(), input.lines().count() + 2);
    Ok(())
}

#[test]
fn test_segments_match_stripped_lines() -> Result<(), Box<dyn std::error::Error>> {
    let input = "  : square dup * ;  \r\n\t\tsquare .\n";
    let out = run_on("square.fs", input)?;
    let segments: Vec<&str> = out.lines().skip(1).take(2).collect();
    assert_eq!(segments, vec!["\" : square dup * ; \"", "\" square . \""]);
    Ok(())
}

#[test]
fn test_quote_in_content_is_not_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let out = run_on("say.fs", ".\" hello\"\n")?;
    assert_eq!(out, "say_code = \n\" .\" hello\" \"\n;\n");
    Ok(())
}

#[test]
fn test_first_period_cuts_identifier() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("core.words.fs"), "dup\n")?;

    lineembed_cmd()
        .arg("core.words.fs")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("core_code = \n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_lone_cr_lines_become_segments() -> Result<(), Box<dyn std::error::Error>> {
    let out = run_on("hello.fs", "push 1\rpush 2\r")?;
    assert_eq!(out, "hello_code = \n\" push 1 \"\n\" push 2 \"\n;\n");
    Ok(())
}

#[test]
fn test_mixed_line_endings() -> Result<(), Box<dyn std::error::Error>> {
    let out = run_on("mixed.fs", "a\r\nb\rc\n\rd")?;
    assert_eq!(out, "mixed_code = \n\" a \"\n\" b \"\n\" c \"\n\"  \"\n\" d \"\n;\n");
    Ok(())
}

#[test]
fn test_ascii_separators_stripped() -> Result<(), Box<dyn std::error::Error>> {
    let out = run_on("sep.fs", "\u{1f}dup\u{1c}\n")?;
    assert_eq!(out, "sep_code = \n\" dup \"\n;\n");
    Ok(())
}
