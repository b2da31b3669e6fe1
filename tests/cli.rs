use anyhow::Result;
use std::{
    fs,
    io::Write,
    process::{Command, Output, Stdio},
};
use tempfile::tempdir;

fn run_with_stdin(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_paramgen"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn piped_csv_prints_manifest() -> Result<()> {
    let dir = tempdir()?;
    let out_dir = dir.path().to_string_lossy().to_string();
    let output = run_with_stdin(
        &["-", "-p", "cfg-", "-o", &out_dir],
        "name,value\nvmName,vm01\nsize,small\n",
    )?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "cfg-0.json\ncfg-1.json\n");
    let first = fs::read_to_string(dir.path().join("cfg-0.json"))?;
    assert!(first.contains(r#""name":{"value":"vmName"}"#));
    Ok(())
}

#[test]
fn empty_stdin_fails_and_reports_once() -> Result<()> {
    let dir = tempdir()?;
    let out_dir = dir.path().join("out");
    let output = run_with_stdin(&["-", "-o", &out_dir.to_string_lossy()], "")?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("<stdin> contains no rows").count(), 1, "{stderr}");
    assert!(!out_dir.exists());
    Ok(())
}
