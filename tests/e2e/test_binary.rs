//! Integration tests for the flowchart-ascii binary.
//!
//! These run the compiled binary on the scripts under `demos/`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Get the demos directory.
fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flowchart-ascii"))
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

#[test]
fn test_all_demos_render() {
    let mut scripts: Vec<PathBuf> = fs::read_dir(demos_dir())
        .expect("demos directory")
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("flow"))
        .collect();
    scripts.sort();
    assert!(!scripts.is_empty(), "No demo scripts found");

    for script in scripts {
        let src = fs::read_to_string(&script).unwrap();
        let out = stdout_of(&run_binary(&src, &[]));
        assert!(out.contains("End of Flowchart"), "{:?}:\n{}", script, out);
        assert!(out.starts_with('┌'), "{:?}:\n{}", script, out);
    }
}

#[test]
fn test_reads_file_argument() {
    let path = demos_dir().join("branching.flow");
    let from_file = stdout_of(&run_binary("", &[path.to_str().unwrap()]));
    let src = fs::read_to_string(&path).unwrap();
    let from_stdin = stdout_of(&run_binary(&src, &[]));
    assert_eq!(from_file, from_stdin);
    assert!(from_file.contains('┴'));
}

#[test]
fn test_loop_demo_has_annotation() {
    let src = fs::read_to_string(demos_dir().join("retry.flow")).unwrap();
    let out = stdout_of(&run_binary(&src, &[]));
    assert!(out.contains("*Loop to: Receive"));
    assert!(out.contains("Reject and ask"));
    assert!(out.contains("for a resend"));
}

#[test]
fn test_ascii_flag() {
    let out = stdout_of(&run_binary("start Begin\nstep A from 1\nend", &["--ascii"]));
    assert!(out.starts_with('+'));
    assert!(out.contains('v'));
    assert!(!out.contains('│'));
}

#[test]
fn test_empty_script_prints_placeholder() {
    let out = stdout_of(&run_binary("# nothing yet\n", &[]));
    assert_eq!(out.trim_end(), "No nodes to render.");
}

#[test]
fn test_invalid_script_fails() {
    let output = run_binary("start Begin\nmerge M from 1, 1\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: line 2"), "stderr: {stderr}");
}

#[test]
fn test_out_of_range_geometry_rejected() {
    for args in [
        ["--h-spacing", "9223372036854775807"],
        ["--node-width", "100000000"],
        ["--node-height", "2"],
        ["--v-spacing", "101"],
    ] {
        let output = run_binary("start Begin", &args);
        assert!(!output.status.success(), "{args:?} was accepted");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(args[0]), "{args:?} stderr: {stderr}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_geometry_flags_change_layout() {
    let out = stdout_of(&run_binary(
        "start Begin\nstep A from 1 right",
        &["--node-width", "11", "--h-spacing", "2"],
    ));
    let first = out.lines().next().unwrap();
    assert_eq!(first, "┌─────────┐  ┌─────────┐");
}

#[test]
fn test_output_file() {
    let dir = std::env::temp_dir().join(format!("flowchart-ascii-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let target = dir.join("out.txt");
    let output = run_binary("start Begin", &["-o", target.to_str().unwrap()]);
    assert!(output.status.success());
    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("Begin"));
    fs::remove_dir_all(&dir).ok();
}
