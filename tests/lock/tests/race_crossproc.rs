//! Cross-process determinism of race results.
//!
//! Spawns the `race_fixture` binary under several working directories and
//! environment variants and asserts identical output: same fingerprint,
//! same outcome labels, same plans.

use std::process::Command;

/// Resolve the path to the compiled fixture binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; the fixture
/// binary lives one level up.
fn binary_path() -> std::path::PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(format!("race_fixture{}", std::env::consts::EXE_SUFFIX));
    path
}

fn run_variant(world: &str, work_dir: &std::path::Path, env: &[(&str, &str)]) -> String {
    let mut command = Command::new(binary_path());
    command.arg(world).current_dir(work_dir);
    for (key, value) in env {
        command.env(key, value);
    }
    let output = command.output().expect("race_fixture runs");
    assert!(
        output.status.success(),
        "race_fixture failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn race_output_is_identical_across_processes() {
    let temp = tempfile::tempdir().unwrap();
    let cwd = std::env::current_dir().unwrap();
    let baseline = run_variant("blocks-3", &cwd, &[]);
    let variants = [
        run_variant("blocks-3", temp.path(), &[]),
        run_variant("blocks-3", &cwd, &[("LC_ALL", "C"), ("RUST_LOG", "trace")]),
        run_variant("blocks-3", temp.path(), &[("TZ", "UTC")]),
    ];
    for variant in &variants {
        assert_eq!(variant, &baseline);
    }

    let lines: Vec<&str> = baseline.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("fingerprint=sha256:"));
    for line in &lines[1..] {
        assert!(line.contains("=plan:"), "{line}");
    }
}

#[test]
fn unknown_world_exits_with_failure() {
    let output = Command::new(binary_path())
        .arg("no-such-world")
        .output()
        .expect("race_fixture runs");
    assert!(!output.status.success());
}
