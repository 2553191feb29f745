//! Cross-process determinism for the solve pipeline.
//!
//! Spawns the `solve_fixture` binary under several environment variants
//! and asserts that all produce identical output. This proves problem
//! digests, search order, and report digests are not influenced by
//! process-level state (cwd, locale, env vars, log filters).

use std::path::Path;
use std::process::Command;

use lock_tests::fixture_path;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary on `fixture` with the given cwd and environment overrides.
fn run_variant(fixture: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");
    let mut command = Command::new(bin);
    command
        .arg(fixture_path(fixture))
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant("loop_detour.json", &root, &[]);
    assert!(baseline.contains("report_digest=sha256:"));

    let alt_cwd = std::env::temp_dir();
    let variants = [
        run_variant("loop_detour.json", &alt_cwd.to_string_lossy(), &[]),
        run_variant("loop_detour.json", &root, &[("LC_ALL", "C"), ("LANG", "C")]),
        run_variant(
            "loop_detour.json",
            &root,
            &[
                ("RUST_LOG", "trace"),
                ("REVWALK_LIMIT", "1"),
                ("TZ", "America/New_York"),
            ],
        ),
    ];
    for variant in variants {
        assert_eq!(baseline, variant);
    }
}

#[test]
fn crossproc_output_matches_expected_search() {
    let output = run_variant("loop_detour.json", &workspace_root(), &[]);
    assert!(output.contains("halt_reason=goal_reached\n"), "{output}");
    assert!(output.contains("iterations=10\n"), "{output}");
    assert!(output.contains("solution_1=6,-7,1,2,5,3,4,0\n"), "{output}");
    assert!(output.contains("replay_1=match\n"), "{output}");
}

#[test]
fn crossproc_unreachable_fixture_reports_no_solution() {
    let output = run_variant("chain_add_unreachable.json", &workspace_root(), &[]);
    assert!(output.contains("halt_reason=frontier_exhausted\n"), "{output}");
    assert!(output.contains("solutions=0\n"), "{output}");
}
