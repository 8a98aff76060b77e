use std::process::Command;

fn flapper() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flapper"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn runs_requested_episodes_and_logs_summary() {
    let output = flapper()
        .args(["--episodes", "2", "--seed", "7", "--flap-probability", "0.0"])
        .output()
        .expect("failed to spawn flapper");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout.matches("episode finished").count(), 2, "{stdout}");
    assert!(stdout.contains("Rollout finished."), "{stdout}");
}

#[test]
fn honours_step_budget_and_config_file() {
    let config = concat!(env!("CARGO_MANIFEST_DIR"), "/../physics/tests/data/fixed_palette.json");
    let output = flapper()
        .args(["--episodes", "100", "--max-steps", "20", "--config", config])
        .output()
        .expect("failed to spawn flapper");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.matches("episode finished").count() < 100, "{stdout}");
    assert!(stdout.contains("FixedPalette"), "{stdout}");
}

#[test]
fn bad_config_fails_fast() {
    let config = concat!(env!("CARGO_MANIFEST_DIR"), "/../physics/tests/data/unknown_field.json");
    let output = flapper().args(["--config", config]).output().expect("failed to spawn flapper");
    assert!(!output.status.success());
}
