use std::process::Command;

fn hilo_bin() -> String {
    env!("CARGO_BIN_EXE_hilo").to_string()
}

#[test]
fn version_prints_name_and_version() {
    let out = Command::new(hilo_bin()).arg("--version").output().unwrap();
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.starts_with("hilo "), "unexpected version line: {s:?}");
}

#[test]
fn unknown_command_fails() {
    let out = Command::new(hilo_bin()).arg("frobnicate").output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn sim_is_reproducible_for_a_fixed_seed() {
    let run = || {
        Command::new(hilo_bin())
            .args(["sim", "--games", "200", "--seed", "42", "--max", "10", "--no-hist"])
            .output()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);

    let s = String::from_utf8(a.stdout).unwrap();
    assert!(s.contains("Games: 200"), "missing games line: {s}");
    assert!(s.contains("Single-guess win probability: 9.09%"), "{s}");
}

#[test]
fn sim_writes_manifest_and_events_matching_totals() {
    let dir = tempfile::tempdir().unwrap();
    let out = Command::new(hilo_bin())
        .args(["sim", "--games", "50", "--seed", "7", "--max", "10", "--no-hist", "--out"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let manifest: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("session.json")).unwrap()).unwrap();
    assert_eq!(manifest["session_manifest_version"], 1);
    assert_eq!(manifest["games_played"], 50);

    let wins = manifest["wins"].as_u64().unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(
        stdout.contains(&format!("Wins: {wins} (")),
        "manifest wins {wins} not reflected in stdout: {stdout}"
    );

    // Every event line is a standalone JSON object; one round_ended per game.
    let events = std::fs::read_to_string(dir.path().join("events.ndjson")).unwrap();
    let mut started = 0u32;
    let mut ended = 0u32;
    for line in events.lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        match v["event"].as_str().unwrap() {
            "round_started" => started += 1,
            "round_ended" => ended += 1,
            "guess" => {}
            other => panic!("unexpected event kind {other}"),
        }
    }
    assert_eq!(started, 50);
    assert_eq!(ended, 50);
}

#[test]
fn sim_floors_a_zero_bound_to_one() {
    let out = Command::new(hilo_bin())
        .args(["sim", "--games", "20", "--seed", "3", "--max", "0", "--no-hist"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.contains("Games: 20"), "{s}");
    assert!(s.contains("Single-guess win probability: 50.00%"), "{s}");
}
