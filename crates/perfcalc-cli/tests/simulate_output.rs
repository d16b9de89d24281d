// crates/perfcalc-cli/tests/simulate_output.rs

use std::path::PathBuf;
use std::process::{Command, Output};

fn repo_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(rel)
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perfcalc-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn fixture() -> String {
    let path = repo_path("fixtures/ten_circles.osu");
    assert!(path.exists(), "missing {}", path.display());
    path.to_str().unwrap().to_owned()
}

#[test]
fn no_subcommand_prints_help_and_fails() {
    let out = cli().output().expect("spawn command");
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("You must specify a subcommand."), "{stdout}");
    assert!(stdout.contains("simulate"), "{stdout}");
}

#[test]
fn simulate_json_has_expected_fields() {
    let out = run_ok(cli().args(["simulate", "osu", fixture().as_str(), "-a", "95", "--json"]));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");

    assert_eq!(
        json["beatmap"],
        "Fixture Artist - Ten Circles (fixture) [Normal]"
    );
    assert_eq!(json["mods"], serde_json::json!([]));
    assert_eq!(json["play_info"]["Great"], 9);
    assert_eq!(json["play_info"]["Good"], 1);
    assert_eq!(json["play_info"]["Combo"], 10);
    assert!(json["category_attribs"]["Aim"].is_number());
    assert!(json["pp"].as_f64().unwrap() > 0.0);
}

#[test]
fn text_output_matches_json_output() {
    let map = fixture();
    let args = ["simulate", "osu", map.as_str(), "-a", "97", "-m", "hd", "-X", "1"];

    let text = run_ok(cli().args(args)).stdout;
    let text = String::from_utf8(text).unwrap();
    let json = run_ok(cli().args(args).arg("-j")).stdout;
    let json: serde_json::Value = serde_json::from_slice(&json).unwrap();

    for line in text.lines() {
        assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
    }

    assert!(text.starts_with(json["beatmap"].as_str().unwrap()));
    assert!(text.contains(&format!("{:<15}: HD\n", "Mods")), "{text}");
    assert_eq!(json["mods"], serde_json::json!(["HD"]));

    for (name, value) in json["play_info"].as_object().unwrap() {
        let prefix = format!("{name:<15}: ");
        assert!(text.contains(&prefix), "missing {name} in\n{text}");
        if let Some(n) = value.as_u64() {
            assert!(text.contains(&format!("{prefix}{n}\n")), "{name} differs");
        }
    }

    for (name, value) in json["category_attribs"].as_object().unwrap() {
        let line = format!("{name:<15}: {:.2}\n", value.as_f64().unwrap());
        assert!(text.contains(&line), "missing {line:?} in\n{text}");
    }

    let pp = format!("{:<15}: {:.2}\n", "pp", json["pp"].as_f64().unwrap());
    assert!(text.contains(&pp), "{text}");
}

#[test]
fn unknown_mod_aborts() {
    let out = cli()
        .args(["simulate", "osu", fixture().as_str(), "-m", "ZZ"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ZZ"));
}

#[test]
fn output_file_mirrors_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("result.json");

    let out = run_ok(cli().args([
        "simulate-listing",
        "taiko",
        fixture().as_str(),
        "-j",
        "-o",
        file.to_str().unwrap(),
    ]));

    let written = std::fs::read(&file).unwrap();
    assert_eq!(written, out.stdout);
}
