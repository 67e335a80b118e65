//! Smoke tests against the built binary.

use std::process::Command;

fn rf_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rf-cli"))
}

#[test]
fn eval_prints_reference_point() {
    let out = rf_cli()
        .args(["eval", "--q", "1", "--ca-in", "2", "--k1", "0.5", "--k2", "0.25", "--vr", "1"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("CB = 1.066667"), "{stdout}");
    assert!(stdout.contains("CA = 1.333333"), "{stdout}");
}

#[test]
fn eval_reports_domain_error() {
    let out = rf_cli()
        .args(["eval", "--q", "0", "--ca-in", "5", "--k1", "0", "--k2", "1", "--vr", "10"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: no outflow and no conversion of A"), "{stderr}");
    assert!(!stderr.contains("Undefined {"), "{stderr}");
}

#[test]
fn eval_rejects_negative_flow() {
    let out = rf_cli()
        .args(["eval", "--q", "-1", "--ca-in", "2", "--k1", "0.5", "--k2", "0.25", "--vr", "1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: negative input: Q = -1"), "{stderr}");
}

#[test]
fn init_then_sweep_to_stdout() {
    let dir = std::env::temp_dir().join("rf_cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let catalog = dir.join("catalog.yaml");

    let out = rf_cli()
        .args(["init", "--force"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(out.status.success());

    let out = rf_cli()
        .arg("sweep")
        .arg(&catalog)
        .arg("feedstock-a")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Raw type;Feedstock A"));
    assert!(stdout.contains("Q;CA_in;CB"));

    let out = rf_cli()
        .arg("sweep")
        .arg(&catalog)
        .arg("missing")
        .output()
        .unwrap();
    assert!(!out.status.success());
}

fn seeded_catalog(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("rf_cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let catalog = dir.join(name);
    let out = rf_cli()
        .args(["init", "--force"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(out.status.success());
    catalog
}

#[test]
fn add_type_then_list() {
    let catalog = seeded_catalog("add_type.yaml");

    let out = rf_cli()
        .arg("add-type")
        .arg(&catalog)
        .args(["feedstock-c", "Feedstock C"])
        .args(["--k1", "0.2", "--k2", "0.1", "--vr", "5"])
        .args(["--q-min", "1", "--q-max", "5", "--dq", "1"])
        .args(["--ca-in-min", "0.5", "--ca-in-max", "1", "--dca-in", "0.5"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = rf_cli().arg("types").arg(&catalog).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("feedstock-c - Feedstock C (k1=0.2, k2=0.1, Vr=5)"), "{stdout}");

    // Same id again
    let out = rf_cli()
        .arg("add-type")
        .arg(&catalog)
        .args(["feedstock-c", "Feedstock D"])
        .args(["--k1", "0.2", "--k2", "0.1", "--vr", "5"])
        .args(["--q-min", "1", "--q-max", "5", "--dq", "1"])
        .args(["--ca-in-min", "0.5", "--ca-in-max", "1", "--dca-in", "0.5"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Duplicate ID: feedstock-c"));
}

#[test]
fn set_coeffs_changes_only_given_values() {
    let catalog = seeded_catalog("set_coeffs.yaml");

    let out = rf_cli()
        .arg("set-coeffs")
        .arg(&catalog)
        .args(["feedstock-a", "--k1", "0.3"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = rf_cli().arg("types").arg(&catalog).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("feedstock-a - Feedstock A (k1=0.3, k2=0.2, Vr=10)"), "{stdout}");

    let out = rf_cli()
        .arg("set-coeffs")
        .arg(&catalog)
        .args(["feedstock-a", "--vr", "-1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("raw_types[feedstock-a].Vr"), "{stderr}");
}

#[test]
fn series_prints_cb_over_q() {
    let catalog = seeded_catalog("series.yaml");

    let out = rf_cli()
        .arg("series")
        .arg(&catalog)
        .args(["feedstock-a", "--ca-in", "0.5"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let header = lines.iter().position(|l| *l == "Q;CB").unwrap();
    assert_eq!(lines.len() - header - 1, 10);
    assert!(lines[header + 1].starts_with("1.00;"));

    let out = rf_cli()
        .arg("series")
        .arg(&catalog)
        .args(["feedstock-a", "--ca-in", "0.55"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no grid points at CA_in = 0.55"));
}
