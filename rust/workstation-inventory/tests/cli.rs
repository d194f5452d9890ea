use assert_cmd::Command;
use serde_json::Value;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

fn inventory_cmd() -> Command {
    let mut cmd = Command::cargo_bin("workstation-inventory").unwrap();
    cmd.env_clear();
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn two_hosts_in_order() {
    let json = stdout_json(
        inventory_cmd()
            .env("workstations_ips", "10.0.0.1 10.0.0.2")
            .env("admin_username", "admin")
            .env("admin_password", "secret"),
    );

    assert_eq!(
        json["workstations"]["hosts"],
        serde_json::json!(["10.0.0.1", "10.0.0.2"])
    );
    assert_eq!(json["workstations"]["vars"]["ansible_user"], "admin");
    assert_eq!(json["workstations"]["vars"]["ansible_password"], "secret");
    assert_eq!(json["workstations"]["vars"]["ansible_port"], 5986);
    assert_eq!(json["workstations"]["vars"]["ansible_connection"], "winrm");
    assert_eq!(json["workstations"]["vars"]["ansible_winrm_transport"], "ntlm");
    assert_eq!(
        json["workstations"]["vars"]["ansible_winrm_server_cert_validation"],
        "ignore"
    );
}

#[test]
fn single_host() {
    let json = stdout_json(
        inventory_cmd()
            .env("workstations_ips", "10.0.0.1")
            .env("admin_username", "admin")
            .env("admin_password", "secret"),
    );

    assert_eq!(json["workstations"]["hosts"], serde_json::json!(["10.0.0.1"]));
}

#[test]
fn irregular_spacing() {
    let json = stdout_json(
        inventory_cmd()
            .env("workstations_ips", "  10.0.0.1   10.0.0.2  ")
            .env("admin_username", "admin")
            .env("admin_password", "secret"),
    );

    assert_eq!(
        json["workstations"]["hosts"],
        serde_json::json!(["10.0.0.1", "10.0.0.2"])
    );
}

#[test]
fn missing_hosts_fails_without_output() {
    inventory_cmd()
        .env("admin_username", "admin")
        .env("admin_password", "secret")
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn missing_hosts_names_the_variable_on_stderr() {
    let output = inventory_cmd().output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("workstations_ips"), "stderr: {}", stderr);
}

#[test]
fn non_unicode_password_still_prints_inventory() {
    let json = stdout_json(
        inventory_cmd()
            .env("workstations_ips", "10.0.0.1")
            .env("admin_username", "admin")
            .env("admin_password", OsStr::from_bytes(b"p\xffw")),
    );

    assert_eq!(json["workstations"]["hosts"], serde_json::json!(["10.0.0.1"]));
    assert_eq!(json["workstations"]["vars"]["ansible_password"], "p\u{FFFD}w");
}

#[test]
fn missing_credentials_are_null() {
    let json = stdout_json(inventory_cmd().env("workstations_ips", "10.0.0.1"));

    assert!(json["workstations"]["vars"]["ansible_user"].is_null());
    assert!(json["workstations"]["vars"]["ansible_password"].is_null());
}

#[test]
fn identical_env_gives_identical_output() {
    let run = || {
        inventory_cmd()
            .env("workstations_ips", "10.0.0.1 10.0.0.2")
            .env("admin_username", "admin")
            .env("admin_password", "secret")
            .output()
            .unwrap()
            .stdout
    };
    let first = run();

    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn list_matches_bare_invocation() {
    let bare = inventory_cmd()
        .env("workstations_ips", "10.0.0.1")
        .output()
        .unwrap();
    let list = inventory_cmd()
        .env("workstations_ips", "10.0.0.1")
        .arg("--list")
        .output()
        .unwrap();

    assert!(list.status.success());
    assert_eq!(bare.stdout, list.stdout);
}

#[test]
fn host_prints_empty_object() {
    inventory_cmd()
        .env("workstations_ips", "10.0.0.1")
        .args(["--host", "10.0.0.1"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn unknown_argument_is_usage_error() {
    inventory_cmd()
        .env("workstations_ips", "10.0.0.1")
        .arg("--bogus")
        .assert()
        .code(2)
        .stdout("");
}
