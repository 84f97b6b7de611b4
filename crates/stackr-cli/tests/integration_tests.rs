//! Integration tests for the `stackr` binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command running in an empty directory, isolated from the user's
/// config, `.env` and package-manager environment.
fn stackr(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("stackr");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("npm_config_user_agent")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn json_stdout(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── resolve: success ──────────────────────────────────────────────────────────

#[test]
fn resolve_prints_json_with_defaults_filled() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .args([
            "resolve",
            "shop",
            "--backend",
            "hono",
            "--database",
            "sqlite",
            "--orm",
            "drizzle",
            "--auth",
            "--frontend",
            "next",
            "--api",
            "trpc",
            "--json",
        ])
        .assert()
        .success();

    let json = json_stdout(&assert.get_output().stdout);
    let config = &json["config"];
    assert_eq!(config["projectName"], "shop");
    assert!(config["projectDir"].as_str().unwrap().ends_with("shop"));
    assert_eq!(config["backend"], "hono");
    assert_eq!(config["frontend"], serde_json::json!(["next"]));
    assert_eq!(config["runtime"], "bun");
    assert_eq!(config["packageManager"], "npm");
    assert_eq!(json["advisories"], serde_json::json!([]));
}

#[test]
fn resolve_human_output_lists_the_stack() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--backend", "express"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-stack-app"))
        .stdout(predicate::str::contains("express"))
        .stdout(predicate::str::contains("compatible"));
}

#[test]
fn advisories_warn_without_failing() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--addons", "husky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Biome"))
        .stdout(predicate::str::contains("addons.husky-without-biome"));
}

#[test]
fn convex_cascade_switches_server_side_off() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .args(["check", "--backend", "convex", "--json"])
        .assert()
        .success();
    let config = &json_stdout(&assert.get_output().stdout)["config"];
    assert_eq!(config["database"], "none");
    assert_eq!(config["auth"], false);
    assert_eq!(config["examples"], serde_json::json!(["todo"]));
}

#[test]
fn quiet_still_prints_requested_json() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .args(["-q", "resolve", "--json"])
        .assert()
        .success();
    let json = json_stdout(&assert.get_output().stdout);
    assert_eq!(json["config"]["backend"], "hono");
}

// ── resolve: rule violations exit 2 ───────────────────────────────────────────

#[test]
fn trpc_on_nuxt_fails_with_rule_and_alternative() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args([
            "check",
            "--backend",
            "hono",
            "--frontend",
            "nuxt",
            "--api",
            "trpc",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("api.trpc-frontend"))
        .stderr(predicate::str::contains("nuxt"))
        .stderr(predicate::str::contains("orpc"));
}

#[test]
fn convex_with_auth_names_the_flag() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--backend", "convex", "--auth"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--auth"))
        .stderr(predicate::str::contains("backend.mode-flags"));
}

#[test]
fn unknown_token_lists_allowed_values() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--database", "oracle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("oracle"))
        .stderr(predicate::str::contains("postgres"));
}

#[test]
fn sentinel_mixed_with_frontends_fails() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--frontend", "none,next"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("input.sentinel-combined"));
}

#[test]
fn invalid_project_name_fails() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", ".hidden"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot start with a dot"));
}

// ── resolve: input file ───────────────────────────────────────────────────────

#[test]
fn input_file_is_merged_under_flags() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.json");
    fs::write(
        &file,
        r#"{"projectDirectory":"apps/api","backend":"express","database":"postgres"}"#,
    )
    .unwrap();

    let assert = stackr(&dir)
        .args([
            "resolve",
            "--input",
            "stack.json",
            "--backend",
            "fastify",
            "--json",
        ])
        .assert()
        .success();
    let config = &json_stdout(&assert.get_output().stdout)["config"];
    assert_eq!(config["projectName"], "api");
    assert_eq!(config["backend"], "fastify");
    assert_eq!(config["database"], "postgres");
}

#[test]
fn missing_input_file_exits_3() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["resolve", "--input", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.json"));
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("custom.toml"),
        "[defaults]\nbackend = \"elysia\"\ndatabase = \"postgres\"\n",
    )
    .unwrap();

    let assert = stackr(&dir)
        .args(["--config", "custom.toml", "resolve", "--json"])
        .assert()
        .success();
    let config = &json_stdout(&assert.get_output().stdout)["config"];
    assert_eq!(config["backend"], "elysia");
    assert_eq!(config["database"], "postgres");
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join(".stackr.toml");
    fs::write(local, "[defaults]\nruntime = \"node\"\n").unwrap();

    let assert = stackr(&dir).args(["resolve", "--json"]).assert().success();
    let config = &json_stdout(&assert.get_output().stdout)["config"];
    assert_eq!(config["runtime"], "node");
}

#[test]
fn environment_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .env("STACKR_DEFAULTS__DATABASE", "postgres")
        .args(["resolve", "--json"])
        .assert()
        .success();
    assert_eq!(
        json_stdout(&assert.get_output().stdout)["config"]["database"],
        "postgres"
    );
}

#[test]
fn bad_config_file_exits_4() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(bad, "[defaults]\nbackend = \"rails\"\n").unwrap();
    stackr(&dir)
        .args(["--config", "bad.toml", "resolve"])
        .assert()
        .code(4);
}

#[test]
fn package_manager_follows_user_agent() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .env("npm_config_user_agent", "pnpm/9.1.0 node/v20.11.0")
        .args(["resolve", "--json"])
        .assert()
        .success();
    assert_eq!(
        json_stdout(&assert.get_output().stdout)["config"]["packageManager"],
        "pnpm"
    );
}

#[test]
fn config_get_prints_value() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["config", "get", "defaults.backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hono"));
}

#[test]
fn config_get_unknown_key_exits_4() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4);
}

// ── list / completions ────────────────────────────────────────────────────────

#[test]
fn list_json_describes_dimensions() {
    let dir = TempDir::new().unwrap();
    let assert = stackr(&dir)
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let json = json_stdout(&assert.get_output().stdout);
    let frontend = json
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["dimension"] == "frontend")
        .unwrap();
    assert_eq!(frontend["multiValued"], true);
    assert_eq!(frontend["flag"], "--frontend");
}

#[test]
fn list_single_dimension() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["list", "--dimension", "orm", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orm=mongoose"))
        .stdout(predicate::str::contains("backend=").not());
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    stackr(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stackr"));
}
