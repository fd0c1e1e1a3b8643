//! Command-line surface tests.
//!
//! Every test runs the real binary against a temp data directory. Nothing here
//! reaches a live API: commands that would need one either fail before any
//! request or point at a closed local port.

use anyhow::Result;
use predicates::prelude::*;
use shopdesk_testing::TestWorld;

const CLOSED_PORT_API: &str = "http://127.0.0.1:9/api/admin";
const SESSION_MARKER: &str = r#"{"authenticated": true, "since": "2024-05-01T00:00:00Z"}"#;

#[test]
fn test_help_lists_every_command() -> Result<()> {
    // Given: A fresh environment
    let world = TestWorld::new()?;

    // When/Then: --help names each subcommand
    world
        .command(&["--help"])?
        .assert()
        .success()
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("config"));
    Ok(())
}

#[test]
fn test_config_path_points_into_data_dir() -> Result<()> {
    let world = TestWorld::new()?;

    let result = world.run(&["config", "path"])?;

    assert!(result.success(), "config path failed: {}", result.stderr);
    let expected = world.data_dir().join("config.toml");
    assert_eq!(result.stdout.trim(), expected.display().to_string());
    Ok(())
}

#[test]
fn test_config_init_refuses_to_overwrite_without_force() -> Result<()> {
    // Given: An initialised config
    let world = TestWorld::new()?;
    let first = world.run(&["config", "init"])?;
    assert!(first.success(), "first init failed: {}", first.stderr);
    assert!(world.data_dir().join("config.toml").exists());

    // When: Init runs again without --force
    let second = world.run(&["config", "init"])?;

    // Then: It fails and says how to proceed
    assert!(!second.success());
    assert!(second.stderr.contains("already exists"), "stderr: {}", second.stderr);

    // And: --force succeeds
    let forced = world.run(&["config", "init", "--force"])?;
    assert!(forced.success(), "forced init failed: {}", forced.stderr);
    Ok(())
}

#[test]
fn test_config_show_applies_api_flag() -> Result<()> {
    // Given: A config file with its own API base
    let world = TestWorld::new()?;
    world.write_config("api_base = \"http://from-file.test/api/admin\"\nrequest_timeout_secs = 3\n")?;

    // When: Showing without and with --api
    let plain = world.run(&["config", "show"])?;
    let overridden = world.run(&["--api", "http://from-flag.test/api/admin", "config", "show"])?;

    // Then: The file value shows first, the flag wins second
    assert!(plain.success(), "show failed: {}", plain.stderr);
    assert!(plain.stdout.contains("http://from-file.test/api/admin"));
    assert!(plain.stdout.contains("request_timeout_secs = 3"));
    assert!(overridden.stdout.contains("http://from-flag.test/api/admin"));
    assert!(!overridden.stdout.contains("from-file.test"));
    Ok(())
}

#[test]
fn test_malformed_config_is_reported() -> Result<()> {
    let world = TestWorld::new()?;
    world.write_config("api_base = [not toml")?;

    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr.starts_with("Error:"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_logout_removes_stored_session() -> Result<()> {
    // Given: A stored session marker
    let world = TestWorld::new()?;
    let marker = world.data_dir().join("session.json");
    std::fs::write(&marker, SESSION_MARKER)?;

    // When: Logging out twice
    let first = world.run(&["logout"])?;
    let second = world.run(&["logout"])?;

    // Then: The marker is gone and the second call has nothing to clear
    assert!(first.success(), "logout failed: {}", first.stderr);
    assert_eq!(first.stdout.trim(), "Signed out");
    assert!(!marker.exists());
    assert_eq!(second.stdout.trim(), "No stored session");
    Ok(())
}

#[test]
fn test_dump_without_session_or_credentials_fails() -> Result<()> {
    let world = TestWorld::new()?;

    let result = world.run(&["--api", CLOSED_PORT_API, "dump", "products"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Not signed in"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_dump_rejects_unknown_view() -> Result<()> {
    let world = TestWorld::new()?;

    world
        .command(&["dump", "warehouse"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}

#[test]
fn test_dump_user_requires_password() -> Result<()> {
    let world = TestWorld::new()?;

    world
        .command(&["dump", "orders", "--user", "admin"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
    Ok(())
}

#[test]
fn test_login_against_unreachable_api_fails_without_storing_session() -> Result<()> {
    // Given: An API base nobody listens on
    let world = TestWorld::new()?;
    world.write_config(&format!("api_base = \"{}\"\nrequest_timeout_secs = 2\n", CLOSED_PORT_API))?;

    // When: Signing in
    let result = world.run(&["login", "--user", "admin", "--password", "secret"])?;

    // Then: The failure is reported and no marker is written
    assert!(!result.success());
    assert!(result.stderr.contains("Login failed"), "stderr: {}", result.stderr);
    assert!(!world.data_dir().join("session.json").exists());
    Ok(())
}

#[test]
fn test_console_requires_a_terminal() -> Result<()> {
    // assert_cmd pipes stdout, so the interactive console must refuse to start
    let world = TestWorld::new()?;

    let result = world.run(&[])?;

    assert!(!result.success());
    assert!(result.stderr.contains("needs a terminal"), "stderr: {}", result.stderr);
    Ok(())
}
