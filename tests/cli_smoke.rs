//! End-to-end runs of the CLI against an unreachable backend.

use std::io::Write;

use cronapp_lib::{run_cli, Cli};
use serial_test::serial;
use tempfile::NamedTempFile;

use clap::Parser;

fn offline_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
            [api]
            base_url = "http://127.0.0.1:9"
            timeout_secs = 2

            [session]
            store = "memory"
        "#,
    )
    .unwrap();
    file
}

fn cli(config: &NamedTempFile, args: &[&str]) -> Cli {
    let mut argv = vec!["cronapp", "--config", config.path().to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[tokio::test]
#[serial]
async fn status_without_session_succeeds() {
    std::env::remove_var("CRONAPP_API_BASE_URL");
    let config = offline_config();

    run_cli(cli(&config, &["status"])).await.unwrap();
}

#[tokio::test]
#[serial]
async fn visiting_guarded_route_offline_succeeds() {
    std::env::remove_var("CRONAPP_API_BASE_URL");
    let config = offline_config();

    run_cli(cli(&config, &["visit", "/dashboard"])).await.unwrap();
}

#[tokio::test]
#[serial]
async fn login_against_unreachable_backend_fails() {
    std::env::remove_var("CRONAPP_API_BASE_URL");
    let config = offline_config();

    let err = run_cli(cli(
        &config,
        &["login", "--email", "ana@example.com", "--password", "correct-horse-battery"],
    ))
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Sign-in failed"));
}

#[tokio::test]
#[serial]
async fn onboarding_commands_require_a_session() {
    std::env::remove_var("CRONAPP_API_BASE_URL");
    let config = offline_config();

    let err = run_cli(cli(&config, &["onboarding-status"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Not signed in"));
}

#[tokio::test]
async fn bmi_needs_no_backend() {
    let cli = Cli::parse_from(["cronapp", "bmi", "--weight", "70", "--height", "170"]);
    run_cli(cli).await.unwrap();
}
