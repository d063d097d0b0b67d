//! End-to-end `status` flow and top-level dispatch

mod common;

use clap::Parser;
use common::*;
use dealmaker::cli::{Cli, StatusArgs};
use dealmaker::{execute, run_status, CommandOutput, DealError, OutputFormat, PieceStatus, Settings};
use std::io::Write;

#[tokio::test]
async fn test_status_queries_piece_bytes() {
    let connector = MockConnector::new();

    let output = run_status(&status_args(), &Settings::default(), &connector)
        .await
        .unwrap();

    assert_eq!(
        output,
        CommandOutput::Status {
            piece_cid: test_cid(1).to_string(),
            status: PieceStatus::DealPublished,
            code: 2,
        }
    );
    assert_eq!(output.render(OutputFormat::Text).unwrap(), "DealPublished (2)");

    let recorded = connector.recorded.lock().unwrap();
    assert_eq!(recorded.dials.len(), 1);
    assert_eq!(recorded.status_queries, vec![test_cid(1).to_bytes()]);
    assert!(recorded.proposals.is_empty());
}

#[tokio::test]
async fn test_status_missing_prefix_fails_before_dial() {
    let connector = MockConnector::new();
    let args = StatusArgs {
        contract: Some(CONTRACT.trim_start_matches("0x").to_string()),
        ..status_args()
    };

    let err = run_status(&args, &Settings::default(), &connector)
        .await
        .unwrap_err();

    assert!(matches!(err, DealError::InvalidAddress { .. }), "{err:?}");
    assert_eq!(connector.dials(), 0);
}

#[tokio::test]
async fn test_status_requires_piece_cid() {
    let connector = MockConnector::new();
    let args = StatusArgs {
        piece_cid: None,
        ..status_args()
    };

    let err = run_status(&args, &Settings::default(), &connector)
        .await
        .unwrap_err();
    assert!(matches!(err, DealError::MissingArgument("piece-cid")));
    assert_eq!(connector.dials(), 0);
}

#[tokio::test]
async fn test_execute_with_settings_profile() {
    let mut profile = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        profile,
        "rpc_endpoint = \"http://localhost:1234/rpc/v1\"\ncontract = \"{}\"",
        CONTRACT
    )
    .unwrap();

    let piece_cid = test_cid(9).to_string();
    let config_path = profile.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from([
        "dealmaker",
        "--config",
        config_path.as_str(),
        "status",
        "--piece-cid",
        piece_cid.as_str(),
    ])
    .unwrap();

    let connector = MockConnector::new();
    let output = execute(&cli, &connector).await.unwrap();
    assert!(matches!(output, CommandOutput::Status { .. }));

    let recorded = connector.recorded.lock().unwrap();
    assert_eq!(recorded.dials[0].0.port(), Some(1234));
    assert_eq!(recorded.status_queries, vec![test_cid(9).to_bytes()]);
}

#[tokio::test]
async fn test_execute_missing_profile_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let missing = missing.to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["dealmaker", "--config", missing.as_str(), "status"]).unwrap();

    let connector = MockConnector::new();
    let err = execute(&cli, &connector).await.unwrap_err();
    assert!(matches!(err, DealError::Config(_)));
    assert!(!err.is_validation());
    assert_eq!(connector.dials(), 0);
}
