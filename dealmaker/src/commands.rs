//! `create` and `status` command flows: validate, build, call the contract, report.

use crate::builder::build_deal_request;
use crate::cli::{Cli, Command, CreateArgs, StatusArgs};
use crate::config::{DealDefaults, Settings};
use crate::contract::{abi, DealGateway, GatewayConnector};
use crate::error::{DealError, Result};
use crate::types::{DealRequest, ExtraParams, PieceStatus};
use crate::validation::{validate_create, validate_status};
use ethers::types::{Bytes, TxHash};
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Result of one command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandOutput {
    Submitted {
        tx_hash: TxHash,
        piece_cid: String,
    },
    DryRun {
        request: DealRequest,
        calldata: Bytes,
    },
    Status {
        piece_cid: String,
        status: PieceStatus,
        code: u8,
    },
}

impl CommandOutput {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            CommandOutput::Submitted { tx_hash, .. } => format!("{:#x}", tx_hash),
            CommandOutput::Status { status, .. } => status.to_string(),
            CommandOutput::DryRun { request, calldata } => {
                let mut lines = vec![
                    format!("piece_cid: {}", request.piece_cid),
                    format!("piece_size: {}", request.piece_size),
                    format!("verified_deal: {}", request.verified_deal),
                    format!("label: {}", request.label),
                    format!("start_epoch: {}", request.start_epoch),
                    format!("end_epoch: {}", request.end_epoch),
                    format!("extra_params_version: {}", request.extra_params_version()),
                ];
                match &request.extra_params {
                    ExtraParams::V1(params) => {
                        lines.push(format!("location_ref: {}", params.location_ref));
                        lines.push(format!("car_size: {}", params.car_size));
                    }
                }
                lines.push(format!("calldata: {}", calldata));
                lines.join("\n")
            }
        }
    }
}

/// Validate, build and submit one deal proposal.
pub async fn run_create<C: GatewayConnector>(
    args: &CreateArgs,
    settings: &Settings,
    connector: &C,
) -> Result<CommandOutput> {
    let flags = validate_create(args, settings)?;
    let request = build_deal_request(&flags, &DealDefaults::default());
    debug!(
        "Built deal request for piece {} (extra params v{})",
        flags.piece_cid,
        request.extra_params_version()
    );

    if args.dry_run {
        let calldata = abi::encode_make_deal_proposal(&request);
        return Ok(CommandOutput::DryRun { request, calldata });
    }

    let chain_id = u64::try_from(flags.chain_id).map_err(|_| {
        DealError::Submission(format!("chain id {} cannot sign transactions", flags.chain_id))
    })?;

    let gateway = connector.connect(&flags.rpc_endpoint, flags.contract)?;
    let tx_hash = gateway
        .propose_deal(&flags.signer, chain_id, &request)
        .await?;

    Ok(CommandOutput::Submitted {
        tx_hash,
        piece_cid: flags.piece_cid.to_string(),
    })
}

/// Validate inputs and read the on-chain status of one piece.
pub async fn run_status<C: GatewayConnector>(
    args: &StatusArgs,
    settings: &Settings,
    connector: &C,
) -> Result<CommandOutput> {
    let flags = validate_status(args, settings)?;
    let gateway = connector.connect(&flags.rpc_endpoint, flags.contract)?;
    let status = gateway.piece_status(&flags.piece_cid.to_bytes()).await?;
    info!("Piece {} status: {}", flags.piece_cid, status);

    Ok(CommandOutput::Status {
        piece_cid: flags.piece_cid.to_string(),
        code: status.code(),
        status,
    })
}

/// Load the settings profile and run the selected subcommand.
pub async fn execute<C: GatewayConnector>(cli: &Cli, connector: &C) -> Result<CommandOutput> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        Command::Create(args) => run_create(args, &settings, connector).await,
        Command::Status(args) => run_status(args, &settings, connector).await,
    }
}
