//! Command-line surface of the `dealmaker` binary

use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dealmaker",
    version,
    about = "dealmaker lets you make deals using a FVM smart contract"
)]
pub struct Cli {
    /// TOML settings profile supplying rpc_endpoint, contract and chain_id
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create deal
    Create(CreateArgs),
    /// Check the status of a deal
    Status(StatusArgs),
}

#[derive(Clone, Default, Args)]
pub struct CreateArgs {
    /// Gateway RPC endpoint
    #[arg(long)]
    pub rpc_endpoint: Option<String>,
    /// The Smart Contract address
    #[arg(long)]
    pub contract: Option<String>,
    /// The piece CID
    #[arg(long)]
    pub piece_cid: Option<String>,
    /// The piece size in bytes
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub piece_size: i64,
    /// If it's a verified deal or not
    #[arg(long)]
    pub verified: bool,
    /// The payload CID
    #[arg(long)]
    pub payload_cid: Option<String>,
    /// When the deal starts
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start_epoch: i64,
    /// When the deal ends
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub end_epoch: i64,
    /// Where the CAR file can be downloaded
    #[arg(long)]
    pub location_ref: Option<String>,
    /// The size of the CAR file
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub car_size: i64,
    /// The private key
    #[arg(long)]
    pub private_key: Option<String>,
    /// The network id
    #[arg(long, allow_negative_numbers = true)]
    pub chain_id: Option<i64>,
    /// Build and encode the proposal without submitting it
    #[arg(long)]
    pub dry_run: bool,
}

// Hand-written so the private key never reaches a log line.
impl fmt::Debug for CreateArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateArgs")
            .field("rpc_endpoint", &self.rpc_endpoint)
            .field("contract", &self.contract)
            .field("piece_cid", &self.piece_cid)
            .field("piece_size", &self.piece_size)
            .field("verified", &self.verified)
            .field("payload_cid", &self.payload_cid)
            .field("start_epoch", &self.start_epoch)
            .field("end_epoch", &self.end_epoch)
            .field("location_ref", &self.location_ref)
            .field("car_size", &self.car_size)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("chain_id", &self.chain_id)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Gateway RPC endpoint
    #[arg(long)]
    pub rpc_endpoint: Option<String>,
    /// The Smart Contract address
    #[arg(long)]
    pub contract: Option<String>,
    /// The piece CID
    #[arg(long)]
    pub piece_cid: Option<String>,
}
