//! Storage deal proposals against an FVM deal client contract.
//!
//! Raw command-line values are validated into typed flags
//! ([`validation`]), turned into a [`DealRequest`] ([`builder`]) and sent
//! to the contract through a [`DealGateway`] ([`contract`]).

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contract;
pub mod error;
pub mod types;
pub mod validation;

pub use commands::{execute, run_create, run_status, CommandOutput, OutputFormat};
pub use config::{DealDefaults, Settings};
pub use contract::{DealGateway, EthConnector, EthDealGateway, GatewayConnector};
pub use error::{DealError, Result};
pub use types::{
    CreateFlags, DealRequest, DealSigner, ExtraParams, ExtraParamsV1, PieceStatus, StatusFlags,
};
