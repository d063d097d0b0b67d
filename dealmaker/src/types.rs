//! Domain types shared by validation, request building and the contract gateway

use cid::Cid;
use ethers::core::k256::ecdsa::SigningKey;
use ethers::signers::LocalWallet;
use ethers::types::{Address, Bytes, U256};
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Versioned extra parameters attached to a deal proposal.
///
/// The version tag sent to the contract is derived from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraParams {
    V1(ExtraParamsV1),
}

impl ExtraParams {
    pub fn version(&self) -> u64 {
        match self {
            ExtraParams::V1(_) => 1,
        }
    }
}

/// Serialized flat, with the version as an integer `extra_params_version` field.
impl Serialize for ExtraParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Versioned<'a, T> {
            extra_params_version: u64,
            #[serde(flatten)]
            params: &'a T,
        }

        match self {
            ExtraParams::V1(params) => Versioned {
                extra_params_version: self.version(),
                params,
            }
            .serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraParamsV1 {
    /// Where the CAR file can be downloaded
    pub location_ref: String,
    pub car_size: u64,
    pub skip_ipni_announce: bool,
    pub remove_unsealed_copy: bool,
}

/// The value passed to `makeDealProposal` on the deal client contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealRequest {
    pub piece_cid: Bytes,
    pub piece_size: u64,
    pub verified_deal: bool,
    /// Payload CID in its canonical string form
    pub label: String,
    pub start_epoch: i64,
    pub end_epoch: i64,
    pub storage_price_per_epoch: U256,
    pub provider_collateral: U256,
    pub client_collateral: U256,
    pub extra_params: ExtraParams,
}

impl DealRequest {
    pub fn extra_params_version(&self) -> u64 {
        self.extra_params.version()
    }
}

/// secp256k1 key used to sign exactly one proposal.
#[derive(Clone)]
pub struct DealSigner {
    key: SigningKey,
}

impl DealSigner {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    /// Account the key signs for
    pub fn address(&self) -> Address {
        ethers::utils::secret_key_to_address(&self.key)
    }

    /// Wallet bound to `chain_id` for EIP-155 replay protection
    pub fn wallet(&self, chain_id: u64) -> LocalWallet {
        use ethers::signers::Signer;
        LocalWallet::from(self.key.clone()).with_chain_id(chain_id)
    }
}

impl fmt::Debug for DealSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DealSigner")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Validated inputs for `create`.
#[derive(Debug, Clone)]
pub struct CreateFlags {
    pub rpc_endpoint: Url,
    pub contract: Address,
    pub piece_cid: Cid,
    pub piece_size: i64,
    pub verified: bool,
    pub payload_cid: Cid,
    pub start_epoch: i64,
    pub end_epoch: i64,
    /// Checked to be an absolute URL, kept exactly as given
    pub location_ref: String,
    pub car_size: i64,
    pub signer: DealSigner,
    pub chain_id: i64,
}

/// Validated inputs for `status`.
#[derive(Debug, Clone)]
pub struct StatusFlags {
    pub rpc_endpoint: Url,
    pub contract: Address,
    pub piece_cid: Cid,
}

/// Lifecycle of a piece as tracked by the deal client contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceStatus {
    /// The contract has no deal for this piece
    None,
    RequestSubmitted,
    DealPublished,
    DealActivated,
    DealTerminated,
    Unknown(u8),
}

impl PieceStatus {
    pub fn code(&self) -> u8 {
        match self {
            PieceStatus::None => 0,
            PieceStatus::RequestSubmitted => 1,
            PieceStatus::DealPublished => 2,
            PieceStatus::DealActivated => 3,
            PieceStatus::DealTerminated => 4,
            PieceStatus::Unknown(code) => *code,
        }
    }
}

impl From<u8> for PieceStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => PieceStatus::None,
            1 => PieceStatus::RequestSubmitted,
            2 => PieceStatus::DealPublished,
            3 => PieceStatus::DealActivated,
            4 => PieceStatus::DealTerminated,
            other => PieceStatus::Unknown(other),
        }
    }
}

impl fmt::Display for PieceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceStatus::None => "None",
            PieceStatus::RequestSubmitted => "RequestSubmitted",
            PieceStatus::DealPublished => "DealPublished",
            PieceStatus::DealActivated => "DealActivated",
            PieceStatus::DealTerminated => "DealTerminated",
            PieceStatus::Unknown(_) => "Unknown",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
