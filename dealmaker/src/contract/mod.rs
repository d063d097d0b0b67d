//! Gateway to the deal client contract.
//!
//! All deal state lives on-chain; the gateway holds nothing beyond the
//! connection it was created with and never retries a failed call.

pub mod abi;
pub mod ethereum;

use crate::error::Result;
use crate::types::{DealRequest, DealSigner, PieceStatus};
use async_trait::async_trait;
use ethers::types::{Address, TxHash};
use url::Url;

pub use ethereum::{EthConnector, EthDealGateway};

#[async_trait]
pub trait DealGateway: Send + Sync {
    /// Sign and submit `makeDealProposal`. Returns once the node has accepted
    /// the transaction; inclusion is not awaited.
    async fn propose_deal(
        &self,
        signer: &DealSigner,
        chain_id: u64,
        request: &DealRequest,
    ) -> Result<TxHash>;

    /// Read-only `pieceStatus` call
    async fn piece_status(&self, piece_cid: &[u8]) -> Result<PieceStatus>;
}

/// Opens a gateway for a contract behind an RPC endpoint.
pub trait GatewayConnector {
    type Gateway: DealGateway;

    fn connect(&self, endpoint: &Url, contract: Address) -> Result<Self::Gateway>;
}
