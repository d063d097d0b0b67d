//! Deal client gateway over an Ethereum-compatible JSON-RPC endpoint using ethers-rs

use super::{abi, DealGateway, GatewayConnector};
use crate::error::{DealError, Result};
use crate::types::{DealRequest, DealSigner, PieceStatus};
use async_trait::async_trait;
use ethers::middleware::signer::SignerMiddlewareError;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider, ProviderError, RpcError};
use ethers::signers::LocalWallet;
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Eip1559TransactionRequest, TransactionRequest, TxHash};
use log::{debug, info};
use url::Url;

/// Deal client contract reached through an ethers provider
#[derive(Debug, Clone)]
pub struct EthDealGateway<P = Http> {
    provider: Provider<P>,
    /// Deal client contract address
    contract: Address,
}

impl EthDealGateway<Http> {
    /// Create an HTTP-backed gateway. No request is sent until the first call.
    pub fn connect(endpoint: &Url, contract: Address) -> Result<Self> {
        let provider = Provider::<Http>::try_from(endpoint.as_str())
            .map_err(|e| DealError::parse("rpc-endpoint", e))?;
        Ok(Self::new(provider, contract))
    }
}

impl<P: JsonRpcClient> EthDealGateway<P> {
    pub fn new(provider: Provider<P>, contract: Address) -> Self {
        Self { provider, contract }
    }

    pub fn contract(&self) -> Address {
        self.contract
    }
}

#[async_trait]
impl<P> DealGateway for EthDealGateway<P>
where
    P: JsonRpcClient + Clone + 'static,
{
    async fn propose_deal(
        &self,
        signer: &DealSigner,
        chain_id: u64,
        request: &DealRequest,
    ) -> Result<TxHash> {
        let client = SignerMiddleware::new(self.provider.clone(), signer.wallet(chain_id));
        let tx = Eip1559TransactionRequest::new()
            .to(self.contract)
            .data(abi::encode_make_deal_proposal(request));

        debug!(
            "Submitting makeDealProposal to {:?} from {:?} (chain {})",
            self.contract,
            signer.address(),
            chain_id
        );

        let pending = client
            .send_transaction(tx, None)
            .await
            .map_err(submission_error::<P>)?;

        let tx_hash = pending.tx_hash();
        info!("Deal proposal transaction sent: {:#x}", tx_hash);
        Ok(tx_hash)
    }

    async fn piece_status(&self, piece_cid: &[u8]) -> Result<PieceStatus> {
        let tx: TypedTransaction = TransactionRequest::new()
            .to(self.contract)
            .data(abi::encode_piece_status(piece_cid))
            .into();

        debug!("Calling pieceStatus on {:?}", self.contract);

        let output = self
            .provider
            .call(&tx, None)
            .await
            .map_err(|e| classify(e, DealError::CallReverted))?;

        abi::decode_piece_status(&output)
    }
}

/// Connects [`EthDealGateway`]s over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct EthConnector;

impl GatewayConnector for EthConnector {
    type Gateway = EthDealGateway<Http>;

    fn connect(&self, endpoint: &Url, contract: Address) -> Result<Self::Gateway> {
        debug!("Using RPC endpoint {} for contract {:?}", endpoint, contract);
        EthDealGateway::connect(endpoint, contract)
    }
}

fn submission_error<P: JsonRpcClient>(
    err: SignerMiddlewareError<Provider<P>, LocalWallet>,
) -> DealError {
    match err {
        SignerMiddlewareError::MiddlewareError(inner) => classify(inner, DealError::Submission),
        other => DealError::Submission(other.to_string()),
    }
}

/// A JSON-RPC error response means the node answered and refused; a client
/// error without one means the request never got an answer.
fn classify(err: ProviderError, rejected: fn(String) -> DealError) -> DealError {
    if let Some(response) = err.as_error_response() {
        return rejected(format!("{} (code {})", response.message, response.code));
    }

    match err {
        ProviderError::JsonRpcClientError(inner) => DealError::Transport(inner.to_string()),
        other => rejected(other.to_string()),
    }
}
