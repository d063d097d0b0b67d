// Shared fixtures for the command-flow tests

#![allow(dead_code)]

use async_trait::async_trait;
use cid::multihash::Multihash;
use cid::Cid;
use dealmaker::cli::{CreateArgs, StatusArgs};
use dealmaker::{DealGateway, DealRequest, DealSigner, GatewayConnector, PieceStatus, Result};
use ethers::types::{Address, TxHash, H256};
use std::sync::{Arc, Mutex};
use url::Url;

pub const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const CONTRACT: &str = "0x0000000000000000000000000000000000000001";

pub fn test_cid(seed: u8) -> Cid {
    let digest = Multihash::<64>::wrap(0x12, &[seed; 32]).unwrap();
    Cid::new_v1(0x55, digest)
}

pub fn create_args() -> CreateArgs {
    CreateArgs {
        rpc_endpoint: Some("http://localhost:8545".into()),
        contract: Some(CONTRACT.into()),
        piece_cid: Some(test_cid(1).to_string()),
        piece_size: 1024,
        verified: false,
        payload_cid: Some(test_cid(2).to_string()),
        start_epoch: 100,
        end_epoch: 200,
        location_ref: Some("http://example.com/f.car".into()),
        car_size: 2048,
        private_key: Some(TEST_KEY.into()),
        chain_id: Some(314),
        dry_run: false,
    }
}

pub fn status_args() -> StatusArgs {
    StatusArgs {
        rpc_endpoint: Some("http://localhost:8545".into()),
        contract: Some(CONTRACT.into()),
        piece_cid: Some(test_cid(1).to_string()),
    }
}

/// Everything the mock gateway was asked to do
#[derive(Debug, Default)]
pub struct Recorded {
    pub dials: Vec<(Url, Address)>,
    pub proposals: Vec<(Address, u64, DealRequest)>,
    pub status_queries: Vec<Vec<u8>>,
}

#[derive(Clone)]
pub struct MockConnector {
    pub recorded: Arc<Mutex<Recorded>>,
    pub status: PieceStatus,
    pub tx_hash: TxHash,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Recorded::default())),
            status: PieceStatus::DealPublished,
            tx_hash: H256::repeat_byte(0x42),
        }
    }

    pub fn dials(&self) -> usize {
        self.recorded.lock().unwrap().dials.len()
    }
}

pub struct MockGateway {
    recorded: Arc<Mutex<Recorded>>,
    status: PieceStatus,
    tx_hash: TxHash,
}

impl GatewayConnector for MockConnector {
    type Gateway = MockGateway;

    fn connect(&self, endpoint: &Url, contract: Address) -> Result<MockGateway> {
        self.recorded
            .lock()
            .unwrap()
            .dials
            .push((endpoint.clone(), contract));
        Ok(MockGateway {
            recorded: self.recorded.clone(),
            status: self.status,
            tx_hash: self.tx_hash,
        })
    }
}

#[async_trait]
impl DealGateway for MockGateway {
    async fn propose_deal(
        &self,
        signer: &DealSigner,
        chain_id: u64,
        request: &DealRequest,
    ) -> Result<TxHash> {
        self.recorded
            .lock()
            .unwrap()
            .proposals
            .push((signer.address(), chain_id, request.clone()));
        Ok(self.tx_hash)
    }

    async fn piece_status(&self, piece_cid: &[u8]) -> Result<PieceStatus> {
        self.recorded
            .lock()
            .unwrap()
            .status_queries
            .push(piece_cid.to_vec());
        Ok(self.status)
    }
}
