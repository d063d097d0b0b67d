//! ABI encoding for the deal client contract.
//!
//! ```solidity
//! struct ExtraParamsV1 {
//!     string location_ref; uint64 car_size;
//!     bool skip_ipni_announce; bool remove_unsealed_copy;
//! }
//! struct DealRequest {
//!     bytes piece_cid; uint64 piece_size; bool verified_deal; string label;
//!     int64 start_epoch; int64 end_epoch;
//!     uint256 storage_price_per_epoch; uint256 provider_collateral; uint256 client_collateral;
//!     uint64 extra_params_version; ExtraParamsV1 extra_params;
//! }
//! function makeDealProposal(DealRequest calldata deal) public returns (bytes32);
//! function pieceStatus(bytes calldata) public view returns (uint8);
//! ```

use crate::error::{DealError, Result};
use crate::types::{DealRequest, ExtraParams, PieceStatus};
use ethers::abi::{self, ParamType, Token};
use ethers::types::{Bytes, I256, U256};
use ethers::utils::id;

pub const MAKE_DEAL_PROPOSAL: &str = concat!(
    "makeDealProposal((bytes,uint64,bool,string,int64,int64,",
    "uint256,uint256,uint256,uint64,(string,uint64,bool,bool)))"
);
pub const PIECE_STATUS: &str = "pieceStatus(bytes)";

fn extra_params_token(params: &ExtraParams) -> Token {
    match params {
        ExtraParams::V1(v1) => Token::Tuple(vec![
            Token::String(v1.location_ref.clone()),
            Token::Uint(U256::from(v1.car_size)),
            Token::Bool(v1.skip_ipni_announce),
            Token::Bool(v1.remove_unsealed_copy),
        ]),
    }
}

/// Tuple token matching the `DealRequest` struct layout
pub fn deal_request_token(request: &DealRequest) -> Token {
    Token::Tuple(vec![
        Token::Bytes(request.piece_cid.to_vec()),
        Token::Uint(U256::from(request.piece_size)),
        Token::Bool(request.verified_deal),
        Token::String(request.label.clone()),
        Token::Int(I256::from(request.start_epoch).into_raw()),
        Token::Int(I256::from(request.end_epoch).into_raw()),
        Token::Uint(request.storage_price_per_epoch),
        Token::Uint(request.provider_collateral),
        Token::Uint(request.client_collateral),
        Token::Uint(U256::from(request.extra_params_version())),
        extra_params_token(&request.extra_params),
    ])
}

/// Calldata for `makeDealProposal(request)`
pub fn encode_make_deal_proposal(request: &DealRequest) -> Bytes {
    let mut data = id(MAKE_DEAL_PROPOSAL).to_vec();
    data.extend(abi::encode(&[deal_request_token(request)]));
    data.into()
}

/// Calldata for `pieceStatus(piece_cid)`
pub fn encode_piece_status(piece_cid: &[u8]) -> Bytes {
    let mut data = id(PIECE_STATUS).to_vec();
    data.extend(abi::encode(&[Token::Bytes(piece_cid.to_vec())]));
    data.into()
}

/// Decode the `uint8` returned by `pieceStatus`
pub fn decode_piece_status(output: &[u8]) -> Result<PieceStatus> {
    if output.is_empty() {
        return Err(DealError::CallReverted(
            "empty return data (is a deal client deployed at this address?)".to_string(),
        ));
    }

    let tokens = abi::decode(&[ParamType::Uint(8)], output)
        .map_err(|e| DealError::CallReverted(format!("undecodable return data: {}", e)))?;

    match tokens.as_slice() {
        [Token::Uint(code)] if *code <= U256::from(u8::MAX) => {
            Ok(PieceStatus::from(code.low_u32() as u8))
        }
        other => Err(DealError::CallReverted(format!(
            "unexpected return value {:?}",
            other
        ))),
    }
}
