//! Assembly of the [`DealRequest`] submitted to the deal client contract

use crate::config::DealDefaults;
use crate::types::{CreateFlags, DealRequest, ExtraParams, ExtraParamsV1};
use ethers::types::Bytes;

/// Build the proposal for validated `create` inputs.
///
/// Epochs and sizes are passed through as given. Sizes are reinterpreted
/// at the contract's `uint64` width, so a negative size wraps rather than
/// being rejected here.
pub fn build_deal_request(flags: &CreateFlags, defaults: &DealDefaults) -> DealRequest {
    DealRequest {
        piece_cid: Bytes::from(flags.piece_cid.to_bytes()),
        piece_size: flags.piece_size as u64,
        verified_deal: flags.verified,
        label: flags.payload_cid.to_string(),
        start_epoch: flags.start_epoch,
        end_epoch: flags.end_epoch,
        storage_price_per_epoch: defaults.storage_price_per_epoch,
        provider_collateral: defaults.provider_collateral,
        client_collateral: defaults.client_collateral,
        extra_params: ExtraParams::V1(ExtraParamsV1 {
            location_ref: flags.location_ref.clone(),
            car_size: flags.car_size as u64,
            skip_ipni_announce: defaults.skip_ipni_announce,
            remove_unsealed_copy: defaults.remove_unsealed_copy,
        }),
    }
}
