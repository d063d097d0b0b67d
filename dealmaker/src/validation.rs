//! Input validation for `create` and `status`.
//!
//! Everything here is pure: raw strings in, typed values or a [`DealError`]
//! out. Nothing touches the network.

use crate::cli::{CreateArgs, StatusArgs};
use crate::config::Settings;
use crate::error::{DealError, Result};
use crate::types::{CreateFlags, DealSigner, StatusFlags};
use cid::Cid;
use ethers::core::k256::ecdsa::SigningKey;
use ethers::types::Address;
use ethers::utils::to_checksum;
use url::Url;
use zeroize::Zeroizing;

/// Length of a secp256k1 private key in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// Parse an absolute URL
pub fn parse_url(field: &'static str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| DealError::parse(field, e))
}

/// Validate an EVM-style address: `0x`, 40 hex digits and, when the input
/// mixes upper and lower case, a matching EIP-55 checksum.
pub fn parse_address(raw: &str) -> Result<Address> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| DealError::invalid_address(raw, "address must start with '0x'"))?;

    if digits.len() != 40 {
        return Err(DealError::invalid_address(
            raw,
            "address must be 42 characters long (including '0x')",
        ));
    }

    if !is_valid_hex(digits) {
        return Err(DealError::invalid_address(
            raw,
            "address contains invalid hex characters",
        ));
    }

    let bytes = hex::decode(digits).map_err(|e| DealError::invalid_address(raw, e))?;
    let address = Address::from_slice(&bytes);

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&address, None) != raw {
        return Err(DealError::invalid_address(raw, "checksum mismatch"));
    }

    Ok(address)
}

/// Decode a CID in any supported multibase
pub fn parse_cid(field: &'static str, raw: &str) -> Result<Cid> {
    Cid::try_from(raw).map_err(|e| DealError::parse(field, e))
}

/// Decode a hex private key, with or without a `0x` prefix.
pub fn parse_private_key(raw: &str) -> Result<DealSigner> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);

    if digits.len() != PRIVATE_KEY_LEN * 2 {
        return Err(DealError::KeyDecode(format!(
            "expected {} hex characters, got {}",
            PRIVATE_KEY_LEN * 2,
            digits.len()
        )));
    }

    let bytes = Zeroizing::new(
        hex::decode(digits).map_err(|e| DealError::KeyDecode(e.to_string()))?,
    );
    let key = SigningKey::from_slice(&bytes)
        .map_err(|_| DealError::KeyDecode("not a valid secp256k1 scalar".to_string()))?;

    Ok(DealSigner::new(key))
}

/// Validate every `create` input. Network values fall back to `settings`.
pub fn validate_create(args: &CreateArgs, settings: &Settings) -> Result<CreateFlags> {
    let rpc_endpoint = parse_url(
        "rpc-endpoint",
        required(
            "rpc-endpoint",
            args.rpc_endpoint.as_deref().or(settings.rpc_endpoint.as_deref()),
        )?,
    )?;
    let contract = parse_address(required(
        "contract",
        args.contract.as_deref().or(settings.contract.as_deref()),
    )?)?;
    let piece_cid = parse_cid("piece-cid", required("piece-cid", args.piece_cid.as_deref())?)?;
    let payload_cid = parse_cid(
        "payload-cid",
        required("payload-cid", args.payload_cid.as_deref())?,
    )?;
    let location_ref = required("location-ref", args.location_ref.as_deref())?;
    parse_url("location-ref", location_ref)?;
    let signer = parse_private_key(required("private-key", args.private_key.as_deref())?)?;
    let chain_id = args
        .chain_id
        .or(settings.chain_id)
        .ok_or(DealError::MissingArgument("chain-id"))?;

    Ok(CreateFlags {
        rpc_endpoint,
        contract,
        piece_cid,
        piece_size: args.piece_size,
        verified: args.verified,
        payload_cid,
        start_epoch: args.start_epoch,
        end_epoch: args.end_epoch,
        location_ref: location_ref.to_string(),
        car_size: args.car_size,
        signer,
        chain_id,
    })
}

/// Validate every `status` input. Network values fall back to `settings`.
pub fn validate_status(args: &StatusArgs, settings: &Settings) -> Result<StatusFlags> {
    let rpc_endpoint = parse_url(
        "rpc-endpoint",
        required(
            "rpc-endpoint",
            args.rpc_endpoint.as_deref().or(settings.rpc_endpoint.as_deref()),
        )?,
    )?;
    let contract = parse_address(required(
        "contract",
        args.contract.as_deref().or(settings.contract.as_deref()),
    )?)?;
    let piece_cid = parse_cid("piece-cid", required("piece-cid", args.piece_cid.as_deref())?)?;

    Ok(StatusFlags {
        rpc_endpoint,
        contract,
        piece_cid,
    })
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or(DealError::MissingArgument(field))
}

/// Check if string is valid hex
fn is_valid_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}
