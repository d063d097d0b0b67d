//! Error types for deal creation and status queries

/// Every way a `create` or `status` invocation can fail.
#[derive(Debug, thiserror::Error)]
pub enum DealError {
    #[error("Invalid {field}: {reason}")]
    Parse { field: &'static str, reason: String },

    #[error("Missing required argument --{0}")]
    MissingArgument(&'static str),

    #[error("Contract {value:?} is not an ETH address: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Invalid private key: {0}")]
    KeyDecode(String),

    #[error("RPC transport error: {0}")]
    Transport(String),

    #[error("Transaction rejected: {0}")]
    Submission(String),

    #[error("Contract call reverted: {0}")]
    CallReverted(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DealError {
    pub(crate) fn parse(field: &'static str, reason: impl ToString) -> Self {
        DealError::Parse {
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_address(value: &str, reason: impl ToString) -> Self {
        DealError::InvalidAddress {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for failures detected before anything was sent to the chain.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DealError::Parse { .. }
                | DealError::MissingArgument(_)
                | DealError::InvalidAddress { .. }
                | DealError::KeyDecode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DealError>;
