use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Please connect your wallet")]
    WalletNotConnected,
    #[error("Offer id is missing")]
    MissingOfferId,
    #[error("Could not read wallet keypair from {path}: {reason}")]
    WalletLoad { path: String, reason: String },
    #[error("{field} is not a valid address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("{field} must be a finite, non-negative amount")]
    InvalidAmount { field: &'static str },
    #[error("{field} is too large")]
    AmountOverflow { field: &'static str },
    #[error("{field} is not a valid offer id: {value:?}")]
    InvalidOfferId { field: &'static str, value: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SwapError {
    /// Errors raised before anything is sent. These are shown as a blocking
    /// alert, everything else as an error notification.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, SwapError::Transport(_))
    }
}
