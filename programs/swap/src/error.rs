use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    #[msg("Token mints must be different")]
    SameTokenMints,
    #[msg("Offered amount must be greater than zero")]
    ZeroOfferedAmount,
    #[msg("Wanted amount must be greater than zero")]
    ZeroWantedAmount,
    #[msg("Maker does not hold enough of the offered token")]
    InsufficientMakerBalance,
    #[msg("Taker does not hold enough of the wanted token")]
    InsufficientTakerBalance,
    #[msg("Failed to withdraw tokens from the vault")]
    FailedVaultWithdrawal,
    #[msg("Failed to close the vault")]
    FailedVaultClosure,
}
