use anchor_lang::prelude::*;

#[error_code]
pub enum TradegateError {
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Program has already been initialized")]
    AlreadyInitialized,
    #[msg("Trading is not enabled")]
    TradingDisabled,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Invalid mint for this operation")]
    InvalidMint,
    #[msg("Token account does not belong to the expected mint")]
    MintMismatch,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Metadata field too long")]
    MetadataFieldTooLong,
    #[msg("Account not found")]
    AccountNotFound,
}
