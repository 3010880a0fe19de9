use anchor_lang::prelude::*;

/// Event emitted when the program is initialized
/// Fields:
/// - mint: The public key of the newly created token mint
/// - admin: The public key recorded as the administrator
#[event]
pub struct TokenInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
}

/// Event emitted when new tokens are minted
/// Fields:
/// - mint: The public key of the token mint
/// - destination: The token account credited with the minted tokens
/// - amount: The amount minted in minor units
/// - authority: The admin who authorized the mint
#[event]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub authority: Pubkey,
}

/// Event emitted when tokens are burned
/// Fields:
/// - mint: The public key of the token mint
/// - from: The token account debited by the burn
/// - amount: The amount burned in minor units
/// - authority: The admin who authorized the burn
#[event]
pub struct TokensBurned {
    pub mint: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub authority: Pubkey,
}

/// Event emitted when the trading gate is opened or closed
/// Fields:
/// - enabled: The new state of the trading gate
/// - authority: The admin who flipped the gate
#[event]
pub struct TradingStatusChanged {
    pub enabled: bool,
    pub authority: Pubkey,
}

/// Event emitted when tokens move between holder accounts
/// Fields:
/// - from: The source token account
/// - to: The destination token account
/// - amount: The amount transferred in minor units
/// - authority: The owner of the source account
#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub authority: Pubkey,
}

/// Event emitted when stuck foreign assets are recovered
/// Fields:
/// - stuck_mint: The mint of the recovered asset (or the native pseudo-mint)
/// - to: The account receiving the recovered assets
/// - amount: The amount recovered
/// - authority: The admin who executed the recovery
#[event]
pub struct StuckTokensClaimed {
    pub stuck_mint: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub authority: Pubkey,
}
