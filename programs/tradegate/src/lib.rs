#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;

#[cfg(feature = "devnet")]
declare_id!("B7KtJPh19zrdfYHQQ8p5XTe4SAvofR4CptQHhuj9gKXn");
#[cfg(feature = "testnet")]
declare_id!("Ca7r97XHBocrbGT2BzcEQFprsRKgjNkvPPKbzBHD9sxP");
#[cfg(feature = "mainnet")]
declare_id!("EgnKhPe4Eo8AqSerCV7hq62kw9HhL4AtVy9HimV58X6w");
#[cfg(not(any(feature = "mainnet", feature = "devnet", feature = "testnet")))]
declare_id!("36NEvTmWT6c9Kc7ahsrHvT5ednznh4odAj59LobcXY1S");

#[program]
pub mod tradegate {
    use super::*;

    /// Create the mint, Settings, and metadata records
    ///
    /// Runs exactly once: the mint and Settings live at deterministic
    /// addresses, the payer becomes the recorded admin, and trading starts
    /// disabled.
    pub fn initialize(ctx: Context<InitializeToken>, descriptor: TokenDescriptor) -> Result<()> {
        ctx.accounts.initialize(descriptor, &ctx.bumps)
    }

    /// Mint new tokens to the admin's associated token account
    /// Signer must be the recorded admin
    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        ctx.accounts.mint_tokens(amount, &ctx.bumps)
    }

    /// Burn tokens from the admin's associated token account
    /// Signer must be the recorded admin
    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        ctx.accounts.burn_tokens(amount)
    }

    /// Enable or disable the trading gate
    /// Signer must be the recorded admin
    pub fn set_trading(ctx: Context<SetTrading>, enabled: bool) -> Result<()> {
        ctx.accounts.set_trading(enabled)
    }

    /// Transfer tokens between accounts of the program's mint
    ///
    /// Blocked with TradingDisabled for non-admin authorities until the
    /// admin opens the trading gate.
    pub fn transfer_token(ctx: Context<TransferToken>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_token(amount)
    }

    /// Recover assets of a foreign mint accidentally held by program accounts
    ///
    /// Signer must be the recorded admin; the program's own mint cannot be
    /// claimed through this path.
    pub fn claim_stuck_tokens(ctx: Context<ClaimStuckTokens>, amount: u64) -> Result<()> {
        ctx.accounts.claim_stuck_tokens(amount, &ctx.bumps)
    }
}
