use anchor_lang::prelude::*;

use crate::{
    constants::SETTINGS_SEED, errors::TradegateError, events::TradingStatusChanged,
    state::Settings,
};

/// Enable or disable the trading gate
/// Requires the recorded admin to sign
#[derive(Accounts)]
pub struct SetTrading<'info> {
    /// The Settings account holding the trading gate
    /// # PDA Seeds
    /// - `SETTINGS_SEED`
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.is_admin(&owner.key()) @ TradegateError::Unauthorized,
    )]
    pub settings: Account<'info, Settings>,

    /// The admin authorizing the change
    pub owner: Signer<'info>,
}

impl<'info> SetTrading<'info> {
    /// Overwrite the trading gate; no other state changes
    /// # Arguments
    /// * `enabled` - The new state of the gate
    /// # Returns
    /// * `Result<()>` - Ok if the gate is successfully set, Err otherwise
    pub fn set_trading(&mut self, enabled: bool) -> Result<()> {
        self.settings.trading_enabled = enabled;

        emit!(TradingStatusChanged {
            enabled,
            authority: self.owner.key(),
        });

        Ok(())
    }
}
