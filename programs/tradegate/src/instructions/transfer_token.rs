use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    constants::{MINT_SEED, SETTINGS_SEED},
    errors::TradegateError,
    events::TokensTransferred,
    state::Settings,
    utils::balance_after_debit,
};

/// Move tokens between two accounts of the program's mint
/// Non-admin authorities are rejected while the trading gate is closed
#[derive(Accounts)]
pub struct TransferToken<'info> {
    /// The token mint PDA
    /// # PDA Seeds
    /// - `MINT_SEED`
    #[account(
        seeds = [MINT_SEED],
        bump,
        mint::authority = mint,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The source token account
    #[account(mut)]
    pub from: InterfaceAccount<'info, TokenAccount>,

    /// The destination token account
    #[account(mut)]
    pub to: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the source account
    pub authority: Signer<'info>,

    /// The Settings account holding the trading gate
    /// # PDA Seeds
    /// - `SETTINGS_SEED`
    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> TransferToken<'info> {
    /// Transfer tokens from `from` to `to`; total supply is unchanged
    /// # Arguments
    /// * `amount` - The amount to transfer in minor units (must be greater than 0)
    /// # Returns
    /// * `Result<()>` - Ok if the transfer succeeds, Err otherwise
    pub fn transfer_token(&mut self, amount: u64) -> Result<()> {
        // Validate amount is greater than 0
        require_gt!(amount, 0, TradegateError::InvalidAmount);

        // The admin may seed liquidity before launch; everyone else
        // waits for the trading gate
        require!(
            self.settings.may_transfer(&self.authority.key()),
            TradegateError::TradingDisabled
        );

        // Both accounts must hold this program's token
        require_keys_eq!(
            self.from.mint,
            self.mint.key(),
            TradegateError::MintMismatch
        );
        require_keys_eq!(self.to.mint, self.mint.key(), TradegateError::MintMismatch);

        // Only the source owner can move its balance
        require_keys_eq!(
            self.from.owner,
            self.authority.key(),
            TradegateError::Unauthorized
        );

        balance_after_debit(self.from.amount, amount)?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.from.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.to.to_account_info(),
                    authority: self.authority.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )?;

        emit!(TokensTransferred {
            from: self.from.key(),
            to: self.to.key(),
            amount,
            authority: self.authority.key(),
        });

        Ok(())
    }
}
