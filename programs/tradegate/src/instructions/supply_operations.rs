use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{burn_checked, mint_to, BurnChecked, MintTo},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{MINT_SEED, SETTINGS_SEED},
    errors::TradegateError,
    events::{TokensBurned, TokensMinted},
    state::Settings,
    utils::{balance_after_debit, supply_after_mint},
};

/// Mint new tokens to the admin's associated token account
/// Requires the recorded admin to sign
#[derive(Accounts)]
pub struct MintTokens<'info> {
    /// The token mint PDA, its own keyless authority
    /// # PDA Seeds
    /// - `MINT_SEED`
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        mint::authority = mint,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The destination token account, created on first mint to this owner
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// The admin funding and authorizing the mint
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Settings account recording the admin identity
    /// # PDA Seeds
    /// - `SETTINGS_SEED`
    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.is_admin(&payer.key()) @ TradegateError::Unauthorized,
    )]
    pub settings: Account<'info, Settings>,

    /// The rent sysvar
    pub rent: Sysvar<'info, Rent>,
    /// The system program
    pub system_program: Program<'info, System>,
    /// The token program
    pub token_program: Interface<'info, TokenInterface>,
    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> MintTokens<'info> {
    /// Mint tokens to the destination account
    /// # Arguments
    /// * `amount` - The amount to mint in minor units (must be greater than 0)
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if tokens are successfully minted, Err otherwise
    pub fn mint_tokens(&mut self, amount: u64, bumps: &MintTokensBumps) -> Result<()> {
        // Validate amount is greater than 0
        require_gt!(amount, 0, TradegateError::InvalidAmount);

        // Reject before the CPI so supply can never wrap
        supply_after_mint(self.mint.supply, amount)?;

        // Mint to the destination account, the mint PDA signing for itself
        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.mint.to_account_info(),
                },
                &[&[MINT_SEED, &[bumps.mint]]],
            ),
            amount,
        )?;

        emit!(TokensMinted {
            mint: self.mint.key(),
            destination: self.destination.key(),
            amount,
            authority: self.payer.key(),
        });

        Ok(())
    }
}

/// Burn tokens from the admin's associated token account
/// Requires the recorded admin to sign
#[derive(Accounts)]
pub struct BurnTokens<'info> {
    /// The token mint PDA
    /// # PDA Seeds
    /// - `MINT_SEED`
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        mint::authority = mint,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token account to burn from, created if absent so a fresh
    /// admin account simply fails the balance check
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
    )]
    pub from: InterfaceAccount<'info, TokenAccount>,

    /// The admin authorizing the burn, owner of `from`
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Settings account recording the admin identity
    /// # PDA Seeds
    /// - `SETTINGS_SEED`
    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.is_admin(&payer.key()) @ TradegateError::Unauthorized,
    )]
    pub settings: Account<'info, Settings>,

    /// The rent sysvar
    pub rent: Sysvar<'info, Rent>,
    /// The system program
    pub system_program: Program<'info, System>,
    /// The token program
    pub token_program: Interface<'info, TokenInterface>,
    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> BurnTokens<'info> {
    /// Burn tokens from the source account, reducing supply by the same amount
    /// # Arguments
    /// * `amount` - The amount to burn in minor units (must be greater than 0)
    /// # Returns
    /// * `Result<()>` - Ok if tokens are successfully burned, Err otherwise
    pub fn burn_tokens(&mut self, amount: u64) -> Result<()> {
        // Validate amount is greater than 0
        require_gt!(amount, 0, TradegateError::InvalidAmount);

        // Reject before the CPI so the failure surfaces as InsufficientBalance
        balance_after_debit(self.from.amount, amount)?;

        // Burn from the source account, authorized by its owner
        burn_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                BurnChecked {
                    mint: self.mint.to_account_info(),
                    from: self.from.to_account_info(),
                    authority: self.payer.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )?;

        emit!(TokensBurned {
            mint: self.mint.key(),
            from: self.from.key(),
            amount,
            authority: self.payer.key(),
        });

        Ok(())
    }
}
