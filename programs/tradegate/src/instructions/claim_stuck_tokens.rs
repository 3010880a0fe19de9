use anchor_lang::{
    prelude::*,
    solana_program::{
        program::{invoke, invoke_signed},
        system_instruction,
    },
};
use anchor_spl::{
    associated_token::{self, AssociatedToken, Create},
    token_interface::{Mint, TokenInterface},
};
use spl_token_2022::{
    extension::StateWithExtensions,
    state::{Account as TokenAccountState, Mint as MintState},
};

use crate::{
    constants::{MINT_SEED, NATIVE_SOL_MINT, SETTINGS_SEED},
    errors::TradegateError,
    events::StuckTokensClaimed,
    state::Settings,
    utils::balance_after_debit,
};

/// Recover assets of a foreign mint (or native SOL) stuck in accounts
/// associated with this program's mint
/// Requires the recorded admin to sign
#[derive(Accounts)]
pub struct ClaimStuckTokens<'info> {
    /// The program's own mint PDA; claims against it are rejected
    /// # PDA Seeds
    /// - `MINT_SEED`
    #[account(
        seeds = [MINT_SEED],
        bump,
        mint::authority = mint,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The mint of the stuck asset
    ///
    /// CHECK: The native pseudo-mint address selects the lamport path and has
    /// no account behind it; the SPL path unpacks and validates the data
    pub stuck_token_mint: UncheckedAccount<'info>,

    /// The account lamports are recovered from on the native path
    ///
    /// CHECK: Must co-sign the transaction for the system transfer to succeed
    #[account(mut)]
    pub from: UncheckedAccount<'info>,

    /// The destination for recovered lamports, or the owner of the
    /// destination token account on the SPL path
    ///
    /// CHECK: Designated by the admin
    #[account(mut)]
    pub to: UncheckedAccount<'info>,

    /// The token account holding the stuck asset, owned by the mint PDA
    ///
    /// CHECK: Unpacked and validated in the handler on the SPL path
    #[account(mut)]
    pub from_ata: UncheckedAccount<'info>,

    /// The destination token account for the stuck asset, created if absent
    ///
    /// CHECK: Created as the associated token account of `to` when empty,
    /// otherwise unpacked and validated in the handler
    #[account(mut)]
    pub to_ata: UncheckedAccount<'info>,

    /// The admin authorizing and funding the recovery
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

    /// The token program owning the stuck asset's accounts
    pub token_program: Interface<'info, TokenInterface>,
    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimStuckTokens<'info> {
    /// Transfer `amount` of the stuck asset to the admin-designated destination
    /// # Arguments
    /// * `amount` - The amount to recover (must be greater than 0)
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the recovery succeeds, Err otherwise
    pub fn claim_stuck_tokens(&mut self, amount: u64, bumps: &ClaimStuckTokensBumps) -> Result<()> {
        // Validate amount is greater than 0
        require_gt!(amount, 0, TradegateError::InvalidAmount);

        // The recovery path must never touch the program's own token accounting
        require_keys_neq!(
            self.stuck_token_mint.key(),
            self.mint.key(),
            TradegateError::InvalidMint
        );

        let destination = if self.stuck_token_mint.key() == NATIVE_SOL_MINT {
            self.claim_native(amount)?;
            self.to.key()
        } else {
            self.claim_spl(amount, bumps.mint)?;
            self.to_ata.key()
        };

        emit!(StuckTokensClaimed {
            stuck_mint: self.stuck_token_mint.key(),
            to: destination,
            amount,
            authority: self.payer.key(),
        });

        Ok(())
    }

    /// Move stuck lamports with a system transfer
    fn claim_native(&self, amount: u64) -> Result<()> {
        invoke(
            &system_instruction::transfer(&self.from.key(), &self.to.key(), amount),
            &[self.from.to_account_info(), self.to.to_account_info()],
        )?;

        Ok(())
    }

    /// Move stuck SPL tokens out of an account held by the mint PDA
    fn claim_spl(&self, amount: u64, mint_bump: u8) -> Result<()> {
        require!(
            !self.stuck_token_mint.data_is_empty(),
            TradegateError::AccountNotFound
        );

        let decimals = {
            let data = self.stuck_token_mint.try_borrow_data()?;
            StateWithExtensions::<MintState>::unpack(&data)
                .map_err(|_| TradegateError::InvalidMint)?
                .base
                .decimals
        };

        // The held account must belong to the foreign mint and be controlled
        // by the keyless mint authority
        let (source_mint, source_owner, source_balance) = {
            let data = self.from_ata.try_borrow_data()?;
            let state = StateWithExtensions::<TokenAccountState>::unpack(&data)
                .map_err(|_| TradegateError::AccountNotFound)?;
            (state.base.mint, state.base.owner, state.base.amount)
        };

        require_keys_eq!(
            source_mint,
            self.stuck_token_mint.key(),
            TradegateError::InvalidMint
        );
        require_keys_eq!(source_owner, self.mint.key(), TradegateError::Unauthorized);
        balance_after_debit(source_balance, amount)?;

        // Create the destination associated account on first claim to this owner
        if self.to_ata.data_is_empty() {
            associated_token::create(CpiContext::new(
                self.associated_token_program.to_account_info(),
                Create {
                    payer: self.payer.to_account_info(),
                    associated_token: self.to_ata.to_account_info(),
                    authority: self.to.to_account_info(),
                    mint: self.stuck_token_mint.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                    token_program: self.token_program.to_account_info(),
                },
            ))?;
        } else {
            let data = self.to_ata.try_borrow_data()?;
            let state = StateWithExtensions::<TokenAccountState>::unpack(&data)
                .map_err(|_| TradegateError::AccountNotFound)?;
            require_keys_eq!(
                state.base.mint,
                self.stuck_token_mint.key(),
                TradegateError::InvalidMint
            );
        }

        let transfer_ix = spl_token_2022::instruction::transfer_checked(
            &self.token_program.key(),
            &self.from_ata.key(),
            &self.stuck_token_mint.key(),
            &self.to_ata.key(),
            &self.mint.key(),
            &[],
            amount,
            decimals,
        )?;

        invoke_signed(
            &transfer_ix,
            &[
                self.from_ata.to_account_info(),
                self.stuck_token_mint.to_account_info(),
                self.to_ata.to_account_info(),
                self.mint.to_account_info(),
            ],
            &[&[MINT_SEED, &[mint_bump]]],
        )?;

        Ok(())
    }
}
