use anchor_lang::{
    prelude::*,
    solana_program::{
        program::{invoke, invoke_signed},
        program_pack::Pack,
        system_instruction,
    },
};
use anchor_spl::{
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata,
    },
    token_interface::TokenInterface,
};
use spl_token_2022::{instruction::initialize_mint2, state::Mint as MintState};

use crate::{
    constants::{METADATA_SEED, MINT_SEED, SETTINGS_SEED},
    errors::TradegateError,
    events::TokenInitialized,
    state::Settings,
    utils::validate_metadata_fields,
};

/// Descriptor for the token being created
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct TokenDescriptor {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

/// Create the mint, Settings, and metadata records
/// Runs exactly once; the payer becomes the recorded admin
#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// The Metaplex metadata record to be created for the mint
    /// # PDA Seeds (owned by the token metadata program)
    /// - `METADATA_SEED`
    /// - The token metadata program's address
    /// - The mint's address
    ///
    /// CHECK: Created and validated by the token metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// The mint PDA, created here with itself as the keyless authority
    /// # PDA Seeds
    /// - `MINT_SEED`
    ///
    /// CHECK: Enters unchecked so the handler can probe for an existing
    /// account before any mutation; created manually below
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: UncheckedAccount<'info>,

    /// Pays for account creation and becomes the recorded admin
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Settings PDA, created here with trading disabled
    /// # PDA Seeds
    /// - `SETTINGS_SEED`
    ///
    /// CHECK: Probed and created manually alongside the mint
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump,
    )]
    pub settings: UncheckedAccount<'info>,

    /// The rent sysvar
    pub rent: Sysvar<'info, Rent>,
    /// The system program
    pub system_program: Program<'info, System>,
    /// The token program
    pub token_program: Interface<'info, TokenInterface>,
    /// The token metadata program (Metaplex)
    pub token_metadata_program: Program<'info, Metadata>,
}

impl<'info> InitializeToken<'info> {
    /// Create the mint, Settings, and metadata records
    /// # Arguments
    /// * `descriptor` - The token name, symbol, URI, and decimal precision
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if all three records are created, Err otherwise
    pub fn initialize(
        &mut self,
        descriptor: TokenDescriptor,
        bumps: &InitializeTokenBumps,
    ) -> Result<()> {
        // Probe before any mutation: a live account at either deterministic
        // address means the program is already set up
        require!(
            self.mint.data_is_empty(),
            TradegateError::AlreadyInitialized
        );
        require!(
            self.settings.data_is_empty(),
            TradegateError::AlreadyInitialized
        );

        validate_metadata_fields(&descriptor.name, &descriptor.symbol, &descriptor.uri)?;

        let mint_seeds = &[MINT_SEED, &[bumps.mint]];
        let mint_signer = &[&mint_seeds[..]];

        // Step 1: Create the mint account and hand it to the token program
        self.create_pda_account(
            &self.mint,
            MintState::LEN,
            &self.token_program.key(),
            mint_signer,
        )?;

        // Step 2: Initialize the mint with the PDA as its own authority,
        // so only this program can ever sign for supply changes
        let init_mint_ix = initialize_mint2(
            &self.token_program.key(),
            &self.mint.key(),
            &self.mint.key(),
            None,
            descriptor.decimals,
        )?;
        invoke(&init_mint_ix, &[self.mint.to_account_info()])?;

        // Step 3: Create the Settings account and record the admin,
        // with trading closed until an explicit set_trading(true)
        let settings_seeds = &[SETTINGS_SEED, &[bumps.settings]];
        let settings_signer = &[&settings_seeds[..]];

        self.create_pda_account(
            &self.settings,
            8 + Settings::INIT_SPACE,
            &crate::ID,
            settings_signer,
        )?;

        let settings_state = Settings {
            admin: self.payer.key(),
            trading_enabled: false,
            bump: bumps.settings,
        };
        settings_state.try_serialize(&mut &mut self.settings.try_borrow_mut_data()?[..])?;

        // Step 4: Register the immutable metadata record with the registry,
        // the mint PDA signing as both mint and update authority
        let token_data = DataV2 {
            name: descriptor.name,
            symbol: descriptor.symbol,
            uri: descriptor.uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.to_account_info(),
                CreateMetadataAccountsV3 {
                    metadata: self.metadata.to_account_info(),
                    mint: self.mint.to_account_info(),
                    mint_authority: self.mint.to_account_info(),
                    payer: self.payer.to_account_info(),
                    update_authority: self.mint.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                    rent: self.rent.to_account_info(),
                },
                mint_signer,
            ),
            token_data,
            false,
            true,
            None,
        )?;

        emit!(TokenInitialized {
            mint: self.mint.key(),
            admin: self.payer.key(),
        });

        Ok(())
    }

    /// Create a PDA-addressed account: allocate space, top it up to the
    /// rent-exempt minimum, and assign it to its owning program
    fn create_pda_account(
        &self,
        new_account: &UncheckedAccount<'info>,
        space: usize,
        owner: &Pubkey,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        // Allocate space
        invoke_signed(
            &system_instruction::allocate(&new_account.key(), space as u64),
            &[new_account.to_account_info()],
            signer_seeds,
        )?;

        // Transfer minimum balance
        let shortfall = self
            .rent
            .minimum_balance(space)
            .saturating_sub(new_account.lamports());

        if shortfall > 0 {
            invoke(
                &system_instruction::transfer(&self.payer.key(), &new_account.key(), shortfall),
                &[
                    self.payer.to_account_info(),
                    new_account.to_account_info(),
                    self.system_program.to_account_info(),
                ],
            )?;
        }

        // Assign the account to the program that will own it
        invoke_signed(
            &system_instruction::assign(&new_account.key(), owner),
            &[new_account.to_account_info()],
            signer_seeds,
        )?;

        Ok(())
    }
}
