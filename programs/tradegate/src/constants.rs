use anchor_lang::prelude::*;

// PDA SEEDS

/// Seed for the token mint PDA
pub const MINT_SEED: &[u8] = b"mint";
/// Seed for the Settings account PDA
pub const SETTINGS_SEED: &[u8] = b"settings";
/// Seed prefix for the Metaplex metadata PDA
pub const METADATA_SEED: &[u8] = b"metadata";

/// Pseudo-mint address clients pass to claim the native asset (SOL)
/// No account exists at this address; it only selects the lamport path
pub const NATIVE_SOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111111");

/// The maximum length for a token symbol
pub const SYMBOL_MAX_LENGTH: usize = 19;

/// The maximum length for a token name or URI
pub const NAME_AND_URI_MAX_LENGTH: usize = 256;
