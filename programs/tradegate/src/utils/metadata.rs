use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_AND_URI_MAX_LENGTH, SYMBOL_MAX_LENGTH},
    errors::TradegateError,
};

/// Validate descriptor field lengths before creating the on-chain metadata
/// # Arguments
/// * `name` - The token name
/// * `symbol` - The token symbol
/// * `uri` - The metadata URI
/// # Returns
/// * `Result<()>` - Ok if all fields fit the registry's bounds, Err otherwise
pub fn validate_metadata_fields(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(
        name.len() <= NAME_AND_URI_MAX_LENGTH
            && uri.len() <= NAME_AND_URI_MAX_LENGTH
            && symbol.len() <= SYMBOL_MAX_LENGTH,
        TradegateError::MetadataFieldTooLong
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_descriptor_passes() {
        assert!(validate_metadata_fields(
            "Tradegate Token",
            "TGT",
            "https://arweave.net/Xjqaj_rYYQGrsiTk9JRqpguA813w6NGPikcRyA1vAHM",
        )
        .is_ok());
    }

    #[test]
    fn test_boundary_lengths_pass() {
        let name = "n".repeat(NAME_AND_URI_MAX_LENGTH);
        let symbol = "s".repeat(SYMBOL_MAX_LENGTH);
        let uri = "u".repeat(NAME_AND_URI_MAX_LENGTH);

        assert!(validate_metadata_fields(&name, &symbol, &uri).is_ok());
    }

    #[test]
    fn test_oversized_fields_fail() {
        let long = "x".repeat(NAME_AND_URI_MAX_LENGTH + 1);
        let long_symbol = "x".repeat(SYMBOL_MAX_LENGTH + 1);

        assert!(validate_metadata_fields(&long, "TGT", "uri").is_err());
        assert!(validate_metadata_fields("name", &long_symbol, "uri").is_err());
        assert!(validate_metadata_fields("name", "TGT", &long).is_err());
    }

    #[test]
    fn test_empty_fields_pass() {
        assert!(validate_metadata_fields("", "", "").is_ok());
    }
}
