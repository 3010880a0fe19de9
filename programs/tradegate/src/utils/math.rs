use anchor_lang::prelude::*;

use crate::errors::TradegateError;

/// Compute the mint supply after crediting `amount`
/// Errors before the token ledger is touched so supply can never wrap
/// # Arguments
/// * `supply` - The committed supply read from the mint account
/// * `amount` - The amount to mint in minor units
/// # Returns
/// * `Result<u64>` - The new supply
#[inline(always)]
pub fn supply_after_mint(supply: u64, amount: u64) -> Result<u64> {
    supply
        .checked_add(amount)
        .ok_or(TradegateError::ArithmeticOverflow.into())
}

/// Compute a balance (or the supply) after debiting `amount`
/// # Arguments
/// * `balance` - The committed balance read from the token account
/// * `amount` - The amount to debit in minor units
/// # Returns
/// * `Result<u64>` - The remaining balance
#[inline(always)]
pub fn balance_after_debit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_sub(amount)
        .ok_or(TradegateError::InsufficientBalance.into())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_supply_after_mint_basic() {
        assert_eq!(supply_after_mint(0, 100).unwrap(), 100);
        assert_eq!(supply_after_mint(u64::MAX - 1, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_supply_after_mint_overflow() {
        assert!(supply_after_mint(u64::MAX, 1).is_err());
        assert!(supply_after_mint(1, u64::MAX).is_err());
    }

    #[test]
    fn test_balance_after_debit_basic() {
        assert_eq!(balance_after_debit(100, 100).unwrap(), 0);
        assert_eq!(balance_after_debit(100, 10).unwrap(), 90);
    }

    #[test]
    fn test_balance_after_debit_insufficient() {
        assert!(balance_after_debit(0, 1).is_err());
        assert!(balance_after_debit(99, 100).is_err());
    }

    #[test]
    fn test_launch_flow_amounts_at_nine_decimals() {
        // 100 tokens minted, 10 burned, at 9 decimals
        let minted = supply_after_mint(0, 100_000_000_000).unwrap();
        assert_eq!(minted, 100_000_000_000);

        let after_burn = balance_after_debit(minted, 10_000_000_000).unwrap();
        assert_eq!(after_burn, 90_000_000_000);
    }

    proptest! {
        #[test]
        fn prop_mint_then_burn_conserves_supply(supply in 0u64..=u64::MAX, amount in 0u64..=u64::MAX) {
            // Any supply credit that fits must debit back to the starting value
            if let Ok(credited) = supply_after_mint(supply, amount) {
                prop_assert_eq!(balance_after_debit(credited, amount).unwrap(), supply);
            }
        }

        #[test]
        fn prop_debit_never_exceeds_balance(balance in 0u64..=u64::MAX, amount in 0u64..=u64::MAX) {
            match balance_after_debit(balance, amount) {
                Ok(remaining) => prop_assert!(amount <= balance && remaining == balance - amount),
                Err(_) => prop_assert!(amount > balance),
            }
        }

        #[test]
        fn prop_transfer_conserves_total(from in 0u64..=u64::MAX, to in 0u64..=u64::MAX, amount in 0u64..=u64::MAX) {
            // A debit/credit pair that both fit must leave the sum unchanged
            if let (Ok(debited), Ok(credited)) =
                (balance_after_debit(from, amount), supply_after_mint(to, amount))
            {
                prop_assert_eq!(
                    debited as u128 + credited as u128,
                    from as u128 + to as u128
                );
            }
        }
    }
}
