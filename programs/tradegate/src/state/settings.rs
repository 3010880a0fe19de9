use anchor_lang::prelude::*;

/// Settings account - singleton configuration for the program
#[account]
#[derive(InitSpace)]
pub struct Settings {
    // The administrator allowed to mint, burn, gate trading, and recover stuck assets
    pub admin: Pubkey,

    // True once the admin has opened trading for ordinary holders
    pub trading_enabled: bool,

    // Bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl Settings {
    /// Returns true if `key` is the recorded administrator
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    /// Returns true if `authority` may move tokens right now
    /// The admin may always transfer; everyone else waits for the trading gate
    pub fn may_transfer(&self, authority: &Pubkey) -> bool {
        self.trading_enabled || self.is_admin(authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_settings(admin: Pubkey, trading_enabled: bool) -> Settings {
        Settings {
            admin,
            trading_enabled,
            bump: 255,
        }
    }

    #[test]
    fn test_is_admin_matches_recorded_key_only() {
        let admin = Pubkey::new_unique();
        let settings = create_test_settings(admin, false);

        assert!(settings.is_admin(&admin));
        assert!(!settings.is_admin(&Pubkey::new_unique()));
    }

    #[test]
    fn test_gate_closed_blocks_non_admin() {
        let admin = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let settings = create_test_settings(admin, false);

        assert!(!settings.may_transfer(&holder));
    }

    #[test]
    fn test_gate_closed_allows_admin() {
        // The admin must be able to seed liquidity before launch
        let admin = Pubkey::new_unique();
        let settings = create_test_settings(admin, false);

        assert!(settings.may_transfer(&admin));
    }

    #[test]
    fn test_gate_open_allows_everyone() {
        let admin = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let settings = create_test_settings(admin, true);

        assert!(settings.may_transfer(&admin));
        assert!(settings.may_transfer(&holder));
    }
}
