//! User Models

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::users::email::Email;

/// Address a user has before configuring a real one.
pub const DEFAULT_ADDRESS: &str = "ADDRESS_NOT_SET";

/// Wallet balance, in minor units, given to new users.
pub const DEFAULT_WALLET_MONEY: u64 = 500;

/// User Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub email: Email,
    pub name: String,
    pub wallet_money: u64,
    pub address: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Whether the user has replaced the placeholder address with a real one.
    #[must_use]
    pub fn has_set_non_default_address(&self) -> bool {
        let address = self.address.trim();

        !address.is_empty() && address != DEFAULT_ADDRESS
    }
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    pub wallet_money: u64,
    pub address: String,
}

impl NewUser {
    /// A user with the default wallet balance and no address configured.
    #[must_use]
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
            wallet_money: DEFAULT_WALLET_MONEY,
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn user_with_address(address: &str) -> TestResult<User> {
        Ok(User {
            email: Email::parse("shopper@example.com")?,
            name: "Shopper".to_string(),
            wallet_money: DEFAULT_WALLET_MONEY,
            address: address.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
    }

    #[test]
    fn placeholder_address_is_not_a_real_address() -> TestResult {
        assert!(!user_with_address(DEFAULT_ADDRESS)?.has_set_non_default_address());
        assert!(!user_with_address("   ")?.has_set_non_default_address());

        Ok(())
    }

    #[test]
    fn configured_address_is_recognised() -> TestResult {
        let user = user_with_address("12 Market Street, Springfield")?;

        assert!(user.has_set_non_default_address());

        Ok(())
    }

    #[test]
    fn new_users_start_with_defaults() -> TestResult {
        let user = NewUser::new(Email::parse("shopper@example.com")?, "Shopper");

        assert_eq!(user.wallet_money, DEFAULT_WALLET_MONEY);
        assert_eq!(user.address, DEFAULT_ADDRESS);

        Ok(())
    }
}
