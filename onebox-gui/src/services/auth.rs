use onebox::login::{Credentials, LoginMethod};
use tracing::info;

use super::ServiceError;

/// A signed-in account as returned by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub phone_number: String,
}

impl Account {
    /// Short display form of the account, with the middle digits of the
    /// phone number masked out.
    pub fn alias(&self) -> String {
        if onebox::login::is_valid_phone_number(&self.phone_number) {
            format!(
                "{}****{}",
                &self.phone_number[..3],
                &self.phone_number[self.phone_number.len() - 4..]
            )
        } else {
            self.phone_number.clone()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthClient {}

impl AuthClient {
    pub fn new() -> Self {
        Self {}
    }

    /// Asks the service to deliver a one-time code to the given number.
    // TODO: call the SMS gateway once its endpoint is deployed.
    pub async fn send_verification_code(&self, phone_number: &str) -> Result<(), ServiceError> {
        info!("Requesting verification code delivery for {}", phone_number);
        Ok(())
    }

    /// Exchanges credentials for an account session.
    // TODO: call the authentication endpoint once it is deployed.
    pub async fn login(&self, credentials: Credentials) -> Result<Account, ServiceError> {
        match credentials.method {
            LoginMethod::Password => {
                info!("Password login requested for {}", credentials.phone_number);
            }
            LoginMethod::SmsCode => {
                info!("SMS code login requested for {}", credentials.phone_number);
            }
        }
        Ok(Account {
            phone_number: credentials.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_alias_masks_middle_digits() {
        let account = Account {
            phone_number: "13800138000".to_string(),
        };
        assert_eq!(account.alias(), "138****8000");
    }
}
