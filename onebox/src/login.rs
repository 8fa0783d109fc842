//! Account credentials and their submission-time validation.
//!
//! The login form accepts either a password or a one-time SMS code for a
//! mainland mobile number. Both credential fields are kept independently so
//! that switching the method back and forth restores whatever was typed
//! before.

use serde::{Deserialize, Serialize};

/// Number of digits of a valid mobile number.
pub const PHONE_NUMBER_LEN: usize = 11;

/// Number of digits of a one-time SMS code.
pub const VERIFICATION_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginMethod {
    #[default]
    Password,
    SmsCode,
}

impl std::fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Password => write!(f, "password"),
            Self::SmsCode => write!(f, "SMS code"),
        }
    }
}

/// Whether the given string is a well-formed mobile number. Format check
/// only, no carrier validation.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_NUMBER_LEN && phone.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub phone_number: String,
    pub password: String,
    pub verification_code: String,
    pub method: LoginMethod,
}

impl Credentials {
    /// Validates the credentials as submitted by the login form. Checks are
    /// applied in a fixed order and the first failure wins.
    pub fn validate(&self, agreed_to_terms: bool) -> Result<(), ValidationError> {
        if !is_valid_phone_number(&self.phone_number) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        if !agreed_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        match self.method {
            LoginMethod::Password => {
                if self.password.is_empty() {
                    return Err(ValidationError::MissingPassword);
                }
            }
            LoginMethod::SmsCode => {
                if self.verification_code.is_empty() {
                    return Err(ValidationError::MissingCode);
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidPhoneNumber,
    TermsNotAccepted,
    MissingPassword,
    MissingCode,
    /// A code was requested while the resend countdown is still running.
    AlreadyCounting,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidPhoneNumber => {
                write!(f, "Please enter a valid {}-digit phone number", PHONE_NUMBER_LEN)
            }
            Self::TermsNotAccepted => {
                write!(
                    f,
                    "Please read and accept the User Agreement and Privacy Policy"
                )
            }
            Self::MissingPassword => write!(f, "Please enter your password"),
            Self::MissingCode => write!(f, "Please enter the verification code"),
            Self::AlreadyCounting => {
                write!(f, "A code was already sent, wait for the countdown to end")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_credentials() -> Credentials {
        Credentials {
            phone_number: "13800138000".to_string(),
            password: String::new(),
            verification_code: "652901".to_string(),
            method: LoginMethod::SmsCode,
        }
    }

    #[test]
    fn phone_number_format() {
        assert!(is_valid_phone_number("13800138000"));
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("138001380000"));
        assert!(!is_valid_phone_number("1380013800a"));
        assert!(!is_valid_phone_number("1380013800 "));
    }

    #[test]
    fn validate_rejects_bad_phone_first() {
        // An invalid phone number wins over any other failure.
        let creds = Credentials {
            phone_number: "123".to_string(),
            method: LoginMethod::Password,
            ..Credentials::default()
        };
        assert_eq!(
            creds.validate(false),
            Err(ValidationError::InvalidPhoneNumber)
        );
    }

    #[test]
    fn validate_rejects_terms_regardless_of_credentials() {
        let mut creds = sms_credentials();
        creds.password = "hunter2".to_string();
        assert_eq!(creds.validate(false), Err(ValidationError::TermsNotAccepted));
        creds.method = LoginMethod::Password;
        assert_eq!(creds.validate(false), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn validate_requires_method_credential() {
        let mut creds = sms_credentials();
        creds.verification_code = String::new();
        assert_eq!(creds.validate(true), Err(ValidationError::MissingCode));

        creds.method = LoginMethod::Password;
        assert_eq!(creds.validate(true), Err(ValidationError::MissingPassword));

        creds.password = "hunter2".to_string();
        assert_eq!(creds.validate(true), Ok(()));
    }

    #[test]
    fn validate_ignores_alternate_field() {
        // The password field being empty must not matter for an SMS login,
        // and vice versa.
        let creds = sms_credentials();
        assert_eq!(creds.validate(true), Ok(()));

        let creds = Credentials {
            phone_number: "13800138000".to_string(),
            password: "hunter2".to_string(),
            verification_code: String::new(),
            method: LoginMethod::Password,
        };
        assert_eq!(creds.validate(true), Ok(()));
    }
}
