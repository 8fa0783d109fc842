//! Resend countdown for one-time SMS codes.
//!
//! After a code was dispatched the user must wait [`RESEND_DELAY_SECS`]
//! seconds before requesting another one. The countdown only holds the
//! remaining seconds; the owning view drives it with a one-second tick
//! source that it keeps alive exactly while [`Countdown::resend_allowed`]
//! is false.

use crate::login::{is_valid_phone_number, ValidationError};

/// Seconds to wait before a verification code may be requested again.
pub const RESEND_DELAY_SECS: u32 = 60;

/// State machine: idle at 0, counting down from [`RESEND_DELAY_SECS`]
/// otherwise. Reaching 0 makes it idle again; there is no other terminal
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    /// Whether a code may be requested now.
    pub fn resend_allowed(&self) -> bool {
        self.remaining == 0
    }

    /// Registers a code request for the given phone number and arms the
    /// countdown. The caller dispatches the code to the delivery service
    /// only on success.
    ///
    /// Re-entry while counting leaves the running countdown untouched: it is
    /// neither reset nor extended. The UI disables the resend control while
    /// counting, the error is for callers reaching the controller directly.
    pub fn request_code(&mut self, phone_number: &str) -> Result<(), ValidationError> {
        if !is_valid_phone_number(phone_number) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        if !self.resend_allowed() {
            return Err(ValidationError::AlreadyCounting);
        }
        self.remaining = RESEND_DELAY_SECS;
        Ok(())
    }

    /// Advances the countdown by one elapsed second.
    ///
    /// The tick source must be cancelled once the countdown reaches 0; a
    /// late tick delivered after that point is a no-op.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_phone_number() {
        let mut countdown = Countdown::new();
        for phone in ["", "123", "138001380001", "1380013800x"] {
            assert_eq!(
                countdown.request_code(phone),
                Err(ValidationError::InvalidPhoneNumber)
            );
            assert_eq!(countdown.remaining_secs(), 0);
            assert!(countdown.resend_allowed());
        }
    }

    #[test]
    fn full_cycle_takes_sixty_ticks() {
        let mut countdown = Countdown::new();
        countdown.request_code("13800138000").unwrap();
        assert!(!countdown.resend_allowed());

        for elapsed in 1..=RESEND_DELAY_SECS {
            countdown.tick();
            assert_eq!(countdown.remaining_secs(), RESEND_DELAY_SECS - elapsed);
        }
        assert!(countdown.resend_allowed());

        // A stray tick delivered after expiry must not underflow.
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn reentry_does_not_reset_the_countdown() {
        let mut countdown = Countdown::new();
        countdown.request_code("13800138000").unwrap();
        countdown.tick();
        countdown.tick();

        assert_eq!(
            countdown.request_code("13800138000"),
            Err(ValidationError::AlreadyCounting)
        );
        assert_eq!(countdown.remaining_secs(), RESEND_DELAY_SECS - 2);
    }

    #[test]
    fn idle_again_after_expiry() {
        let mut countdown = Countdown::new();
        countdown.request_code("13800138000").unwrap();
        for _ in 0..RESEND_DELAY_SECS {
            countdown.tick();
        }
        // The cycle can start over.
        assert_eq!(countdown.request_code("13800138000"), Ok(()));
        assert_eq!(countdown.remaining_secs(), RESEND_DELAY_SECS);
    }
}
