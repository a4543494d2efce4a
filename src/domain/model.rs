use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_amount, Validate};

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRequest {
    pub recipient: String,
    pub amount: f64,
}

impl ReservationRequest {
    pub fn new(recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
        }
    }
}

impl Validate for ReservationRequest {
    /// Recipient is checked before amount, so a request that is wrong on both
    /// counts reports the recipient.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("recipient", &self.recipient).map_err(|_| {
            ReservationError::InvalidRecipient {
                recipient: self.recipient.clone(),
            }
        })?;
        validate_positive_amount("amount", self.amount)
            .map_err(|_| ReservationError::InvalidAmount { amount: self.amount })?;
        Ok(())
    }
}

/// The message delivered to the recipient once payment went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub recipient: String,
    pub message: String,
}
