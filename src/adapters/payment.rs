use crate::config::ServiceConfig;
use crate::domain::ports::PaymentGateway;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_amount, Validate};

/// In-process gateway that approves any positive charge up to an optional limit.
#[derive(Debug, Clone, Default)]
pub struct LimitPaymentGateway {
    limit: Option<f64>,
}

impl LimitPaymentGateway {
    /// A limit must be finite and positive.
    pub fn new(limit: Option<f64>) -> Result<Self> {
        if let Some(limit) = limit {
            validate_positive_amount("payment.limit", limit)?;
        }
        Ok(Self { limit })
    }

    pub fn unlimited() -> Self {
        Self { limit: None }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.payment_limit())
    }

    pub fn limit(&self) -> Option<f64> {
        self.limit
    }
}

impl PaymentGateway for LimitPaymentGateway {
    fn process(&self, amount: f64) -> bool {
        if !amount.is_finite() || amount <= 0.0 {
            tracing::warn!("💳 Refusing charge of {}", amount);
            return false;
        }

        match self.limit {
            Some(limit) if amount > limit => {
                tracing::warn!("💳 Charge of {} exceeds limit {}", amount, limit);
                false
            }
            _ => {
                tracing::debug!("💳 Charge of {} approved", amount);
                true
            }
        }
    }
}
