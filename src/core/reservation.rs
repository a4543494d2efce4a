use crate::config::ServiceConfig;
use crate::core::{Confirmation, NotificationService, PaymentGateway, ReservationRequest, Result};
use crate::utils::error::ReservationError;
use crate::utils::validation::Validate;

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Sua reserva foi confirmada.";

/// Charges the customer and, once the charge succeeds, sends the confirmation.
///
/// Both collaborators are injected at construction. Invalid input is rejected
/// before the payment gateway is called.
pub struct ReservationService<P: PaymentGateway, N: NotificationService> {
    payment_gateway: P,
    notification_service: N,
    confirmation_message: String,
}

impl<P: PaymentGateway, N: NotificationService> ReservationService<P, N> {
    pub fn new(payment_gateway: P, notification_service: N) -> Self {
        Self {
            payment_gateway,
            notification_service,
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }

    /// Fails if `config` does not pass validation.
    pub fn with_config(
        payment_gateway: P,
        notification_service: N,
        config: &ServiceConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            payment_gateway,
            notification_service,
            confirmation_message: config.confirmation_message().to_string(),
        })
    }

    /// Returns `true` only when validation, payment and notification all succeed.
    pub fn reserve_flight(&self, recipient: &str, amount: f64) -> bool {
        self.try_reserve(&ReservationRequest::new(recipient, amount))
            .is_ok()
    }

    pub fn try_reserve(&self, request: &ReservationRequest) -> Result<Confirmation> {
        if let Err(e) = request.validate() {
            tracing::warn!("Reservation rejected: {}", e);
            return Err(e);
        }

        tracing::debug!("Processing payment of {}", request.amount);
        if !self.payment_gateway.process(request.amount) {
            tracing::warn!("Payment of {} declined", request.amount);
            return Err(ReservationError::PaymentDeclined {
                amount: request.amount,
            });
        }

        let confirmation = Confirmation {
            recipient: request.recipient.clone(),
            message: self.confirmation_message.clone(),
        };

        if !self
            .notification_service
            .send(&confirmation.recipient, &confirmation.message)
        {
            tracing::error!(
                "Payment of {} succeeded but confirmation to {} failed",
                request.amount,
                request.recipient
            );
            return Err(ReservationError::NotificationFailed {
                recipient: request.recipient.clone(),
            });
        }

        tracing::info!("Reservation confirmed for {}", request.recipient);
        Ok(confirmation)
    }

    pub fn confirmation_message(&self) -> &str {
        &self.confirmation_message
    }

    pub fn payment_gateway(&self) -> &P {
        &self.payment_gateway
    }

    pub fn notification_service(&self) -> &N {
        &self.notification_service
    }
}
