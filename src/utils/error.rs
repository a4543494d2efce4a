use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Invalid recipient address: {recipient:?}")]
    InvalidRecipient { recipient: String },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Payment of {amount} was declined")]
    PaymentDeclined { amount: f64 },

    #[error("Confirmation could not be delivered to {recipient}")]
    NotificationFailed { recipient: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger initialisation failed: {message}")]
    Logger { message: String },
}

impl ReservationError {
    /// True when the failure happened before any collaborator was called.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            ReservationError::InvalidRecipient { .. } | ReservationError::InvalidAmount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
