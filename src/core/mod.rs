pub mod reservation;

pub use crate::domain::model::{Confirmation, ReservationRequest};
pub use crate::domain::ports::{NotificationService, PaymentGateway};
pub use crate::utils::error::Result;
