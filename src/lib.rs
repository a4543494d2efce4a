pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{notification::LogNotificationService, payment::LimitPaymentGateway};
pub use config::ServiceConfig;
pub use core::reservation::{ReservationService, DEFAULT_CONFIRMATION_MESSAGE};
pub use domain::model::{Confirmation, ReservationRequest};
pub use domain::ports::{NotificationService, PaymentGateway};
pub use utils::error::{ReservationError, Result};
