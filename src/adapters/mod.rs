// Adapters layer: concrete in-process implementations of the domain ports.

pub mod notification;
pub mod payment;
