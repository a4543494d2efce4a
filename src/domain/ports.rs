/// Authorizes a monetary charge. `true` means the charge went through.
pub trait PaymentGateway {
    fn process(&self, amount: f64) -> bool;
}

/// Delivers a message to a recipient. `true` means it was accepted for delivery.
pub trait NotificationService {
    fn send(&self, recipient: &str, message: &str) -> bool;
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for &T {
    fn process(&self, amount: f64) -> bool {
        (**self).process(amount)
    }
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for Box<T> {
    fn process(&self, amount: f64) -> bool {
        (**self).process(amount)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for &T {
    fn send(&self, recipient: &str, message: &str) -> bool {
        (**self).send(recipient, message)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for Box<T> {
    fn send(&self, recipient: &str, message: &str) -> bool {
        (**self).send(recipient, message)
    }
}
