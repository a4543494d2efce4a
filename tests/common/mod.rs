#![allow(dead_code)]

use reservation_service::{NotificationService, PaymentGateway};
use std::sync::Mutex;

/// Payment double that answers with a preset value and remembers every amount it was asked to charge.
pub struct MockPaymentGateway {
    return_value: bool,
    calls: Mutex<Vec<f64>>,
}

impl MockPaymentGateway {
    pub fn returning(return_value: bool) -> Self {
        Self {
            return_value,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<f64> {
        self.calls.lock().unwrap().clone()
    }

    pub fn assert_called_once_with(&self, amount: f64) {
        let calls = self.calls();
        assert_eq!(calls, vec![amount], "expected exactly one charge of {}", amount);
    }

    pub fn assert_called_with(&self, amount: f64) {
        let calls = self.calls();
        assert_eq!(
            calls.last().copied(),
            Some(amount),
            "expected last charge to be {}, got {:?}",
            amount,
            calls
        );
    }

    pub fn assert_not_called(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "expected no charges, got {:?}", calls);
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn process(&self, amount: f64) -> bool {
        self.calls.lock().unwrap().push(amount);
        self.return_value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub recipient: String,
    pub message: String,
}

/// Notification double that records what it was asked to send.
pub struct MockNotificationService {
    return_value: bool,
    sent: Mutex<Vec<SentMessage>>,
}

impl MockNotificationService {
    pub fn returning(return_value: bool) -> Self {
        Self {
            return_value,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationService for MockNotificationService {
    fn send(&self, recipient: &str, message: &str) -> bool {
        self.sent.lock().unwrap().push(SentMessage {
            recipient: recipient.to_string(),
            message: message.to_string(),
        });
        self.return_value
    }
}

/// Notification double with a canned answer and no memory. Tests never look at it.
pub struct StubNotificationService;

impl NotificationService for StubNotificationService {
    fn send(&self, _recipient: &str, _message: &str) -> bool {
        true
    }
}
