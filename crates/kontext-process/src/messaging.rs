//! Messaging collaborator contract.

use async_trait::async_trait;
use kontext_core::KontextResult;
use serde::{Deserialize, Serialize};

/// A notification handed to the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Routing subject.
    pub subject: String,
    /// Free-form body.
    pub body: String,
}

impl Notification {
    /// Creates a notification.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Fire-and-forget notification sender.
///
/// Delivery is best-effort; the caller does not observe downstream
/// processing.
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Sends a notification.
    async fn send(&self, notification: Notification) -> KontextResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_construction() {
        let notification = Notification::new("registry.read", "record fetched");
        assert_eq!(notification.subject, "registry.read");
        assert_eq!(notification.body, "record fetched");
    }
}
