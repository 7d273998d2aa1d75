use super::{ISystemNotifier, NotificationPermission, SystemNotification};
use anyhow::Context;
use reqwest::Client;
use std::sync::Mutex;

/// Delivers system notifications to a configured webhook, authenticated
/// with a key header. Having a webhook configured is what "permission
/// granted" means for this implementation.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    key: String,
}

impl WebhookNotifier {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            key,
        }
    }
}

#[async_trait::async_trait]
impl ISystemNotifier for WebhookNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    async fn send(&self, notification: &SystemNotification) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .header("taskzen-webhook-key", &self.key)
            .json(notification)
            .send()
            .await
            .context("Unable to reach notification webhook")?
            .error_for_status()
            .context("Notification webhook rejected the notification")?;
        Ok(())
    }
}

/// Used when no system notification capability is configured.
pub struct NoopSystemNotifier {}

#[async_trait::async_trait]
impl ISystemNotifier for NoopSystemNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    async fn send(&self, _notification: &SystemNotification) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Records sent notifications for assertions in tests.
pub struct RecordingSystemNotifier {
    permission: NotificationPermission,
    sent: Mutex<Vec<SystemNotification>>,
}

impl RecordingSystemNotifier {
    pub fn granted() -> Self {
        Self {
            permission: NotificationPermission::Granted,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: NotificationPermission::Denied,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SystemNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ISystemNotifier for RecordingSystemNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    async fn send(&self, notification: &SystemNotification) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
