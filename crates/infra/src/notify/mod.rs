mod in_app;
mod system;

pub use in_app::{BroadcastInAppNotifier, RecordingInAppNotifier};
pub use system::{NoopSystemNotifier, RecordingSystemNotifier, WebhookNotifier};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Transient in-app notice shown to the user, the always-available
/// notification channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// System-level (OS/browser) notification, only attempted when focus
/// mode is enabled and permission was granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemNotification {
    pub title: String,
    pub body: String,
    /// Dedup tag, the composite fired-reminder key
    pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
}

pub trait IInAppNotifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// The system notification capability. The core only queries the
/// permission, requesting or revoking it is outside this repository.
#[async_trait::async_trait]
pub trait ISystemNotifier: Send + Sync {
    fn permission(&self) -> NotificationPermission;
    async fn send(&self, notification: &SystemNotification) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct Notifiers {
    pub in_app: Arc<dyn IInAppNotifier>,
    pub system: Arc<dyn ISystemNotifier>,
}

impl Notifiers {
    /// In-app notices over a broadcast channel, system notifications
    /// delivered to a webhook.
    pub fn create_webhook(url: String, key: String) -> Self {
        Self {
            in_app: Arc::new(BroadcastInAppNotifier::new()),
            system: Arc::new(WebhookNotifier::new(url, key)),
        }
    }

    /// No system notification capability configured, permission reads
    /// as denied and every reminder degrades to in-app only.
    pub fn create_in_app_only() -> Self {
        Self {
            in_app: Arc::new(BroadcastInAppNotifier::new()),
            system: Arc::new(NoopSystemNotifier {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            in_app: Arc::new(RecordingInAppNotifier::new()),
            system: Arc::new(RecordingSystemNotifier::denied()),
        }
    }
}
