use super::{IInAppNotifier, Notice};
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::info;

/// Fans notices out to any number of UI subscribers. Sending never
/// fails, a notice with no subscribers is simply dropped after logging.
pub struct BroadcastInAppNotifier {
    sender: broadcast::Sender<Notice>,
}

impl BroadcastInAppNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastInAppNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IInAppNotifier for BroadcastInAppNotifier {
    fn notify(&self, notice: Notice) {
        info!("Notice: {} - {}", notice.title, notice.description);
        let _ = self.sender.send(notice);
    }
}

/// Collects notices for assertions in tests.
pub struct RecordingInAppNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingInAppNotifier {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Default for RecordingInAppNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IInAppNotifier for RecordingInAppNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
