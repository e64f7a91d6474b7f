use std::sync::{Arc, Mutex};

use sourcepredict_wf::errors::Result;
use sourcepredict_wf::notify::{Notification, NotificationLevel, Notifier};

/// A notifier that keeps every notification it receives.
///
/// Clones share the same record, so a test can hand one clone to the
/// workflow and inspect another afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<Notification> {
        self.with_level(NotificationLevel::Info)
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.with_level(NotificationLevel::Error)
    }

    fn with_level(&self, level: NotificationLevel) -> Vec<Notification> {
        self.all().into_iter().filter(|n| n.level == level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
