use alloc::string::{String, ToString};
use alloc::vec::Vec;

use recycler::{Navigator, Notifier};

/// Something a click handler asked the host to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionEvent {
    Notified(String),
    OpenedDetail(String),
}

/// Records notifications and navigations instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct InteractionLog {
    events: Vec<InteractionEvent>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&InteractionEvent> {
        self.events.last()
    }

    pub fn take(&mut self) -> Vec<InteractionEvent> {
        core::mem::take(&mut self.events)
    }
}

impl Notifier for InteractionLog {
    fn notify(&mut self, message: &str) {
        self.events.push(InteractionEvent::Notified(message.to_string()));
    }
}

impl Navigator for InteractionLog {
    fn open_detail(&mut self, name: &str) {
        self.events.push(InteractionEvent::OpenedDetail(name.to_string()));
    }
}
