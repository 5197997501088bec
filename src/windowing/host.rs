use std::sync::mpsc;
use std::sync::mpsc::SendError;

/// Something the embedding host tells the running app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A UI button invoked the callback with this name.
    Click(String),
    Resize { width: u32, height: u32 },
    Shutdown,
}

/// Cloneable sender side of the app's host event queue. Events are drained once per frame.
#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: mpsc::Sender<HostEvent>,
}

impl HostHandle {
    pub(crate) fn new(tx: mpsc::Sender<HostEvent>) -> Self {
        HostHandle { tx }
    }

    pub fn send(&self, event: HostEvent) -> Result<(), SendError<HostEvent>> {
        self.tx.send(event)
    }

    pub fn click<S: Into<String>>(&self, callback: S) -> Result<(), SendError<HostEvent>> {
        self.send(HostEvent::Click(callback.into()))
    }

    pub fn resize(&self, width: u32, height: u32) -> Result<(), SendError<HostEvent>> {
        self.send(HostEvent::Resize { width, height })
    }

    pub fn shutdown(&self) -> Result<(), SendError<HostEvent>> {
        self.send(HostEvent::Shutdown)
    }
}
