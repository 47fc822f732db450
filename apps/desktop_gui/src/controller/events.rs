//! Backend events and UI actions for the desktop controller.

use std::time::Instant;

use client_core::HumanizeError;
use shared::domain::RequestId;

/// Reported by the backend worker.
pub enum UiEvent {
    HumanizeCompleted {
        request_id: RequestId,
        outcome: Result<String, HumanizeError>,
    },
    WorkerUnavailable(String),
}

/// Everything the reducer reacts to, user-initiated or not.
pub enum UiAction {
    HumanizeRequested,
    ClearRequested,
    CopyRequested,
    DownloadRequested,
    KeyPressed {
        chord: KeyChord,
        input_focused: bool,
    },
    HumanizeCompleted {
        request_id: RequestId,
        outcome: Result<String, HumanizeError>,
    },
    WorkerUnavailable(String),
    Tick(Instant),
}

impl From<UiEvent> for UiAction {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::HumanizeCompleted {
                request_id,
                outcome,
            } => UiAction::HumanizeCompleted {
                request_id,
                outcome,
            },
            UiEvent::WorkerUnavailable(reason) => UiAction::WorkerUnavailable(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKey {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: ChordKey,
    pub ctrl: bool,
    /// Command on macOS.
    pub command: bool,
}

impl KeyChord {
    pub fn is_submit(&self) -> bool {
        self.key == ChordKey::Enter && (self.ctrl || self.command)
    }
}

/// Whether an action changed anything. Consumed key presses must not reach
/// the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Ignored,
}
