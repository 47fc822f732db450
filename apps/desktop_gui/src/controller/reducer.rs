//! State transitions for the humanize screen.
//!
//! Every user or backend action goes through [`dispatch`]. Side effects that
//! leave the process (network, clipboard, file system) are routed through
//! [`UiPorts`] so the transitions can be exercised without a window.

use std::{mem, path::PathBuf, time::Instant};

use client_core::{compute_stats, HumanizeError, Notification, StatsSnapshot};
use shared::domain::{NotificationKind, RequestId};
use tracing::{debug, info, warn};

use crate::controller::events::{Handled, UiAction};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to humanize";
pub const HUMANIZE_SUCCESS_MESSAGE: &str = "Text humanized successfully!";
pub const NOTHING_TO_COPY_MESSAGE: &str = "No text to copy";
pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";
pub const NOTHING_TO_DOWNLOAD_MESSAGE: &str = "No text to download";
pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "File downloaded!";
pub const OUTPUT_FILE_NAME: &str = "humanized-text.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Side effects the reducer asks the shell to perform.
pub trait UiPorts {
    /// Hands the text to the backend worker. The result comes back later as
    /// [`UiAction::HumanizeCompleted`] carrying the same id.
    fn submit_humanize(&mut self, request_id: RequestId, text: String) -> anyhow::Result<()>;
    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()>;
    /// Best-effort copy used when the system clipboard refused the text.
    fn fallback_copy(&mut self, text: &str);
    fn save_text_file(&mut self, file_name: &str, contents: &str) -> anyhow::Result<SaveOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    AwaitingResponse {
        request_id: RequestId,
        submitted_at: Instant,
        /// Trimmed text that was sent; stats are computed against it.
        submitted_text: String,
    },
}

impl TriggerState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, TriggerState::Idle)
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub input: String,
    pub output: String,
    pub stats: Option<StatsSnapshot>,
    pub notification: Option<Notification>,
    pub trigger: TriggerState,
    last_request: RequestId,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        !self.trigger.is_enabled()
    }

    fn notify(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        // A newer notification replaces the visible one and restarts its timer.
        self.notification = Some(Notification::new(message, kind, now));
    }
}

pub fn dispatch(state: &mut UiState, action: UiAction, ports: &mut impl UiPorts) -> Handled {
    let now = Instant::now();
    match action {
        UiAction::HumanizeRequested => request_humanize(state, ports, now),
        UiAction::KeyPressed {
            chord,
            input_focused,
        } => {
            if input_focused && chord.is_submit() {
                request_humanize(state, ports, now);
                Handled::Consumed
            } else {
                Handled::Ignored
            }
        }
        UiAction::HumanizeCompleted {
            request_id,
            outcome,
        } => complete_humanize(state, request_id, outcome, now),
        UiAction::WorkerUnavailable(reason) => {
            warn!(%reason, "humanize worker unavailable");
            if state.is_busy() {
                state.trigger = TriggerState::Idle;
                state.notify(
                    HumanizeError::Unavailable(reason).user_message(),
                    NotificationKind::Error,
                    now,
                );
                Handled::Consumed
            } else {
                Handled::Ignored
            }
        }
        UiAction::ClearRequested => {
            state.input.clear();
            state.output.clear();
            state.stats = None;
            if let TriggerState::AwaitingResponse { request_id, .. } = mem::take(&mut state.trigger)
            {
                debug!(request = request_id.0, "clear discarded in-flight request");
            }
            Handled::Consumed
        }
        UiAction::CopyRequested => {
            if state.output.is_empty() {
                state.notify(NOTHING_TO_COPY_MESSAGE, NotificationKind::Error, now);
                return Handled::Consumed;
            }
            if let Err(err) = ports.write_clipboard(&state.output) {
                warn!(%err, "system clipboard unavailable; using fallback copy");
                ports.fallback_copy(&state.output);
            }
            state.notify(COPY_SUCCESS_MESSAGE, NotificationKind::Success, now);
            Handled::Consumed
        }
        UiAction::DownloadRequested => {
            if state.output.is_empty() {
                state.notify(NOTHING_TO_DOWNLOAD_MESSAGE, NotificationKind::Error, now);
                return Handled::Consumed;
            }
            match ports.save_text_file(OUTPUT_FILE_NAME, &state.output) {
                Ok(SaveOutcome::Saved(path)) => {
                    info!(path = %path.display(), "saved humanized text");
                    state.notify(DOWNLOAD_SUCCESS_MESSAGE, NotificationKind::Success, now);
                }
                Ok(SaveOutcome::Cancelled) => debug!("save dialog cancelled"),
                Err(err) => {
                    warn!(%err, "failed to save humanized text");
                    state.notify(&format!("Save failed: {err}"), NotificationKind::Error, now);
                }
            }
            Handled::Consumed
        }
        UiAction::Tick(now) => {
            if state
                .notification
                .as_ref()
                .is_some_and(|note| note.is_expired(now))
            {
                state.notification = None;
                Handled::Consumed
            } else {
                Handled::Ignored
            }
        }
    }
}

fn request_humanize(state: &mut UiState, ports: &mut impl UiPorts, now: Instant) -> Handled {
    if state.is_busy() {
        return Handled::Ignored;
    }
    let text = state.input.trim();
    if text.is_empty() {
        state.notify(EMPTY_INPUT_MESSAGE, NotificationKind::Error, now);
        return Handled::Consumed;
    }
    let text = text.to_string();

    let request_id = state.last_request.next();
    state.last_request = request_id;
    debug!(request = request_id.0, chars = text.chars().count(), "submitting humanize request");
    state.trigger = TriggerState::AwaitingResponse {
        request_id,
        submitted_at: now,
        submitted_text: text.clone(),
    };

    if let Err(err) = ports.submit_humanize(request_id, text) {
        warn!(%err, "failed to queue humanize request");
        state.trigger = TriggerState::Idle;
        state.notify(
            HumanizeError::Unavailable(err.to_string()).user_message(),
            NotificationKind::Error,
            now,
        );
    }
    Handled::Consumed
}

fn complete_humanize(
    state: &mut UiState,
    request_id: RequestId,
    outcome: Result<String, HumanizeError>,
    now: Instant,
) -> Handled {
    let (submitted_at, submitted_text) = match mem::take(&mut state.trigger) {
        TriggerState::AwaitingResponse {
            request_id: pending,
            submitted_at,
            submitted_text,
        } if pending == request_id => (submitted_at, submitted_text),
        pending => {
            state.trigger = pending;
            debug!(request = request_id.0, "dropping stale humanize response");
            return Handled::Ignored;
        }
    };
    let elapsed_ms = now.saturating_duration_since(submitted_at).as_millis() as u64;

    match outcome {
        Ok(humanized) => {
            info!(request = request_id.0, elapsed_ms, "humanize request succeeded");
            state.stats = Some(compute_stats(&submitted_text, &humanized));
            state.output = humanized;
            state.notify(HUMANIZE_SUCCESS_MESSAGE, NotificationKind::Success, now);
        }
        Err(err) => {
            warn!(request = request_id.0, elapsed_ms, %err, "humanize request failed");
            state.notify(err.user_message(), NotificationKind::Error, now);
        }
    }
    Handled::Consumed
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
