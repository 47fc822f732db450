use super::*;

use std::time::Duration;

use anyhow::anyhow;
use client_core::GENERIC_FAILURE_MESSAGE;

use crate::controller::events::{ChordKey, KeyChord};

#[derive(Default)]
struct RecordingPorts {
    submitted: Vec<(RequestId, String)>,
    clipboard: Vec<String>,
    fallback: Vec<String>,
    saved: Vec<(String, String)>,
    fail_submit: bool,
    fail_clipboard: bool,
    save_result: Option<SaveOutcome>,
}

impl UiPorts for RecordingPorts {
    fn submit_humanize(&mut self, request_id: RequestId, text: String) -> anyhow::Result<()> {
        if self.fail_submit {
            return Err(anyhow!("Backend command processor disconnected"));
        }
        self.submitted.push((request_id, text));
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail_clipboard {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.clipboard.push(text.to_string());
        Ok(())
    }

    fn fallback_copy(&mut self, text: &str) {
        self.fallback.push(text.to_string());
    }

    fn save_text_file(&mut self, file_name: &str, contents: &str) -> anyhow::Result<SaveOutcome> {
        let outcome = self
            .save_result
            .clone()
            .unwrap_or_else(|| SaveOutcome::Saved(PathBuf::from(file_name)));
        if let SaveOutcome::Saved(_) = outcome {
            self.saved.push((file_name.to_string(), contents.to_string()));
        }
        Ok(outcome)
    }
}

fn state_with_input(input: &str) -> UiState {
    UiState {
        input: input.to_string(),
        ..UiState::default()
    }
}

fn notification(state: &UiState) -> (&str, NotificationKind) {
    let note = state.notification.as_ref().expect("notification");
    (note.message.as_str(), note.kind)
}

fn pending_id(state: &UiState) -> RequestId {
    match &state.trigger {
        TriggerState::AwaitingResponse { request_id, .. } => *request_id,
        TriggerState::Idle => panic!("no request in flight"),
    }
}

fn submit_chord() -> KeyChord {
    KeyChord {
        key: ChordKey::Enter,
        ctrl: true,
        command: false,
    }
}

#[test]
fn empty_input_shows_error_without_submitting() {
    let mut ports = RecordingPorts::default();
    for input in ["", "   \n\t "] {
        let mut state = state_with_input(input);
        dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
        assert_eq!(
            notification(&state),
            (EMPTY_INPUT_MESSAGE, NotificationKind::Error)
        );
        assert!(state.trigger.is_enabled());
    }
    assert!(ports.submitted.is_empty());
}

#[test]
fn successful_response_fills_output_and_stats() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("a b");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    assert!(state.is_busy());
    assert_eq!(ports.submitted.len(), 1);
    assert_eq!(ports.submitted[0].1, "a b");

    let request_id = pending_id(&state);
    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id,
            outcome: Ok("a b c".to_string()),
        },
        &mut ports,
    );

    assert_eq!(state.output, "a b c");
    let stats = state.stats.expect("stats");
    assert_eq!(stats.original_length, 3);
    assert_eq!(stats.humanized_length, 5);
    assert_eq!(stats.similarity_percent, 67);
    assert_eq!(
        notification(&state),
        (HUMANIZE_SUCCESS_MESSAGE, NotificationKind::Success)
    );
    assert!(state.trigger.is_enabled());
}

#[test]
fn output_is_stored_verbatim() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("x");
    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let request_id = pending_id(&state);
    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id,
            outcome: Ok("  spaced\n\nout ".to_string()),
        },
        &mut ports,
    );
    assert_eq!(state.output, "  spaced\n\nout ");
}

#[test]
fn failed_response_surfaces_message_and_keeps_previous_output() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("hello");
    state.output = "earlier".to_string();

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let request_id = pending_id(&state);
    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id,
            outcome: Err(HumanizeError::Rejected("No text provided".to_string())),
        },
        &mut ports,
    );

    assert_eq!(
        notification(&state),
        ("No text provided", NotificationKind::Error)
    );
    assert_eq!(state.output, "earlier");
    assert!(state.trigger.is_enabled());

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let request_id = pending_id(&state);
    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id,
            outcome: Err(HumanizeError::Status { status: 502 }),
        },
        &mut ports,
    );
    assert_eq!(
        notification(&state),
        (GENERIC_FAILURE_MESSAGE, NotificationKind::Error)
    );
    assert!(state.trigger.is_enabled());
}

#[test]
fn trigger_ignores_repeat_requests_while_awaiting() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("text");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let handled = dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);

    assert_eq!(handled, Handled::Ignored);
    assert_eq!(ports.submitted.len(), 1);
}

#[test]
fn stale_response_after_clear_is_dropped() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("first");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let stale = pending_id(&state);
    dispatch(&mut state, UiAction::ClearRequested, &mut ports);
    assert!(state.trigger.is_enabled());

    state.input = "second".to_string();
    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let current = pending_id(&state);
    assert_ne!(stale, current);

    let handled = dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id: stale,
            outcome: Ok("old result".to_string()),
        },
        &mut ports,
    );
    assert_eq!(handled, Handled::Ignored);
    assert!(state.output.is_empty());
    assert!(state.is_busy());

    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id: current,
            outcome: Ok("new result".to_string()),
        },
        &mut ports,
    );
    assert_eq!(state.output, "new result");
}

#[test]
fn clear_resets_text_and_stats_but_not_notification() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("in");
    state.output = "out".to_string();
    state.stats = Some(client_core::compute_stats("in", "out"));
    state.notification = Some(Notification::new(
        COPY_SUCCESS_MESSAGE,
        NotificationKind::Success,
        Instant::now(),
    ));

    dispatch(&mut state, UiAction::ClearRequested, &mut ports);

    assert!(state.input.is_empty());
    assert!(state.output.is_empty());
    assert!(state.stats.is_none());
    assert!(state.notification.is_some());
}

#[test]
fn copy_with_empty_output_only_notifies() {
    let mut ports = RecordingPorts::default();
    let mut state = UiState::default();

    dispatch(&mut state, UiAction::CopyRequested, &mut ports);

    assert_eq!(
        notification(&state),
        (NOTHING_TO_COPY_MESSAGE, NotificationKind::Error)
    );
    assert!(ports.clipboard.is_empty());
    assert!(ports.fallback.is_empty());
}

#[test]
fn copy_writes_clipboard_or_falls_back() {
    let mut ports = RecordingPorts::default();
    let mut state = UiState::default();
    state.output = "copy me".to_string();

    dispatch(&mut state, UiAction::CopyRequested, &mut ports);
    assert_eq!(ports.clipboard, vec!["copy me".to_string()]);
    assert_eq!(
        notification(&state),
        (COPY_SUCCESS_MESSAGE, NotificationKind::Success)
    );

    ports.fail_clipboard = true;
    dispatch(&mut state, UiAction::CopyRequested, &mut ports);
    assert_eq!(ports.fallback, vec!["copy me".to_string()]);
    assert_eq!(
        notification(&state),
        (COPY_SUCCESS_MESSAGE, NotificationKind::Success)
    );
}

#[test]
fn download_saves_output_under_default_name() {
    let mut ports = RecordingPorts::default();
    let mut state = UiState::default();

    dispatch(&mut state, UiAction::DownloadRequested, &mut ports);
    assert_eq!(
        notification(&state),
        (NOTHING_TO_DOWNLOAD_MESSAGE, NotificationKind::Error)
    );
    assert!(ports.saved.is_empty());

    state.output = "line one\nline two".to_string();
    dispatch(&mut state, UiAction::DownloadRequested, &mut ports);
    assert_eq!(
        ports.saved,
        vec![(OUTPUT_FILE_NAME.to_string(), "line one\nline two".to_string())]
    );
    assert_eq!(
        notification(&state),
        (DOWNLOAD_SUCCESS_MESSAGE, NotificationKind::Success)
    );
}

#[test]
fn cancelled_save_dialog_is_silent() {
    let mut ports = RecordingPorts {
        save_result: Some(SaveOutcome::Cancelled),
        ..RecordingPorts::default()
    };
    let mut state = UiState::default();
    state.output = "keep".to_string();

    dispatch(&mut state, UiAction::DownloadRequested, &mut ports);

    assert!(state.notification.is_none());
    assert!(ports.saved.is_empty());
}

#[test]
fn shortcut_submits_only_from_focused_input() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("go");

    let handled = dispatch(
        &mut state,
        UiAction::KeyPressed {
            chord: submit_chord(),
            input_focused: false,
        },
        &mut ports,
    );
    assert_eq!(handled, Handled::Ignored);
    assert!(ports.submitted.is_empty());

    let plain_enter = KeyChord {
        key: ChordKey::Enter,
        ctrl: false,
        command: false,
    };
    let handled = dispatch(
        &mut state,
        UiAction::KeyPressed {
            chord: plain_enter,
            input_focused: true,
        },
        &mut ports,
    );
    assert_eq!(handled, Handled::Ignored);

    let command_enter = KeyChord {
        key: ChordKey::Enter,
        ctrl: false,
        command: true,
    };
    let handled = dispatch(
        &mut state,
        UiAction::KeyPressed {
            chord: command_enter,
            input_focused: true,
        },
        &mut ports,
    );
    assert_eq!(handled, Handled::Consumed);
    assert_eq!(ports.submitted.len(), 1);
}

#[test]
fn shortcut_while_awaiting_is_consumed_without_resubmitting() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("go");
    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);

    let handled = dispatch(
        &mut state,
        UiAction::KeyPressed {
            chord: submit_chord(),
            input_focused: true,
        },
        &mut ports,
    );
    assert_eq!(handled, Handled::Consumed);
    assert_eq!(ports.submitted.len(), 1);
}

#[test]
fn failed_submit_re_enables_trigger() {
    let mut ports = RecordingPorts {
        fail_submit: true,
        ..RecordingPorts::default()
    };
    let mut state = state_with_input("text");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);

    assert!(state.trigger.is_enabled());
    assert_eq!(
        notification(&state),
        (GENERIC_FAILURE_MESSAGE, NotificationKind::Error)
    );
}

#[test]
fn worker_loss_releases_pending_request() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("text");
    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);

    dispatch(
        &mut state,
        UiAction::WorkerUnavailable("runtime failed".to_string()),
        &mut ports,
    );

    assert!(state.trigger.is_enabled());
    assert!(notification(&state).1 == NotificationKind::Error);
}

#[test]
fn tick_expires_notifications_after_ttl() {
    let mut ports = RecordingPorts::default();
    let mut state = UiState::default();
    dispatch(&mut state, UiAction::CopyRequested, &mut ports);
    let shown = Instant::now();

    dispatch(&mut state, UiAction::Tick(shown), &mut ports);
    assert!(state.notification.is_some());

    dispatch(
        &mut state,
        UiAction::Tick(shown + client_core::NOTIFICATION_TTL + Duration::from_millis(10)),
        &mut ports,
    );
    assert!(state.notification.is_none());
}

#[test]
fn newer_notification_replaces_visible_one() {
    let mut ports = RecordingPorts::default();
    let mut state = UiState::default();
    dispatch(&mut state, UiAction::CopyRequested, &mut ports);
    dispatch(&mut state, UiAction::DownloadRequested, &mut ports);
    assert_eq!(
        notification(&state),
        (NOTHING_TO_DOWNLOAD_MESSAGE, NotificationKind::Error)
    );
}

#[test]
fn padded_input_is_submitted_trimmed() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("  a b \n");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);

    assert_eq!(ports.submitted.len(), 1);
    assert_eq!(ports.submitted[0].1, "a b");
    assert_eq!(state.input, "  a b \n");
}

#[test]
fn stats_describe_submitted_text_even_if_input_changes_mid_request() {
    let mut ports = RecordingPorts::default();
    let mut state = state_with_input("  a b  ");

    dispatch(&mut state, UiAction::HumanizeRequested, &mut ports);
    let request_id = pending_id(&state);
    state.input = "x y z w v u t".to_string();
    dispatch(
        &mut state,
        UiAction::HumanizeCompleted {
            request_id,
            outcome: Ok("a b c".to_string()),
        },
        &mut ports,
    );

    let stats = state.stats.expect("stats");
    assert_eq!(stats.original_length, 3);
    assert_eq!(stats.humanized_length, 5);
    assert_eq!(stats.similarity_percent, 67);
    assert_eq!(state.input, "x y z w v u t");
}
