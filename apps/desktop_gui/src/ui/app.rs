use std::{
    fs,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{NotificationKind, RequestId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{ChordKey, Handled, KeyChord, UiAction, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::{dispatch, SaveOutcome, UiPorts, UiState},
};

const INPUT_TEXT_ID: &str = "input-text";
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct HumanizerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: UiState,
    server_url: String,
}

impl HumanizerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: UiState::default(),
            server_url: server_url.into(),
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: UiAction) -> Handled {
        let mut ports = DesktopPorts {
            cmd_tx: &self.cmd_tx,
            ctx,
        };
        dispatch(&mut self.state, action, &mut ports)
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply(ctx, event.into());
        }
    }

    /// Ctrl+Enter / Cmd+Enter inside the input. Runs before the text edit is
    /// drawn so a consumed chord never inserts a newline.
    fn handle_shortcut(&mut self, ctx: &egui::Context) {
        let input_id = egui::Id::new(INPUT_TEXT_ID);
        let input_focused = ctx.memory(|mem| mem.has_focus(input_id));
        let chords: Vec<KeyChord> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some(KeyChord {
                        key: if *key == egui::Key::Enter {
                            ChordKey::Enter
                        } else {
                            ChordKey::Other
                        },
                        ctrl: modifiers.ctrl,
                        command: modifiers.mac_cmd,
                    }),
                    _ => None,
                })
                .filter(KeyChord::is_submit)
                .collect()
        });

        for chord in chords {
            let handled = self.apply(
                ctx,
                UiAction::KeyPressed {
                    chord,
                    input_focused,
                },
            );
            if handled == Handled::Consumed {
                ctx.input_mut(|input| {
                    input.events.retain(|event| {
                        !matches!(
                            event,
                            egui::Event::Key { key: egui::Key::Enter, modifiers, .. }
                                if modifiers.ctrl || modifiers.mac_cmd
                        )
                    })
                });
            }
        }
    }

    fn render(&mut self, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let busy = self.state.is_busy();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Text Humanizer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.server_url);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                columns[0].label(egui::RichText::new("Original text").strong());
                columns[0].add(
                    egui::TextEdit::multiline(&mut self.state.input)
                        .id(egui::Id::new(INPUT_TEXT_ID))
                        .hint_text("Paste your text here... (Ctrl+Enter to humanize)")
                        .desired_rows(18)
                        .desired_width(f32::INFINITY),
                );
                columns[0].horizontal(|ui| {
                    let trigger_label = if busy { "Humanizing…" } else { "Humanize" };
                    if ui
                        .add_enabled(!busy, egui::Button::new(trigger_label))
                        .clicked()
                    {
                        actions.push(UiAction::HumanizeRequested);
                    }
                    if ui.button("Clear").clicked() {
                        actions.push(UiAction::ClearRequested);
                    }
                    if busy {
                        ui.add(egui::Spinner::new());
                    }
                });

                columns[1].label(egui::RichText::new("Humanized text").strong());
                columns[1].add(
                    egui::TextEdit::multiline(&mut self.state.output.as_str())
                        .hint_text("Humanized text will appear here")
                        .desired_rows(18)
                        .desired_width(f32::INFINITY),
                );
                columns[1].horizontal(|ui| {
                    if ui.button("Copy").clicked() {
                        actions.push(UiAction::CopyRequested);
                    }
                    if ui.button("Download").clicked() {
                        actions.push(UiAction::DownloadRequested);
                    }
                });
            });

            if let Some(stats) = &self.state.stats {
                ui.separator();
                ui.horizontal(|ui| {
                    stat_cell(ui, "Original length", &stats.original_length_label());
                    ui.add_space(24.0);
                    stat_cell(ui, "Humanized length", &stats.humanized_length_label());
                    ui.add_space(24.0);
                    stat_cell(ui, "Similarity", &stats.similarity_label());
                });
            }
        });

        self.render_notification(ctx);
        actions
    }

    fn render_notification(&self, ctx: &egui::Context) {
        let Some(note) = &self.state.notification else {
            return;
        };
        let fill = match note.kind {
            NotificationKind::Success => egui::Color32::from_rgb(34, 139, 84),
            NotificationKind::Error => egui::Color32::from_rgb(190, 48, 48),
        };
        egui::Area::new(egui::Id::new("notification-toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&note.message).color(egui::Color32::WHITE));
                    });
            });
        // Wake up in time to hide it.
        ctx.request_repaint_after(note.remaining(Instant::now()));
    }
}

fn stat_cell(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.weak(label);
        ui.label(egui::RichText::new(value).strong().size(18.0));
    });
}

impl eframe::App for HumanizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.apply(ctx, UiAction::Tick(Instant::now()));
        self.handle_shortcut(ctx);

        for action in self.render(ctx) {
            self.apply(ctx, action);
        }

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

/// Side effects of the reducer, bound to this window.
struct DesktopPorts<'a> {
    cmd_tx: &'a Sender<BackendCommand>,
    ctx: &'a egui::Context,
}

impl UiPorts for DesktopPorts<'_> {
    fn submit_humanize(&mut self, request_id: RequestId, text: String) -> anyhow::Result<()> {
        dispatch_backend_command(self.cmd_tx, BackendCommand::Humanize { request_id, text })
    }

    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = Clipboard::new().context("failed to open system clipboard")?;
        clipboard
            .set_text(text.to_string())
            .context("failed to write system clipboard")
    }

    fn fallback_copy(&mut self, text: &str) {
        self.ctx.copy_text(text.to_string());
    }

    fn save_text_file(&mut self, file_name: &str, contents: &str) -> anyhow::Result<SaveOutcome> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return Ok(SaveOutcome::Cancelled);
        };
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(SaveOutcome::Saved(path))
    }
}
