//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::HumanizeTransport;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. Each command runs as its own task so a
/// slow request never blocks the queue.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: Arc<dyn HumanizeTransport>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerUnavailable(format!(
                    "failed to build runtime: {err}"
                )));
                return;
            }
        };
        tracing::info!("backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Humanize { request_id, text } => {
                        let transport = Arc::clone(&transport);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = transport.humanize(&text).await;
                            if let Err(err) = &outcome {
                                tracing::warn!(request = request_id.0, %err, "humanize call failed");
                            }
                            if ui_tx
                                .send(UiEvent::HumanizeCompleted {
                                    request_id,
                                    outcome,
                                })
                                .is_err()
                            {
                                tracing::debug!("ui dropped before humanize result arrived");
                            }
                        });
                    }
                }
            }
            tracing::info!("backend command queue closed; worker exiting");
        });
    })
}
