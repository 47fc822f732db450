mod backend_bridge;
mod controller;
mod ui;

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use client_core::HumanizeClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::HumanizerApp;

const APP_TITLE: &str = "Text Humanizer";

#[derive(Parser, Debug)]
struct Args {
    /// Origin of the humanize backend.
    #[arg(long, env = "HUMANIZE_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Give up on a request after this many seconds. Unset waits indefinitely.
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let client = HumanizeClient::with_timeout(
        &args.server_url,
        args.request_timeout_secs.map(Duration::from_secs),
    )?;
    tracing::info!(endpoint = %client.endpoint(), "desktop client starting");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(cmd_rx, ui_tx, Arc::new(client));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    let server_url = args.server_url;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(HumanizerApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
