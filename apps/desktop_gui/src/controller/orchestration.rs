//! Command orchestration helpers from UI actions to backend command queue.

use anyhow::bail;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> anyhow::Result<()> {
    let cmd_name = match &cmd {
        BackendCommand::Humanize { .. } => "humanize",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => bail!("UI command queue is full; please retry"),
        Err(TrySendError::Disconnected(_)) => {
            bail!("Backend command processor disconnected (possible startup/runtime failure)")
        }
    }
}
