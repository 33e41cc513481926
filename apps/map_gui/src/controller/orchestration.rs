//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command; on failure leaves a user-facing reason in `status`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<String>,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitInput => "submit_input",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            *status = None;
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = Some("UI command queue is full; please retry".to_string());
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(
                "Backend worker disconnected (possible startup/runtime failure); restart the app"
                    .to_string(),
            );
            false
        }
    }
}
