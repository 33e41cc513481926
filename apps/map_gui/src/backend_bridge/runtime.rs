//! Backend worker thread owning the tokio runtime.

use std::{sync::Arc, thread};

use client_core::SubmissionWorkflow;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    workflow: Arc<SubmissionWorkflow>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        for cmd in cmd_rx.iter() {
            match cmd {
                BackendCommand::SubmitInput => {
                    let status = runtime.block_on(workflow.submit_input());
                    tracing::debug!(?status, "submission finished");
                    if ui_tx.send(UiEvent::SubmissionFinished(status)).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::info!("backend worker stopped");
    });
}
