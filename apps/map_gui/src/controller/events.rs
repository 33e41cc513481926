//! Backend-to-UI events.

use client_core::SubmissionStatus;

pub enum UiEvent {
    SubmissionFinished(SubmissionStatus),
    BackendFailed(String),
}
