//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// Submit whatever text the workflow currently holds.
    SubmitInput,
}
