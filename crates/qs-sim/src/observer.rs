//! Observer trait for progress reporting.

use qs_client::ClientView;

use crate::{FrameReport, StepReport};

/// Callbacks invoked by whatever drives a [`QueueSim`][crate::QueueSim].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — exit counter
///
/// ```rust,ignore
/// struct ExitCounter { served: usize }
///
/// impl QueueObserver for ExitCounter {
///     fn on_step(&mut self, report: &StepReport) {
///         self.served += report.exited.len();
///     }
/// }
/// ```
pub trait QueueObserver {
    /// Called after a client joins the queue.
    fn on_client_added(&mut self, _client: &ClientView) {}

    /// Called after every step, including no-op steps on an empty queue.
    fn on_step(&mut self, _report: &StepReport) {}

    /// Called after every animation frame.
    fn on_frame(&mut self, _report: &FrameReport) {}

    /// Called after the renderer has been handed a snapshot of `clients`
    /// entries.
    fn on_render(&mut self, _clients: usize) {}
}

/// A [`QueueObserver`] that does nothing.
pub struct NoopObserver;

impl QueueObserver for NoopObserver {}
