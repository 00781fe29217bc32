//! The renderer seam.

use qs_client::ClientView;

/// Anything that can draw the queue.
///
/// Receives an owned snapshot in queue order (front first).  How moods map
/// to colours, and how ids and patience are labelled, is up to the
/// implementation.
pub trait Renderer {
    fn render(&mut self, clients: &[ClientView]);
}

/// A [`Renderer`] that draws nothing.  Useful for headless runs.
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _clients: &[ClientView]) {}
}
