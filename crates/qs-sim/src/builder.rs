//! Fluent builder for constructing a [`QueueSim`].

use qs_core::{QsResult, QueueConfig, Viewport};

use crate::QueueSim;

/// Fluent builder for [`QueueSim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.config(c)`             | `QueueConfig::default()`         |
/// | `.viewport(v)`           | the config's viewport            |
/// | `.initial_clients(n)`    | 0 — start with an empty queue    |
///
/// # Example
///
/// ```rust,ignore
/// let sim = QueueSimBuilder::new(42)
///     .viewport(Viewport::new(640, 240))
///     .initial_clients(4)
///     .build()?;
/// ```
pub struct QueueSimBuilder {
    seed:            u64,
    config:          Option<QueueConfig>,
    viewport:        Option<Viewport>,
    initial_clients: usize,
}

impl QueueSimBuilder {
    /// Create a builder seeding the simulation RNG with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config:          None,
            viewport:        None,
            initial_clients: 0,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: QueueConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override only the viewport, keeping the other settings.
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Number of clients to add (with random patience) before returning.
    pub fn initial_clients(mut self, n: usize) -> Self {
        self.initial_clients = n;
        self
    }

    /// Validate the configuration and return a ready-to-run [`QueueSim`].
    pub fn build(self) -> QsResult<QueueSim> {
        let mut config = self.config.unwrap_or_default();
        if let Some(v) = self.viewport {
            config.viewport = v;
        }
        config.validate()?;

        let mut sim = QueueSim::from_parts(config, self.seed);
        for _ in 0..self.initial_clients {
            sim.add_client();
        }
        Ok(sim)
    }
}
