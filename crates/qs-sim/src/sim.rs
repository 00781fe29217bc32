//! The `QueueSim` struct: arrivals, steps, and animation frames.

use qs_client::{Client, ClientView};
use qs_core::{ClientId, Frame, Point, QsResult, QueueConfig, SimRng, Tick, Viewport};

use crate::{FrameReport, QueueEvent, StepReport, Transition, animation};

/// The queue and everything needed to advance it.
///
/// Front of `clients` is the head of the line.  Clients are only ever
/// appended (arrivals) or filtered out (departures), so the vector stays in
/// arrival order.
///
/// There is no interior mutability and no `&mut` access to clients from
/// outside: readers get `&[Client]` or an owned [`snapshot`](Self::snapshot).
///
/// Create via [`QueueSimBuilder`][crate::QueueSimBuilder] or
/// [`QueueSim::new`].
pub struct QueueSim {
    config:  QueueConfig,
    clients: Vec<Client>,
    next_id: ClientId,
    rng:     SimRng,
    tick:    Tick,
    frame:   Frame,
}

impl QueueSim {
    /// An empty queue with the default configuration.
    pub fn new(seed: u64) -> Self {
        Self::from_parts(QueueConfig::default(), seed)
    }

    /// Callers must have validated `config`.
    pub(crate) fn from_parts(config: QueueConfig, seed: u64) -> Self {
        Self {
            config,
            clients: Vec::new(),
            next_id: ClientId::FIRST,
            rng:     SimRng::new(seed),
            tick:    Tick::ZERO,
            frame:   Frame::ZERO,
        }
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    /// Append a new client with patience drawn from the configured range.
    pub fn add_client(&mut self) -> ClientId {
        let patience = self.rng.gen_range(self.config.patience_min..=self.config.patience_max);
        self.add_client_with_patience(patience)
    }

    /// Append a new client with a chosen starting patience.
    ///
    /// The client appears at the right edge on the centre line and slides
    /// toward the slot just past the current end of the queue.  Exiting
    /// clients still count toward that length; the next step reslots
    /// everyone.
    pub fn add_client_with_patience(&mut self, patience: i32) -> ClientId {
        let id = self.next_id;
        self.next_id = id.next();

        let spawn = Point::new(self.config.spawn_x(), self.config.viewport.center_y());
        let target_x = self.config.slot_x(self.clients.len());
        self.clients.push(Client::new(id, patience, spawn, target_x));

        log::debug!("{id} joined with patience {patience}, heading for x={target_x}");
        id
    }

    // ── Discrete step ─────────────────────────────────────────────────────

    /// Run one simulation step with a randomly drawn event.
    ///
    /// An empty queue draws nothing and changes nothing.
    pub fn step(&mut self) -> StepReport {
        if self.clients.is_empty() {
            return self.finish_step(None, vec![]);
        }
        let event = QueueEvent::draw(&mut self.rng, self.config.abrupt_exit_probability);
        self.apply_event(event)
    }

    /// Run one simulation step with a specific event.
    ///
    /// Identical to [`step`](Self::step) after the draw.  On an empty queue
    /// the event is ignored and the report carries `event: None`.
    pub fn apply_event(&mut self, event: QueueEvent) -> StepReport {
        if self.clients.is_empty() {
            return self.finish_step(None, vec![]);
        }

        let transitions = event.plan(&self.clients);
        let exited: Vec<ClientId> = transitions
            .into_iter()
            .filter_map(|t| self.apply_transition(t))
            .collect();

        self.reslot();

        log::debug!("{}: {event}, {} exiting", self.tick, exited.len());
        self.finish_step(Some(event), exited)
    }

    /// Returns the client's id when the transition flipped its exit latch.
    fn apply_transition(&mut self, transition: Transition) -> Option<ClientId> {
        let exit_x = self.config.exit_x();
        match transition {
            Transition::DecayPatience { index } => {
                self.clients[index].decrement_patience();
                None
            }
            Transition::ClearPatience { index } => {
                self.clients[index].clear_patience();
                None
            }
            Transition::BeginExit { index, direction } => {
                let client = &mut self.clients[index];
                if client.begin_exit(direction, exit_x) {
                    log::debug!("{} leaving {direction}", client.id());
                    Some(client.id())
                } else {
                    None
                }
            }
        }
    }

    /// Hand out slots 0, 1, 2, … to waiting clients in queue order.
    ///
    /// Exiting clients are skipped: they consume no slot and keep their
    /// exit target.
    fn reslot(&mut self) {
        let config = &self.config;
        for (slot, client) in self.clients.iter_mut().filter(|c| !c.is_exiting()).enumerate() {
            client.assign_slot(config.slot_x(slot));
        }
    }

    fn finish_step(&mut self, event: Option<QueueEvent>, exited: Vec<ClientId>) -> StepReport {
        let report = StepReport { tick: self.tick, event, exited };
        self.tick = self.tick.next();
        report
    }

    // ── Animation frame ───────────────────────────────────────────────────

    /// Move every client one frame toward its target and drop exiting
    /// clients that have left the viewport.
    ///
    /// Waiting clients are never removed, whatever their position.
    pub fn advance_animation(&mut self) -> FrameReport {
        let config = &self.config;

        let moved = self
            .clients
            .iter_mut()
            .map(|c| animation::animate(c, config))
            .filter(|&m| m)
            .count();

        let viewport = config.viewport;
        let margin = config.exit_margin;
        let mut removed = Vec::new();
        self.clients.retain(|c| {
            let gone = c.is_exiting() && viewport.is_past_bounds(c.position(), margin);
            if gone {
                removed.push(c.id());
            }
            !gone
        });

        if !removed.is_empty() {
            log::debug!("{}: removed {removed:?}", self.frame);
        }
        log::trace!("{}: {moved} moved, {} remaining", self.frame, self.clients.len());

        let report = FrameReport { frame: self.frame, moved, removed };
        self.frame = self.frame.next();
        report
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Owned, read-only copy of the queue in order, for renderers.
    pub fn snapshot(&self) -> Vec<ClientView> {
        self.clients.iter().map(Client::view).collect()
    }

    /// The queue in order, front first.
    #[inline]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Id the next arrival will receive.
    #[inline]
    pub fn next_id(&self) -> ClientId {
        self.next_id
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of animation frames advanced so far.
    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[inline]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resize the drawing area.
    ///
    /// Affects spawn position, exit targets handed out from now on, and the
    /// off-screen thresholds.  Exit targets already assigned are kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> QsResult<()> {
        self.config.validate_viewport(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }
}
