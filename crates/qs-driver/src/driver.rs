//! The `Driver`: timers, input operations, and render forwarding.

use std::time::Duration;

use qs_core::ClientId;
use qs_sim::{FrameReport, NoopObserver, QueueObserver, QueueSim, StepReport};

use crate::{Renderer, Timer};

/// Counts of what one [`Driver::advance`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveReport {
    pub steps:   usize,
    pub frames:  usize,
    pub renders: usize,
}

/// Owns a [`QueueSim`] and the two timers that advance it.
///
/// Input operations ([`add_client`](Self::add_client), [`step`](Self::step),
/// [`start`](Self::start), [`stop`](Self::stop)) and timer firings all run on
/// the caller's thread, one at a time.  After every step, and after every
/// animation frame that changed something, the renderer is handed a fresh
/// snapshot.
pub struct Driver<R: Renderer, O: QueueObserver = NoopObserver> {
    sim:         QueueSim,
    renderer:    R,
    observer:    O,
    step_timer:  Timer,
    frame_timer: Timer,
}

impl<R: Renderer> Driver<R, NoopObserver> {
    /// A driver without an observer.
    pub fn new(sim: QueueSim, renderer: R) -> Self {
        Self::with_observer(sim, renderer, NoopObserver)
    }
}

impl<R: Renderer, O: QueueObserver> Driver<R, O> {
    /// Timer periods come from `sim.config()`.  The frame timer starts
    /// running immediately; the step timer waits for [`start`](Self::start).
    pub fn with_observer(sim: QueueSim, renderer: R, observer: O) -> Self {
        let step_timer = Timer::new(sim.config().step_interval());
        let mut frame_timer = Timer::new(sim.config().frame_interval());
        frame_timer.start();
        Self { sim, renderer, observer, step_timer, frame_timer }
    }

    // ── Input operations ──────────────────────────────────────────────────

    /// Add a client with random patience and redraw.
    pub fn add_client(&mut self) -> ClientId {
        let id = self.sim.add_client();
        self.after_add(id);
        id
    }

    /// Add a client with chosen patience and redraw.
    pub fn add_client_with_patience(&mut self, patience: i32) -> ClientId {
        let id = self.sim.add_client_with_patience(patience);
        self.after_add(id);
        id
    }

    /// Run one step immediately, independent of the step timer, and redraw.
    pub fn step(&mut self) -> StepReport {
        let report = self.sim.step();
        self.observer.on_step(&report);
        self.render();
        report
    }

    /// Begin periodic steps.  Returns `false` if already running; the
    /// pending deadline is then left alone.
    pub fn start(&mut self) -> bool {
        let started = self.step_timer.start();
        if started {
            log::info!("periodic steps started every {:?}", self.step_timer.interval());
        }
        started
    }

    /// Halt periodic steps.  Animation keeps running.  Returns `false` if
    /// already stopped.
    pub fn stop(&mut self) -> bool {
        let stopped = self.step_timer.stop();
        if stopped {
            log::info!("periodic steps stopped at {}", self.sim.tick());
        }
        stopped
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.step_timer.is_running()
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Let `elapsed` wall time pass, firing due timers in order.
    ///
    /// When both timers fall due at the same instant the step runs first, so
    /// the frame that follows already animates toward the new targets.
    pub fn advance(&mut self, elapsed: Duration) -> DriveReport {
        let mut report = DriveReport::default();
        let mut budget = elapsed;

        loop {
            let next = [self.step_timer.remaining(), self.frame_timer.remaining()]
                .into_iter()
                .flatten()
                .min();
            let Some(wait) = next.filter(|&w| w <= budget) else {
                self.step_timer.elapse(budget);
                self.frame_timer.elapse(budget);
                break;
            };

            budget -= wait;
            self.step_timer.elapse(wait);
            self.frame_timer.elapse(wait);

            if self.step_timer.fire_if_due() {
                self.step();
                report.steps += 1;
                report.renders += 1;
            }
            if self.frame_timer.fire_if_due() {
                let frame = self.frame();
                report.frames += 1;
                if frame.changed() {
                    self.render();
                    report.renders += 1;
                }
            }
        }
        report
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn sim(&self) -> &QueueSim {
        &self.sim
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn step_timer(&self) -> &Timer {
        &self.step_timer
    }

    #[inline]
    pub fn frame_timer(&self) -> &Timer {
        &self.frame_timer
    }

    /// Take the simulation, renderer and observer back out.
    pub fn into_parts(self) -> (QueueSim, R, O) {
        (self.sim, self.renderer, self.observer)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn after_add(&mut self, id: ClientId) {
        if let Some(client) = self.sim.get(id) {
            self.observer.on_client_added(&client.view());
        }
        self.render();
    }

    fn frame(&mut self) -> FrameReport {
        let report = self.sim.advance_animation();
        self.observer.on_frame(&report);
        report
    }

    fn render(&mut self) {
        let snapshot = self.sim.snapshot();
        self.renderer.render(&snapshot);
        self.observer.on_render(snapshot.len());
    }
}
