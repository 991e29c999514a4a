//! Frame loop driving a [`Simulation`] from a host's refresh callback.

use crate::{error::SimError, simulation::Simulation, surface::Surface};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::info;

/// What the host should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another tick on the next display refresh.
    Continue,
    /// The loop was stopped; do not schedule again.
    Stop,
}

/// Cancels a [`FrameLoop`] from outside the loop. Cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs one simulation frame per host refresh until stopped.
#[derive(Debug)]
pub struct FrameLoop {
    sim: Simulation,
    stop: StopHandle,
    announced_stop: bool,
}

impl FrameLoop {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            stop: StopHandle::default(),
            announced_stop: false,
        }
    }

    /// Draws one frame unless the loop has been stopped.
    ///
    /// ### Returns
    /// [`LoopControl::Continue`] if a frame was drawn and the host should
    /// schedule the next one, [`LoopControl::Stop`] otherwise.
    pub fn tick(&mut self, surface: &mut impl Surface) -> LoopControl {
        if self.stop.is_stopped() {
            if !self.announced_stop {
                self.announced_stop = true;
                info!(frames = self.sim.frame_count(), "frame loop stopped");
            }
            return LoopControl::Stop;
        }

        self.sim.frame(surface);
        LoopControl::Continue
    }

    /// Forwards a host resize notification to the simulation.
    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        self.sim.resize(width, height)
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}
