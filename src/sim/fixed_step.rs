//! Fixed-timestep driver
//!
//! Wall-clock frame times are fed into an accumulator and the simulation is
//! advanced in constant `SIM_DT` substeps. At 120 Hz a ball slower than
//! 1200 px/s moves less than the paddle face window per substep, so a stall or
//! a fast rally cannot carry it across a paddle.

use super::state::{GameEvent, GameState};
use super::tick::{StepError, TickInput, clamp_dt, tick};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    /// Pause toggle not yet consumed by a substep
    pending_pause: bool,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            pending_pause: false,
        }
    }

    /// Time carried over to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Run as many substeps as `frame_dt` covers
    ///
    /// Afterwards `state.events` holds the events of every substep run during
    /// this frame, in order. The pause toggle is applied by the first substep
    /// only, and is held over if the frame was too short to run one.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        input: &TickInput,
        frame_dt: f32,
    ) -> Result<(), StepError> {
        let dt = clamp_dt(frame_dt, state.tuning.max_frame_dt)?;
        self.accumulator += dt;
        self.pending_pause |= input.pause;

        let mut events: Vec<GameEvent> = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            let substep_input = TickInput {
                pause: self.pending_pause,
                ..input.clone()
            };
            tick(state, &substep_input, self.step)?;
            events.append(&mut state.events);
            self.accumulator -= self.step;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending_pause = false;
        }

        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        state.events = events;
        Ok(())
    }
}
