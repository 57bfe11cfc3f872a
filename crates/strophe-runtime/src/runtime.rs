// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The frame-loop driver that owns the game services and paces the machine.

use strophe_core::{GameServices, StateMachine};

use crate::clock::FrameClock;
use crate::config::RuntimeConfig;

/// Owns the service locator and drives the state machine once per frame.
///
/// Constructed exactly once by the application's entry point. Construction
/// is the bootstrap phase: the one [`StateMachine`] is registered into the
/// runtime's [`GameServices`] before any frame runs. Everything after that
/// is the driver phase: a plain synchronous loop of
/// [`tick_frame`](Runtime::tick_frame) calls on the same thread.
pub struct Runtime {
    services: GameServices,
    clock: FrameClock,
    config: RuntimeConfig,
    frames: u64,
}

impl Runtime {
    /// Bootstraps a runtime from the given configuration.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        let mut services = GameServices::new();
        StateMachine::bootstrap(&mut services);
        log::info!("runtime started at {} Hz", config.tick_rate);

        Self {
            services,
            clock: FrameClock::new(config.tick_rate),
            config,
            frames: 0,
        }
    }

    /// Borrows the application's service locator.
    #[must_use]
    pub fn services(&self) -> &GameServices {
        &self.services
    }

    /// Mutably borrows the application's service locator, for registering
    /// further game-owned services next to the state machine.
    #[must_use]
    pub fn services_mut(&mut self) -> &mut GameServices {
        &mut self.services
    }

    /// Looks up the state machine registered at bootstrap.
    #[must_use]
    pub fn state_machine_mut(&mut self) -> Option<&mut StateMachine> {
        StateMachine::find_mut(&mut self.services)
    }

    /// Runs exactly one frame: paces the clock, then ticks the machine.
    ///
    /// Safe to call before any initial state is set; the machine treats a
    /// stateless tick as a no-op.
    pub fn tick_frame(&mut self) {
        let dt = self.clock.tick();
        if let Some(machine) = StateMachine::find_mut(&mut self.services) {
            machine.tick(dt);
        }
        self.frames += 1;
        log::trace!("frame {} ({dt:.4}s)", self.frames);
    }

    /// Runs `count` frames back to back.
    pub fn run_frames(&mut self, count: u64) {
        for _ in 0..count {
            self.tick_frame();
        }
    }

    /// Drives the loop until the configured `max_frames` is reached.
    ///
    /// With no frame bound configured this never returns; the process (or a
    /// surrounding thread) is expected to own teardown, as in any game
    /// session.
    pub fn run(&mut self) {
        match self.config.max_frames {
            Some(limit) => {
                while self.frames < limit {
                    self.tick_frame();
                }
                log::info!("runtime stopped after {} frames", self.frames);
            }
            None => loop {
                self.tick_frame();
            },
        }
    }

    /// Frames driven so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The configuration this runtime was built from.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}
