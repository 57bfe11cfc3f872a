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

//! Fixed-timestep frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Paces a frame loop at a fixed tick rate.
///
/// [`tick`](FrameClock::tick) sleeps off whatever remains of the current
/// frame budget and returns the seconds elapsed since the previous tick.
/// Frames that overrun their budget never sleep; the schedule is rebased so
/// the loop does not try to "catch up" with a burst of back-to-back ticks.
pub struct FrameClock {
    tick_duration: Duration,
    next_tick: Instant,
    last_tick: Instant,
}

impl FrameClock {
    /// Creates a clock targeting `tick_rate` ticks per second.
    ///
    /// A zero rate is clamped to one tick per second.
    #[must_use]
    pub fn new(tick_rate: u32) -> Self {
        let tick_duration = Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)));
        let now = Instant::now();
        Self {
            tick_duration,
            next_tick: now,
            last_tick: now,
        }
    }

    /// Waits for the next frame boundary and returns the elapsed `dt`.
    pub fn tick(&mut self) -> f32 {
        self.next_tick += self.tick_duration;
        let now = Instant::now();
        if now < self.next_tick {
            thread::sleep(self.next_tick - now);
        } else {
            log::trace!("frame overran its budget; rebasing the schedule");
            self.next_tick = now + self.tick_duration;
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt
    }

    /// The frame budget this clock paces to.
    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }
}
