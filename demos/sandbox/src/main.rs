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

// Strophe sandbox
// Headless scripted session exercising the full driver contract: boot,
// menu, a round of play, and back to the menu on the cached instance.

use anyhow::Result;
use strophe_core::{State, StateContext, StateMachine};
use strophe_runtime::{Runtime, RuntimeConfig};

/// Pretends to stream in assets for a few frames, then hands off to the
/// menu from inside its own `update`.
#[derive(Default)]
struct BootState {
    loaded: u32,
}

impl State for BootState {
    fn enter(&mut self, _ctx: &mut StateContext<'_>) {
        log::info!("boot: warming caches");
    }

    fn update(&mut self, _dt: f32, ctx: &mut StateContext<'_>) {
        self.loaded += 1;
        if self.loaded >= 3 {
            ctx.change_state::<MenuState>();
        }
    }

    fn exit(&mut self, _ctx: &mut StateContext<'_>) {
        log::info!("boot: done after {} frames", self.loaded);
    }
}

/// Front menu. `visits` survives across activations because the machine
/// reuses the cached instance every time the menu becomes current again.
#[derive(Default)]
struct MenuState {
    visits: u32,
    idle: u32,
}

impl State for MenuState {
    fn enter(&mut self, _ctx: &mut StateContext<'_>) {
        self.visits += 1;
        self.idle = 0;
        log::info!("menu: visit #{}", self.visits);
    }

    fn update(&mut self, _dt: f32, ctx: &mut StateContext<'_>) {
        self.idle += 1;
        // Scripted "player pressed start" on the second visit's first frame.
        if self.visits == 1 && self.idle >= 2 {
            ctx.change_state::<PlayState>();
        }
    }
}

/// One short round of play, then back to the menu.
#[derive(Default)]
struct PlayState {
    remaining: u32,
}

impl State for PlayState {
    fn enter(&mut self, _ctx: &mut StateContext<'_>) {
        self.remaining = 5;
        log::info!("play: round started");
    }

    fn update(&mut self, dt: f32, ctx: &mut StateContext<'_>) {
        log::debug!("play: {} frames left ({dt:.4}s)", self.remaining);
        self.remaining -= 1;
        if self.remaining == 0 {
            ctx.change_state::<MenuState>();
        }
    }

    fn exit(&mut self, _ctx: &mut StateContext<'_>) {
        log::info!("play: round over");
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    // An optional config path on the command line overrides the scripted
    // defaults, the same way a packaged game would ship a manifest.
    let config = match std::env::args().nth(1) {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig {
            tick_rate: 120,
            max_frames: Some(30),
        },
    };

    let mut runtime = Runtime::new(config);
    runtime
        .state_machine_mut()
        .expect("machine is registered during Runtime::new")
        .set_initial_state::<BootState>();

    runtime.run();

    if let Some(machine) = StateMachine::find(runtime.services()) {
        log::info!(
            "session over in state {:?} with {} cached states",
            machine.current_name(),
            machine.cached_state_count()
        );
    }
    Ok(())
}
