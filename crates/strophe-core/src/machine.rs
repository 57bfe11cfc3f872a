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

//! The state machine manager: current state, instance cache, transitions.

use std::any::TypeId;
use std::collections::{HashMap, VecDeque};

use crate::services::GameServices;
use crate::state::{State, StateContext, StateKey};

/// Fixed message logged when a lookup finds no registered machine.
const MISSING_MACHINE: &str =
    "game state machine not found; register one with StateMachine::bootstrap";

/// Owns at most one live game state at a time, plus a cache of every state
/// instance constructed so far.
///
/// The cache is a memoization table keyed by variant identity: a variant is
/// constructed lazily on the first transition into it and that same instance
/// receives every later `enter`/`exit` for the rest of the machine's life.
/// Nothing is ever evicted.
///
/// The machine is driven by an external frame loop: the driver calls
/// [`tick`](StateMachine::tick) once per frame, and game code anywhere on
/// the same thread calls [`change_state`](StateMachine::change_state) in
/// response to game events.
pub struct StateMachine {
    current: Option<TypeId>,
    cache: HashMap<TypeId, Box<dyn State>>,
    requests: VecDeque<StateKey>,
}

impl StateMachine {
    /// Creates a machine with no current state and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            cache: HashMap::new(),
            requests: VecDeque::new(),
        }
    }

    /// Registers the one machine into the application's service locator.
    ///
    /// Runs once from the application's bootstrap routine, before the first
    /// frame. The call is idempotent: if a machine is already registered
    /// (a reloaded world bootstrapping twice, say), the existing instance
    /// stays authoritative and is returned unchanged. A second machine is
    /// never created, so no caller can observe a short-lived duplicate.
    pub fn bootstrap(services: &mut GameServices) -> &mut StateMachine {
        if services.contains::<StateMachine>() {
            log::debug!("bootstrap called again; keeping the registered state machine");
        } else {
            services.insert(StateMachine::new());
            log::info!("game state machine registered");
        }
        services
            .get_mut::<StateMachine>()
            .expect("registered just above")
    }

    /// Looks up the registered machine without ever creating one.
    ///
    /// A miss is the one soft failure in this crate: it logs a fixed error
    /// and yields `None` for the caller to branch on.
    #[must_use]
    pub fn find(services: &GameServices) -> Option<&StateMachine> {
        let found = services.get::<StateMachine>();
        if found.is_none() {
            log::error!("{MISSING_MACHINE}");
        }
        found
    }

    /// Mutable twin of [`find`](StateMachine::find).
    #[must_use]
    pub fn find_mut(services: &mut GameServices) -> Option<&mut StateMachine> {
        if !services.contains::<StateMachine>() {
            log::error!("{MISSING_MACHINE}");
            return None;
        }
        services.get_mut::<StateMachine>()
    }

    /// Makes `S` the first current state.
    ///
    /// Startup entry point for boot code; behavior is identical to
    /// [`change_state`](StateMachine::change_state).
    pub fn set_initial_state<S>(&mut self)
    where
        S: State + Default + 'static,
    {
        self.change_state::<S>();
    }

    /// Transitions to the state variant `S`.
    ///
    /// If `S` is already current this is a complete no-op: no hooks run, no
    /// cache mutation, no log line. Otherwise the outgoing state's `exit`
    /// runs strictly before the incoming state's `enter`, with the incoming
    /// instance reused from the cache or default-constructed on first use.
    ///
    /// Transition requests queued by the hooks themselves are processed
    /// in issue order before this call returns.
    pub fn change_state<S>(&mut self)
    where
        S: State + Default + 'static,
    {
        self.change_to(StateKey::of::<S>());
    }

    /// Non-generic twin of [`change_state`](StateMachine::change_state),
    /// taking a prebuilt variant key.
    pub fn change_to(&mut self, key: StateKey) {
        self.transition_once(key);
        self.drain_requests();
    }

    /// Forwards one frame tick to the current state's `update`.
    ///
    /// A silent no-op while no state is current, so the driver may start
    /// ticking before boot code picks an initial state.
    pub fn tick(&mut self, dt: f32) {
        if let Some(id) = self.current {
            if let Some(state) = self.cache.get_mut(&id) {
                let mut ctx = StateContext::new(&mut self.requests);
                state.update(dt, &mut ctx);
            }
        }
        self.drain_requests();
    }

    /// One pass of the transition algorithm. Never drains the request
    /// queue; the public entry points do that, iteratively.
    fn transition_once(&mut self, key: StateKey) {
        if self.current == Some(key.id()) {
            return;
        }

        let previous = self.current_name().unwrap_or("none");

        if let Some(id) = self.current {
            if let Some(state) = self.cache.get_mut(&id) {
                let mut ctx = StateContext::new(&mut self.requests);
                state.exit(&mut ctx);
            }
        }

        let state = self.cache.entry(key.id()).or_insert_with(|| key.build());
        self.current = Some(key.id());
        let mut ctx = StateContext::new(&mut self.requests);
        state.enter(&mut ctx);

        log::info!("state transition: {previous} -> {}", key.name());
    }

    /// Processes queued re-entrant requests in issue order. Hooks may queue
    /// more while this runs; the loop keeps going until the queue is dry.
    fn drain_requests(&mut self) {
        while let Some(next) = self.requests.pop_front() {
            self.transition_once(next);
        }
    }

    /// Borrows the current state, if one is set.
    #[must_use]
    pub fn current(&self) -> Option<&dyn State> {
        self.current
            .and_then(|id| self.cache.get(&id))
            .map(|state| state.as_ref())
    }

    /// Display name of the current state, if one is set.
    #[must_use]
    pub fn current_name(&self) -> Option<&'static str> {
        self.current().map(|state| state.name())
    }

    /// Returns `true` if the current state is the variant `S`.
    #[must_use]
    pub fn is_current<S>(&self) -> bool
    where
        S: State + 'static,
    {
        self.current == Some(TypeId::of::<S>())
    }

    /// Number of state instances constructed so far.
    #[must_use]
    pub fn cached_state_count(&self) -> usize {
        self.cache.len()
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
